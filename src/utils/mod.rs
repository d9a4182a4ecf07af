//! The `utils` module provides shared plumbing used across the crate,
//! currently the `tracing` initialization helper.

pub mod logging;
