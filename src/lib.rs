//! # Hubbub
//!
//! `hubbub` is a minimal in-process publish/subscribe primitive. A single
//! [`broker::Broker`] lets callers subscribe to named topics and receive
//! messages published to those topics through blocking rendezvous
//! channels. There is no network layer and no persistence; all state is
//! in-memory and scoped to the broker instance's lifetime.
//!
//! ## Core Modules
//!
//! - `broker`: the broker itself — topics, subscriber endpoints, message
//!   fan-out, and the one-shot shutdown signal.
//! - `config`: loading and merging of the demo binary's configuration.
//! - `utils`: shared utilities, such as logging setup.
//!
//! ## Caller responsibility
//!
//! Delivery is a synchronous handoff performed while the broker's lock is
//! held: every endpoint returned by [`broker::Broker::subscribe`] must
//! eventually be drained or dropped, or a publish to its topic will stall
//! the broker and every concurrent caller.

pub mod broker;
pub mod config;
pub mod utils;

pub use broker::Broker;
pub use broker::message::Message;
pub use broker::shutdown::ShutdownSignal;
pub use broker::topic::Subscription;
