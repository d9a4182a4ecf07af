pub mod engine;
pub mod message;
pub mod shutdown;
pub mod topic;

pub use engine::Broker;
