use serde::{Deserialize, Serialize};

/// A message published through the broker.
///
/// Carries the topic it was published under, the payload content, and a
/// Unix timestamp (seconds) recorded at publish time. The payload is an
/// opaque string; the broker never inspects it.
///
/// Serialization is provided so callers can log or forward received
/// messages as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub topic: String,
    pub payload: String,
    pub timestamp: i64,
}

impl Message {
    /// Builds a message stamped with the current wall-clock time.
    pub fn new(topic: &str, payload: &str) -> Self {
        Self {
            topic: topic.to_string(),
            payload: payload.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
