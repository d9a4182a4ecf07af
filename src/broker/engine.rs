use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::broker::message::Message;
use crate::broker::shutdown::{ShutdownSignal, ShutdownTrigger};
use crate::broker::topic::{Subscription, Topic};

/// The broker that manages topics and subscriber endpoints.
///
/// Callers subscribe to named topics and receive published messages
/// through blocking rendezvous channels. All state lives behind one
/// exclusive lock: subscription-list changes, the closed flag, and the
/// entire fan-out loop of a publish are serialized through it, so no
/// subscriber list can change mid-publish. The flip side is that a
/// publish blocked on a slow reader stalls every other broker operation;
/// see `publish`.
///
/// The broker is shared by reference (`Arc<Broker>`); every method takes
/// `&self`.
#[derive(Debug)]
pub struct Broker {
    state: Mutex<BrokerState>,
    shutdown: ShutdownSignal,
}

#[derive(Debug)]
struct BrokerState {
    topics: HashMap<String, Topic>,
    closed: bool,
    trigger: ShutdownTrigger,
}

impl Broker {
    /// Creates an open broker with no topics.
    pub fn new() -> Self {
        let (trigger, shutdown) = ShutdownTrigger::new();
        Self {
            state: Mutex::new(BrokerState {
                topics: HashMap::new(),
                closed: false,
                trigger,
            }),
            shutdown,
        }
    }

    /// Subscribes to a topic, creating the topic if it doesn't exist.
    ///
    /// Returns the receiving endpoint, or `None` if the broker has
    /// already been closed. The topic name is not validated; the empty
    /// string is a topic like any other. Subscribing twice to the same
    /// topic yields two independent endpoints, each of which receives
    /// every message published to it.
    pub fn subscribe(&self, topic: &str) -> Option<Subscription> {
        let mut state = self.state.lock();
        if state.closed {
            debug!("Subscribe to '{}' refused: broker is closed", topic);
            return None;
        }

        let subscription = state
            .topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::new(topic))
            .subscribe();
        info!(
            "Subscriber {} registered on topic '{}'",
            subscription.id(),
            topic
        );
        Some(subscription)
    }

    /// Publishes a message to all current subscribers of a topic.
    ///
    /// Delivery is a blocking rendezvous per subscriber, in subscription
    /// order: this call returns only once every one of the topic's
    /// endpoints has accepted the message. The fan-out runs while the
    /// broker lock is held, so a subscriber that is never drained blocks
    /// this publish *and* every subsequent broker operation. A topic
    /// with no subscribers, or a closed broker, makes this a silent
    /// no-op; no failure is ever reported to the caller.
    pub fn publish(&self, topic: &str, payload: &str) {
        let state = self.state.lock();
        if state.closed {
            debug!("Publish to '{}' dropped: broker is closed", topic);
            return;
        }

        if let Some(t) = state.topics.get(topic) {
            let message = Message::new(topic, payload);
            debug!(
                "Fanning out to {} subscriber(s) on '{}'",
                t.subscriber_count(),
                topic
            );
            t.fan_out(&message);
        }
    }

    /// Closes the broker. Idempotent.
    ///
    /// Fires the shutdown signal exactly once, then closes every
    /// subscriber endpoint: readers draining them observe end-of-stream
    /// instead of blocking. Afterwards `subscribe` returns `None` and
    /// `publish` drops messages; the broker is permanently inert.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }

        state.closed = true;
        state.trigger.fire();
        // Dropping the topics drops every sender, which closes the
        // corresponding endpoints.
        state.topics.clear();
        info!("Broker closed");
    }

    /// True once `close` has run.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// A handle on the one-shot shutdown broadcast, fired by `close`.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }
}

impl Default for Broker {
    fn default() -> Self {
        Self::new()
    }
}
