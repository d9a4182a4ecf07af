use tracing::warn;
use uuid::Uuid;

use crate::broker::message::Message;

pub type SubscriberId = String;

/// One registered subscriber endpoint: the broker-held sending half of a
/// rendezvous channel, tagged with an id used only for log correlation.
#[derive(Debug)]
pub struct SubscriberHandle {
    pub id: SubscriberId,
    sender: flume::Sender<Message>,
}

/// A topic and its subscribers, kept in subscription order.
///
/// The list only ever grows: there is no unsubscribe operation, and the
/// handles are dropped all at once when the broker closes. Fan-out for a
/// single publish walks the list front to back, so subscribers registered
/// earlier receive each message before subscribers registered later.
#[derive(Debug, Default)]
pub struct Topic {
    pub name: String,
    subscribers: Vec<SubscriberHandle>,
}

impl Topic {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscribers: Vec::new(),
        }
    }

    /// Registers a new subscriber and returns its receiving endpoint.
    ///
    /// Each call creates a fresh rendezvous channel; the same caller may
    /// subscribe any number of times and gets one endpoint per call.
    pub fn subscribe(&mut self) -> Subscription {
        let id = Uuid::new_v4().to_string();
        let (sender, receiver) = flume::bounded(0);
        self.subscribers.push(SubscriberHandle {
            id: id.clone(),
            sender,
        });
        Subscription {
            id,
            topic: self.name.clone(),
            receiver,
        }
    }

    /// Hands `message` to every subscriber, in subscription order.
    ///
    /// Every send is a blocking rendezvous: it returns once the reader on
    /// the other side has accepted the message. A subscriber whose
    /// `Subscription` has been dropped is skipped with a warning.
    pub fn fan_out(&self, message: &Message) {
        for sub in &self.subscribers {
            if let Err(e) = sub.sender.send(message.clone()) {
                warn!(
                    "Dropping message for subscriber {} on '{}': {}",
                    sub.id, self.name, e
                );
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// The receiving end of one subscription.
///
/// Returned by `Broker::subscribe`; the broker keeps the sending half.
/// Messages arrive through a rendezvous handoff, so a publisher is blocked
/// until this endpoint is read — every `Subscription` must eventually be
/// drained (or dropped), or the broker and any concurrent publisher can
/// stall behind it.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    topic: String,
    receiver: flume::Receiver<Message>,
}

impl Subscription {
    /// Blocks until the next message arrives.
    ///
    /// Returns `None` once the broker has closed this endpoint; after
    /// that, every call returns `None` immediately.
    pub fn recv(&self) -> Option<Message> {
        self.receiver.recv().ok()
    }

    /// Non-blocking probe; `None` means nothing is currently being
    /// handed to this endpoint (or the endpoint is closed).
    pub fn try_recv(&self) -> Option<Message> {
        self.receiver.try_recv().ok()
    }

    /// Drains this endpoint until end-of-stream.
    pub fn iter(&self) -> impl Iterator<Item = Message> + '_ {
        self.receiver.iter()
    }

    /// True once the broker has closed this endpoint.
    pub fn is_closed(&self) -> bool {
        self.receiver.is_disconnected()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}
