/// Observer half of the broker's one-shot shutdown broadcast.
///
/// The broker holds the sending half of an empty rendezvous channel and
/// drops it exactly once, when it closes. Nothing is ever sent through
/// the channel; the disconnect itself is the signal, so any number of
/// cloned handles observe it.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    receiver: flume::Receiver<()>,
}

impl ShutdownSignal {
    /// Blocks until the broker closes. Returns immediately if it
    /// already has.
    pub fn wait(&self) {
        // Only ever terminates by disconnect.
        let _ = self.receiver.recv();
    }

    /// True once the broker has closed.
    pub fn is_fired(&self) -> bool {
        self.receiver.is_disconnected()
    }
}

/// Firing half, kept inside the broker's locked state so the signal
/// fires under the same lock that flips the closed flag.
#[derive(Debug)]
pub struct ShutdownTrigger {
    sender: Option<flume::Sender<()>>,
}

impl ShutdownTrigger {
    pub fn new() -> (Self, ShutdownSignal) {
        let (sender, receiver) = flume::bounded(0);
        (
            Self {
                sender: Some(sender),
            },
            ShutdownSignal { receiver },
        )
    }

    /// Fires the signal. Subsequent calls are no-ops.
    pub fn fire(&mut self) {
        self.sender.take();
    }
}
