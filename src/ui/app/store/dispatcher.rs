use super::action::Action;
use tokio::sync::mpsc;

/// Sending half of the store's inbox.
///
/// Cheap to clone and usable from any thread or task; dispatching never blocks.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(err) = self.tx.send(action.into()) {
            log::warn!("store is shut down, dropping {}", err.0.name());
        }
    }
}
