use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::deletion::{ActionDispatch, Navigator};
use crate::search::SearchAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiMessage {
    Navigate(String),
    Action(SearchAction),
}

/// Hands navigation requests and state updates back to the event loop.
#[derive(Clone)]
pub struct UiBus {
    tx: UnboundedSender<UiMessage>,
}

impl UiBus {
    pub fn channel() -> (Self, UnboundedReceiver<UiMessage>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, msg: UiMessage) {
        if self.tx.send(msg).is_err() {
            warn!("ui event loop is gone; message dropped");
        }
    }
}

impl Navigator for UiBus {
    fn update(&self, path: &str) {
        self.send(UiMessage::Navigate(path.to_string()));
    }
}

impl ActionDispatch for UiBus {
    fn dispatch(&self, action: SearchAction) {
        self.send(UiMessage::Action(action));
    }
}
