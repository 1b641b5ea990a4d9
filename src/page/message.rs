use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// How long a message stays visible.
pub const MESSAGE_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// The page's message banner.
///
/// Every `show` starts its own hide timer. Timers are never cancelled, so a
/// timer left over from an earlier message hides whatever is showing when it
/// fires.
#[derive(Debug, Clone)]
pub struct MessageBox {
    state: Arc<watch::Sender<Option<Message>>>,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBox {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, text: impl Into<String>, kind: MessageKind) {
        self.state.send_replace(Some(Message {
            text: text.into(),
            kind,
        }));

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(MESSAGE_DISPLAY).await;
            state.send_replace(None);
        });
    }

    /// The message currently on screen, if any.
    pub fn visible(&self) -> Option<Message> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Message>> {
        self.state.subscribe()
    }
}
