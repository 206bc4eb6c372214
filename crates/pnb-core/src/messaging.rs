//! Cross-messenger port (Telegram today).

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{domain::ChatId, format::ReplyMessage, Result};

/// Port for the chat platform the bot replies on.
///
/// Telegram is the first implementation; the shape is small enough that other
/// messengers can fit behind it.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send(&self, chat_id: ChatId, reply: &ReplyMessage) -> Result<()>;

    /// Show a transient "typing" indicator in the chat. Platforms clear it on
    /// their own after a few seconds; see [`TypingIndicator`] for keeping it
    /// alive across a longer operation.
    async fn send_typing(&self, chat_id: ChatId) -> Result<()>;
}

/// Scoped "working on it" indicator: keeps re-sending the typing action until
/// dropped, so the indicator is released on every exit path.
pub struct TypingIndicator {
    handle: tokio::task::JoinHandle<()>,
}

impl TypingIndicator {
    pub fn start(messenger: Arc<dyn MessagingPort>, chat_id: ChatId) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                let _ = messenger.send_typing(chat_id).await;
                // Telegram clears chat actions after ~5s.
                tokio::time::sleep(Duration::from_secs(4)).await;
            }
        });
        Self { handle }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
