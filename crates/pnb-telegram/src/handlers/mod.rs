//! Telegram update handlers.
//!
//! Each inbound message yields at most one reply: commands short-circuit to
//! static texts, any other text runs the lookup pipeline.

use std::sync::Arc;

use teloxide::prelude::*;

use crate::router::AppState;

mod commands;
mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    // Drop anything without a human sender (channel posts, other bots, and
    // the bot's own outgoing messages) before it can enter the pipeline.
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if user.is_bot {
        return Ok(());
    }

    // Only text messages are handled; stickers, photos etc. are ignored.
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if is_command(text) {
        commands::handle_command(msg, state).await
    } else {
        text::handle_text(msg, state).await
    }
}

/// `/`-prefixed messages go to the command handler and never enter the
/// lookup pipeline, whatever follows the slash.
fn is_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_messages_are_routed_as_commands() {
        assert!(is_command("/start"));
        assert!(is_command("  /help"));
        assert!(is_command("/start 918123456789"));
        assert!(is_command("/definitely-not-a-known-command"));
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(!is_command("918123456789"));
        assert!(!is_command("abc123"));
        assert!(!is_command("555/1234"));
        assert!(!is_command(""));
    }
}
