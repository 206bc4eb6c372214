use std::sync::Arc;

use teloxide::prelude::*;

use tracing::{error, info};

use pnb_core::{domain::ChatId, format};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    let (cmd, _args) = parse_command(msg.text().unwrap_or_default());

    // Commands never enter the lookup pipeline, whatever their arguments.
    let reply = match cmd.as_str() {
        "start" | "help" => {
            let first_name = msg.from().map(|u| u.first_name.as_str());
            format::welcome(first_name)
        }
        other => {
            info!("unknown command /{other} in chat {}", chat_id.0);
            format::unknown_command()
        }
    };

    if let Err(e) = state.messenger.send(chat_id, &reply).await {
        error!("failed to send command reply to chat {}: {e}", chat_id.0);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_addressed_commands() {
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
        assert_eq!(
            parse_command("/start@numbot hello"),
            ("start".to_string(), "hello".to_string())
        );
        assert_eq!(
            parse_command("  /HELP  extra  args "),
            ("help".to_string(), "extra  args".to_string())
        );
    }
}
