use std::sync::Arc;

use teloxide::prelude::*;

use tracing::{error, info};

use pnb_core::{domain::ChatId, messaging::TypingIndicator};

use crate::router::AppState;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };

    info!("received query {:?} from chat {}", text.trim(), chat_id.0);

    let reply = {
        // Guard scope: the indicator is released on every pipeline outcome.
        let _typing = TypingIndicator::start(state.messenger.clone(), chat_id);
        state.pipeline.run(&text).await
    };

    if let Err(e) = state.messenger.send(chat_id, &reply).await {
        error!("failed to send reply to chat {}: {e}", chat_id.0);
    }
    Ok(())
}
