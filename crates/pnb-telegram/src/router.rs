use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tracing::{debug, info};

use pnb_core::{
    config::Config, lookup::LookupPort, messaging::MessagingPort, pipeline::Pipeline,
};

use crate::handlers;
use crate::TelegramMessenger;

/// Long-lived objects shared by all handlers. Per-message pipeline runs hang
/// no state off this beyond the injected clients.
pub struct AppState {
    pub messenger: Arc<dyn MessagingPort>,
    pub pipeline: Arc<Pipeline>,
}

pub async fn run_polling(cfg: Arc<Config>, lookup: Arc<dyn LookupPort>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("phone number bot started: @{}", me.username());
    }
    debug!("telegram app id: {}", cfg.telegram_api_id);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let pipeline = Arc::new(Pipeline::new(&cfg, lookup));

    let state = Arc::new(AppState {
        messenger,
        pipeline,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
