use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use postwalk_core::{api::ApiClient, config::Config, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

/// Shared, read-only state injected into every handler.
///
/// Built once at startup; there is no per-interaction mutable state, so the
/// dispatcher may run interactions from independent chats concurrently.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub api: ApiClient,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, api: ApiClient) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("postwalk started: @{}", me.username());
    }
    tracing::info!(api_url = %cfg.api_url, "browsing content API");

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        api,
        messenger,
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
