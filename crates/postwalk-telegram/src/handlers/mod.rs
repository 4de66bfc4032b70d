//! Telegram update handlers.
//!
//! Each inbound interaction is handled to completion: fetch from the content
//! API, build a screen, send or edit exactly one message. Upstream
//! connection/decode failures render a retry screen instead of crashing the
//! dispatcher.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;

/// Shown when the content API is unreachable or returns garbage.
pub(crate) const UNAVAILABLE: &str = "Temporarily unavailable, please try again.";

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(msg, state).await;
        }
    }
    // Non-command messages are not part of the browsing surface.
    Ok(())
}
