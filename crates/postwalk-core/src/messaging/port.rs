use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::InlineKeyboard,
    Result,
};

/// Chat-transport port.
///
/// Telegram is the first implementation; the shape is transport-neutral so
/// another adapter can sit behind the same interface.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    async fn send_with_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef>;

    async fn edit_with_keyboard(
        &self,
        msg: MessageRef,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()>;

    /// Acknowledge a button press so the client drops its pending spinner.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
