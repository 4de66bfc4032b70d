use std::sync::Arc;

use teloxide::{prelude::*, types::CallbackQuery};

use postwalk_core::{
    domain::{ChatId, MessageId, MessageRef},
    pagination::{self, NavToken},
};

use crate::router::AppState;

use super::UNAVAILABLE;

/// Button press: decode the navigation token it carries and render the next
/// screen. A `post_comments` token opens a new comment view (new message);
/// a `comments` token pages within one (edits the originating message).
pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let data = q.data.clone().unwrap_or_default();
    let origin = q.message.as_ref().map(|m| MessageRef {
        chat_id: ChatId(m.chat.id.0),
        message_id: MessageId(m.id.0),
    });

    // Always ack so the client drops its pending spinner, junk payloads
    // included.
    let _ = state.messenger.answer_callback(&q.id, None).await;

    let Some(origin) = origin else {
        return Ok(());
    };

    let token = match NavToken::parse(&data) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unparseable callback payload");
            return Ok(());
        }
    };

    match token {
        NavToken::ViewComments { post_id } => match state.api.fetch_comments(post_id).await {
            Ok(comments) => {
                let screen = pagination::entry(post_id, &comments);
                let _ = state
                    .messenger
                    .send_with_keyboard(origin.chat_id, &screen.text, screen.keyboard())
                    .await;
            }
            Err(e) => {
                tracing::warn!(error = %e, post_id = post_id.0, "comment fetch failed on entry");
                let _ = state.messenger.send_text(origin.chat_id, UNAVAILABLE).await;
            }
        },
        NavToken::Comments { post_id, cursor } => match state.api.fetch_comments(post_id).await {
            Ok(comments) => {
                let screen = pagination::step(post_id, cursor, &comments);
                let _ = state
                    .messenger
                    .edit_with_keyboard(origin, &screen.text, screen.keyboard())
                    .await;
            }
            Err(e) => {
                tracing::warn!(error = %e, post_id = post_id.0, "comment fetch failed on step");
                // New message, so the original keyboard stays usable for a
                // retry.
                let _ = state.messenger.send_text(origin.chat_id, UNAVAILABLE).await;
            }
        },
    }

    Ok(())
}
