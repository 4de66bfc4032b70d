use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use postwalk_core::{domain::ChatId, pagination};

use crate::router::AppState;

use super::UNAVAILABLE;

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
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (cmd, args) = parse_command(text);
    match cmd.as_str() {
        "posts" => send_post_list(&state, chat_id).await,
        "post" => send_post(&state, chat_id, &args).await,
        _ => {
            let _ = state
                .messenger
                .send_text(chat_id, "Unknown command. Use /posts or /post <index>.")
                .await;
        }
    }

    Ok(())
}

/// `/posts`: one message per post, each seeded with a "View comments" button.
async fn send_post_list(state: &AppState, chat_id: ChatId) {
    let posts = match state.api.fetch_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(error = %e, "post list fetch failed");
            let _ = state.messenger.send_text(chat_id, UNAVAILABLE).await;
            return;
        }
    };

    if posts.is_empty() {
        let _ = state.messenger.send_text(chat_id, "No posts yet.").await;
        return;
    }

    for post in &posts {
        let screen = pagination::post_screen(post);
        let _ = state
            .messenger
            .send_with_keyboard(chat_id, &screen.text, screen.keyboard())
            .await;
    }
}

/// `/post <index>`: a single post, addressed by zero-based position in the
/// freshly fetched list.
async fn send_post(state: &AppState, chat_id: ChatId, args: &str) {
    let Ok(index) = args.trim().parse::<usize>() else {
        let _ = state
            .messenger
            .send_text(chat_id, "Usage: /post <index>")
            .await;
        return;
    };

    let posts = match state.api.fetch_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(error = %e, "post fetch failed");
            let _ = state.messenger.send_text(chat_id, UNAVAILABLE).await;
            return;
        }
    };

    match posts.get(index) {
        Some(post) => {
            let screen = pagination::post_screen(post);
            let _ = state
                .messenger
                .send_with_keyboard(chat_id, &screen.text, screen.keyboard())
                .await;
        }
        None => {
            let _ = state
                .messenger
                .send_text(
                    chat_id,
                    &format!("No post at index {index}; there are {} posts.", posts.len()),
                )
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_commands() {
        assert_eq!(parse_command("/posts"), ("posts".to_string(), String::new()));
        assert_eq!(
            parse_command("/post 2"),
            ("post".to_string(), "2".to_string())
        );
    }

    #[test]
    fn strips_bot_mention_and_lowercases() {
        assert_eq!(
            parse_command("/Post@postwalk_bot 2"),
            ("post".to_string(), "2".to_string())
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_command("  /post   7  "),
            ("post".to_string(), "7".to_string())
        );
    }
}
