//! Display text extraction for posts and comments.
//!
//! A record without its text field renders as a fixed sentinel string in the
//! chat instead of aborting the interaction; the missing-field condition is
//! fully absorbed here and never propagates.

use crate::{
    domain::{Comment, Post},
    errors::Error,
    Result,
};

/// Rendered in place of a record whose text field is absent.
pub const MISSING_TEXT: &str = "[record has no text]";

pub fn post_text(post: &Post) -> String {
    recover(text_field(post.text.as_deref(), "post.text"))
}

pub fn comment_text(comment: &Comment) -> String {
    recover(text_field(comment.text.as_deref(), "comment.text"))
}

fn text_field(text: Option<&str>, field: &'static str) -> Result<String> {
    text.map(str::to_string).ok_or(Error::MissingField(field))
}

fn recover(res: Result<String>) -> String {
    match res {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "record missing its text field, rendering sentinel");
            MISSING_TEXT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostId;

    #[test]
    fn post_text_returns_field() {
        let post = Post {
            id: PostId(1),
            text: Some("hello".to_string()),
        };
        assert_eq!(post_text(&post), "hello");
    }

    #[test]
    fn missing_post_text_yields_sentinel() {
        let post = Post {
            id: PostId(1),
            text: None,
        };
        assert_eq!(post_text(&post), MISSING_TEXT);
    }

    #[test]
    fn missing_comment_text_yields_sentinel() {
        let comment = Comment { text: None };
        assert_eq!(comment_text(&comment), MISSING_TEXT);
    }
}
