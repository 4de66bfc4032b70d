use serde::Deserialize;

/// Chat id on the messaging transport (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Message id on the messaging transport (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a sent message, used for edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// Upstream post id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A post as returned by the content API.
///
/// `text` is optional at the serde level: a record without it still
/// deserializes, and the formatter owns the missing-field policy.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub text: Option<String>,
}

/// A comment as returned by the content API. Identity is positional: the
/// index within the post's comment sequence is the only addressing scheme.
#[derive(Clone, Debug, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_without_text_still_deserializes() {
        let p: Post = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(p.id, PostId(7));
        assert!(p.text.is_none());
    }

    #[test]
    fn comment_without_text_still_deserializes() {
        let c: Comment = serde_json::from_str("{}").unwrap();
        assert!(c.text.is_none());
    }

    #[test]
    fn post_with_text() {
        let p: Post = serde_json::from_str(r#"{"id": 1, "text": "hello"}"#).unwrap();
        assert_eq!(p.text.as_deref(), Some("hello"));
    }
}
