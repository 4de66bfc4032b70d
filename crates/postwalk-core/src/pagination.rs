//! Stateless comment pagination.
//!
//! Browsing state lives entirely inside the navigation buttons: each button
//! carries a [`NavToken`] with the post id and the zero-based cursor into
//! that post's comment sequence. A token is produced when a screen is
//! rendered, parsed back when the button is pressed, and superseded by the
//! tokens on the next screen. Nothing is stored server-side, so any button
//! press is a valid (re-)entry into the protocol.

use crate::{
    domain::{Comment, Post, PostId},
    errors::Error,
    format,
    messaging::types::{InlineButton, InlineKeyboard},
    Result,
};

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const VIEW_COMMENTS_LABEL: &str = "View comments";

/// Shown on entry when a post has no comments.
pub const NO_COMMENTS: &str = "This post has no comments yet.";

const COMMENTS_KIND: &str = "comments";
const VIEW_COMMENTS_KIND: &str = "post_comments";

/// Navigation state carried by an inline button.
///
/// Wire format is colon-delimited and must round-trip exactly:
/// `post_comments:<post_id>` (first view of a post's comments) and
/// `comments:<post_id>:<cursor>` (paging within them).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavToken {
    ViewComments { post_id: PostId },
    Comments { post_id: PostId, cursor: usize },
}

impl NavToken {
    pub fn encode(&self) -> String {
        match self {
            NavToken::ViewComments { post_id } => format!("{VIEW_COMMENTS_KIND}:{post_id}"),
            NavToken::Comments { post_id, cursor } => {
                format!("{COMMENTS_KIND}:{post_id}:{cursor}")
            }
        }
    }

    pub fn parse(data: &str) -> Result<Self> {
        let bad = || Error::Decode(format!("bad navigation token: {data:?}"));

        let mut parts = data.split(':');
        let kind = parts.next().ok_or_else(bad)?;
        let post_id = parts
            .next()
            .and_then(|s| s.parse::<i64>().ok())
            .map(PostId)
            .ok_or_else(bad)?;

        let token = match kind {
            VIEW_COMMENTS_KIND => NavToken::ViewComments { post_id },
            COMMENTS_KIND => {
                let cursor = parts
                    .next()
                    .and_then(|s| s.parse::<usize>().ok())
                    .ok_or_else(bad)?;
                NavToken::Comments { post_id, cursor }
            }
            _ => return Err(bad()),
        };

        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(token)
    }
}

/// One navigation button: a label plus the token it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub token: NavToken,
}

/// A rendered view: text plus the controls encoding the legal moves from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub controls: Vec<Control>,
}

impl Screen {
    /// All controls on one row, matching the paging layout (Previous and
    /// Next side by side).
    pub fn keyboard(&self) -> InlineKeyboard {
        let row: Vec<InlineButton> = self
            .controls
            .iter()
            .map(|c| InlineButton {
                label: c.label.clone(),
                callback_data: c.token.encode(),
            })
            .collect();
        if row.is_empty() {
            InlineKeyboard { rows: vec![] }
        } else {
            InlineKeyboard { rows: vec![row] }
        }
    }
}

/// A post rendered with its single "view comments" seed control.
pub fn post_screen(post: &Post) -> Screen {
    Screen {
        text: format::post_text(post),
        controls: vec![Control {
            label: VIEW_COMMENTS_LABEL.to_string(),
            token: NavToken::ViewComments { post_id: post.id },
        }],
    }
}

/// First view of a post's comments (cursor starts at 0).
///
/// An empty sequence renders an explicit no-comments screen; it is never
/// indexed.
pub fn entry(post_id: PostId, comments: &[Comment]) -> Screen {
    if comments.is_empty() {
        return Screen {
            text: NO_COMMENTS.to_string(),
            controls: vec![],
        };
    }
    page(post_id, 0, comments)
}

/// Paging within a post's comments after a fresh re-fetch.
///
/// The incoming cursor was produced by a prior render, but the sequence may
/// have shrunk since: an out-of-range cursor is clamped to the last comment,
/// and an empty sequence falls back to the no-comments screen.
pub fn step(post_id: PostId, cursor: usize, comments: &[Comment]) -> Screen {
    if comments.is_empty() {
        return Screen {
            text: NO_COMMENTS.to_string(),
            controls: vec![],
        };
    }
    page(post_id, cursor.min(comments.len() - 1), comments)
}

fn page(post_id: PostId, cursor: usize, comments: &[Comment]) -> Screen {
    let mut controls = Vec::with_capacity(2);
    if cursor > 0 {
        controls.push(Control {
            label: PREVIOUS_LABEL.to_string(),
            token: NavToken::Comments {
                post_id,
                cursor: cursor - 1,
            },
        });
    }
    if cursor + 1 < comments.len() {
        controls.push(Control {
            label: NEXT_LABEL.to_string(),
            token: NavToken::Comments {
                post_id,
                cursor: cursor + 1,
            },
        });
    }

    Screen {
        text: format::comment_text(&comments[cursor]),
        controls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comments(texts: &[&str]) -> Vec<Comment> {
        texts
            .iter()
            .map(|t| Comment {
                text: Some(t.to_string()),
            })
            .collect()
    }

    fn tokens(screen: &Screen) -> Vec<NavToken> {
        screen.controls.iter().map(|c| c.token).collect()
    }

    #[test]
    fn token_round_trip() {
        let cases = [
            NavToken::ViewComments { post_id: PostId(1) },
            NavToken::ViewComments { post_id: PostId(9_000_000_000) },
            NavToken::Comments {
                post_id: PostId(42),
                cursor: 0,
            },
            NavToken::Comments {
                post_id: PostId(7),
                cursor: 1234,
            },
        ];
        for token in cases {
            assert_eq!(NavToken::parse(&token.encode()).unwrap(), token);
        }
    }

    #[test]
    fn token_wire_format_is_exact() {
        assert_eq!(
            NavToken::ViewComments { post_id: PostId(5) }.encode(),
            "post_comments:5"
        );
        assert_eq!(
            NavToken::Comments {
                post_id: PostId(5),
                cursor: 2
            }
            .encode(),
            "comments:5:2"
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for bad in [
            "",
            "comments",
            "comments:abc:0",
            "comments:1",
            "comments:1:x",
            "comments:1:2:3",
            "post_comments:1:0",
            "post_comments:",
            "likes:1:0",
        ] {
            assert!(NavToken::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn step_offers_prev_iff_not_first_and_next_iff_not_last() {
        for n in 2..=5usize {
            let cs = comments(&vec!["c"; n]);
            for cursor in 0..n {
                let screen = step(PostId(1), cursor, &cs);
                let has_prev = screen.controls.iter().any(|c| c.label == PREVIOUS_LABEL);
                let has_next = screen.controls.iter().any(|c| c.label == NEXT_LABEL);
                assert_eq!(has_prev, cursor > 0, "n={n} cursor={cursor}");
                assert_eq!(has_next, cursor < n - 1, "n={n} cursor={cursor}");
            }
        }
    }

    #[test]
    fn single_comment_post_offers_no_controls() {
        let cs = comments(&["only"]);
        let screen = step(PostId(1), 0, &cs);
        assert_eq!(screen.text, "only");
        assert!(screen.controls.is_empty());

        let screen = entry(PostId(1), &cs);
        assert!(screen.controls.is_empty());
    }

    #[test]
    fn entry_with_no_comments_renders_guard_screen() {
        let screen = entry(PostId(1), &[]);
        assert_eq!(screen.text, NO_COMMENTS);
        assert!(screen.controls.is_empty());
    }

    #[test]
    fn walk_through_three_comments() {
        let post_id = PostId(1);
        let cs = comments(&["c0", "c1", "c2"]);

        let screen = entry(post_id, &cs);
        assert_eq!(screen.text, "c0");
        assert_eq!(
            tokens(&screen),
            vec![NavToken::Comments { post_id, cursor: 1 }]
        );

        let screen = step(post_id, 1, &cs);
        assert_eq!(screen.text, "c1");
        assert_eq!(
            tokens(&screen),
            vec![
                NavToken::Comments { post_id, cursor: 0 },
                NavToken::Comments { post_id, cursor: 2 },
            ]
        );

        let screen = step(post_id, 2, &cs);
        assert_eq!(screen.text, "c2");
        assert_eq!(
            tokens(&screen),
            vec![NavToken::Comments { post_id, cursor: 1 }]
        );
    }

    #[test]
    fn step_is_pure() {
        let cs = comments(&["a", "b", "c"]);
        let first = step(PostId(3), 1, &cs);
        let second = step(PostId(3), 1, &cs);
        assert_eq!(first, second);
    }

    #[test]
    fn stale_cursor_after_shrink_clamps_to_last() {
        let cs = comments(&["a", "b"]);
        let screen = step(PostId(1), 5, &cs);
        assert_eq!(screen.text, "b");
        assert_eq!(
            tokens(&screen),
            vec![NavToken::Comments {
                post_id: PostId(1),
                cursor: 0
            }]
        );

        let screen = step(PostId(1), 3, &[]);
        assert_eq!(screen.text, NO_COMMENTS);
        assert!(screen.controls.is_empty());
    }

    #[test]
    fn post_screen_seeds_view_comments() {
        let post = crate::domain::Post {
            id: PostId(8),
            text: Some("a post".to_string()),
        };
        let screen = post_screen(&post);
        assert_eq!(screen.text, "a post");
        assert_eq!(
            tokens(&screen),
            vec![NavToken::ViewComments { post_id: PostId(8) }]
        );
    }

    #[test]
    fn keyboard_puts_all_controls_on_one_row() {
        let cs = comments(&["a", "b", "c"]);
        let kb = step(PostId(1), 1, &cs).keyboard();
        assert_eq!(kb.rows.len(), 1);
        assert_eq!(kb.rows[0].len(), 2);
        assert_eq!(kb.rows[0][0].callback_data, "comments:1:0");
        assert_eq!(kb.rows[0][1].callback_data, "comments:1:2");

        let kb = entry(PostId(1), &[]).keyboard();
        assert!(kb.rows.is_empty());
    }
}
