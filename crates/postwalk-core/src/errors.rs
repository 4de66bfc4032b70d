/// Core error type.
///
/// Adapter crates map their specific errors into this type so the bot core
/// can handle failures consistently (user-facing "try again" vs startup
/// failure).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
