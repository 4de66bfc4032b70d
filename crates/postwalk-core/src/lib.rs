//! Core domain + application logic for the post/comment browser bot.
//!
//! This crate is intentionally framework-agnostic. The Telegram transport
//! lives behind a port (trait) implemented in the adapter crate.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod format;
pub mod logging;
pub mod messaging;
pub mod pagination;

pub use errors::{Error, Result};
