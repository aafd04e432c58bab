//! Core error type.
//!
//! Stage crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `mt-core` (configuration and primitive parsing).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `mt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
