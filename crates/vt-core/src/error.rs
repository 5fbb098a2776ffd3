//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration flows through them.

use thiserror::Error;

/// Errors raised by `vt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
