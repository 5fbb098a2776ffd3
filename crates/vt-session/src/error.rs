use thiserror::Error;
use vt_core::CoreError;

/// Construction-time failures.  Runtime precondition failures are
/// [`Advisory`][crate::Advisory] values instead.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type SessionResult<T> = Result<T, SessionError>;
