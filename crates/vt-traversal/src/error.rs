use thiserror::Error;
use vt_core::CoreError;

#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("cannot traverse an empty route")]
    EmptyRoute,

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type TraversalResult<T> = Result<T, TraversalError>;
