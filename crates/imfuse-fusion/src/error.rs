use thiserror::Error;

use imfuse_core::error::CoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FusionError {
    #[error("unknown fusion mode: {0}")]
    UnknownMode(String),

    #[error("invalid registration: {0}")]
    Record(#[from] CoreError),

    #[error("no registration at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
