use thiserror::Error;

use crate::block::BlockKind;
use crate::model::RecordId;

#[derive(Error, Debug)]
pub enum PhxError {
    #[error("{what} index {index} is out of range (len {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{operation} does not apply to a {kind} block")]
    InvalidVariant {
        operation: String,
        kind: BlockKind,
    },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Save did not complete: {0}")]
    PersistenceFailed(String),

    #[error("No workout is being edited")]
    NoWorkingCopy,

    #[error("Workout day not found: {0}")]
    NotFound(RecordId),

    #[error("Template not found: {0}")]
    TemplateNotFound(RecordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl PhxError {
    pub(crate) fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { what, index, len }
    }

    pub(crate) fn invalid_variant(operation: impl Into<String>, kind: BlockKind) -> Self {
        Self::InvalidVariant {
            operation: operation.into(),
            kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, PhxError>;
