use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("unknown profile field: {0}")]
    UnknownField(String),

    #[error("draft is locked for editing")]
    Locked,
}
