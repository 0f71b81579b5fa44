use thiserror::Error;

/// Errors raised by the annotation collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    #[error("an annotation with key {0:?} already exists")]
    DuplicateKey(String),
}
