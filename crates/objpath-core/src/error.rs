use thiserror::Error;

pub type Result<T> = std::result::Result<T, PropError>;

#[derive(Debug, Error)]
pub enum PropError {
    /// A write tried to descend into (or assign on) a value that is not a container.
    #[error("cannot traverse non-container value at segment '{segment}' of path '{path}'")]
    PathTraversal { path: String, segment: String },
    #[error("value cannot be represented as plain data: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("invalid input event: missing {missing}")]
    InvalidEventShape { missing: &'static str },
    #[error("path not found: {path}")]
    NotFound { path: String },
    #[error("cannot remove at root")]
    EmptyPath,
    #[error("empty file")]
    EmptyInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
