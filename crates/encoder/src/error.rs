use thiserror::Error;

/// Local upload constraint violations, detected before any network activity.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("file exceeds max size ({size} > {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("unsupported file type: {0} (allowed: JPEG, PNG, WebP)")]
    UnsupportedType(String),

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),
}
