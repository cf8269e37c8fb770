/// Errors for review domain schema validation.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
