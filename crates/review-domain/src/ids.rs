use crate::error::DomainError;

/// Checks that a string contains only alphanumeric chars, hyphens, and underscores.
fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 64
        && s.chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Unique identifier for one review task, `task_<ulid>`.
///
/// Always generated, never derived from the file name: two uploads of the
/// same file in the same millisecond still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "task_";

    /// Generate a fresh, collision-resistant id.
    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, ulid::Ulid::new()))
    }

    /// Parse an existing id, validating prefix and character set.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if !raw.starts_with(Self::PREFIX) || !is_valid_slug(raw) {
            return Err(DomainError::InvalidTaskId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = DomainError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> String {
        id.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
