use crate::error::DomainError;
use crate::feedback::Feedback;
use crate::ids::TaskId;
use crate::status::TaskStatus;

/// One uploaded file's journey from submission to terminal result.
///
/// Exactly one of `data`/`error` is populated, and only once the status is
/// `success`/`error` respectively. All mutation goes through the transition
/// methods, which route through `TaskStatus::transition_to`, so a task can
/// never regress or reach an inconsistent shape.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub file_name: String,
    pub status: TaskStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Feedback>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Task {
    /// Create a new pending task for the given file.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            file_name: file_name.into(),
            status: TaskStatus::Pending,
            data: None,
            error: None,
        }
    }

    /// Mark the task as processing. Must currently be pending.
    pub fn start_processing(&mut self) -> Result<(), DomainError> {
        self.status = self.status.transition_to(TaskStatus::Processing)?;
        Ok(())
    }

    /// Finalize with a successful inference result.
    pub fn complete(&mut self, feedback: Feedback) -> Result<(), DomainError> {
        self.status = self.status.transition_to(TaskStatus::Success)?;
        self.data = Some(feedback);
        Ok(())
    }

    /// Finalize with a failure message.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        self.status = self.status.transition_to(TaskStatus::Error)?;
        self.error = Some(message.into());
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
