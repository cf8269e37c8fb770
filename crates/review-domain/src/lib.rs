pub mod error;
pub mod feedback;
pub mod ids;
pub mod status;
pub mod task;

pub use error::DomainError;
pub use feedback::Feedback;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::Task;
