use tegaki_review_domain::{Feedback, Task, TaskId};

/// Everything that can change the result collection. All producers route
/// through one serialized channel, so events never race.
#[derive(Debug)]
pub enum TaskEvent {
    /// A whole batch of freshly created pending tasks, in submission order.
    /// Applied as one atomic prepend; readers never see a partial batch.
    BatchSubmitted(Vec<Task>),

    /// One task's state change, addressed by id — never by position, since
    /// sibling tasks and later batches reshape the collection concurrently.
    StatusChanged { id: TaskId, update: StatusUpdate },
}

#[derive(Debug)]
pub enum StatusUpdate {
    Started,
    Succeeded(Feedback),
    Failed(String),
}
