use tegaki_review_domain::Task;

use crate::event::{StatusUpdate, TaskEvent};

/// Fold one event into the collection.
///
/// Pure with respect to its inputs: the only state is what comes in. Invalid
/// events (unknown id, transition the state machine rejects, duplicate id)
/// are logged and dropped rather than panicking, so a misbehaving producer
/// cannot corrupt the collection.
pub fn apply_event(mut tasks: Vec<Task>, event: TaskEvent) -> Vec<Task> {
    match event {
        TaskEvent::BatchSubmitted(batch) => {
            let mut next: Vec<Task> = Vec::with_capacity(batch.len() + tasks.len());
            for task in batch {
                let duplicate = tasks.iter().any(|t| t.id == task.id)
                    || next.iter().any(|t| t.id == task.id);
                if duplicate {
                    tracing::warn!(id = %task.id, "dropping task with duplicate id");
                    continue;
                }
                next.push(task);
            }
            next.append(&mut tasks);
            next
        }

        TaskEvent::StatusChanged { id, update } => {
            let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
                tracing::warn!(%id, "status update for unknown task dropped");
                return tasks;
            };

            let applied = match update {
                StatusUpdate::Started => task.start_processing(),
                StatusUpdate::Succeeded(feedback) => task.complete(feedback),
                StatusUpdate::Failed(message) => task.fail(message),
            };

            if let Err(e) = applied {
                tracing::warn!(%id, error = %e, "status update dropped");
            }

            tasks
        }
    }
}

/// Batch-wide processing indicator, derived from the collection itself so it
/// can never desync from actual task states.
pub fn has_active_tasks(tasks: &[Task]) -> bool {
    tasks.iter().any(|t| !t.is_terminal())
}
