use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use tegaki_review_domain::Task;

use crate::event::TaskEvent;
use crate::reducer::{apply_event, has_active_tasks};

/// Actor owning the result collection.
///
/// The only writer: it folds events from the serialized channel into the
/// collection and re-publishes a snapshot through the watch channel after
/// every applied event, so readers render each transition. Exits when the
/// token fires or every event sender is gone.
pub(crate) async fn run_collection_loop(
    mut events: mpsc::UnboundedReceiver<TaskEvent>,
    snapshot: watch::Sender<Vec<Task>>,
    token: CancellationToken,
) {
    let mut tasks: Vec<Task> = Vec::new();

    loop {
        tokio::select! {
            () = token.cancelled() => break,
            event = events.recv() => {
                let Some(event) = event else { break };
                tasks = apply_event(std::mem::take(&mut tasks), event);
                tracing::debug!(
                    total = tasks.len(),
                    active = has_active_tasks(&tasks),
                    "result collection updated"
                );
                let _ = snapshot.send(tasks.clone());
            }
        }
    }
}
