use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use tegaki_encoder::UploadedFile;
use tegaki_inference::TextReviewer;
use tegaki_review_domain::{Task, TaskId};

use crate::collection::run_collection_loop;
use crate::event::{StatusUpdate, TaskEvent};
use crate::reducer::has_active_tasks;

/// Drives uploaded files through encode -> inference -> terminal result.
///
/// Each file gets one independent pipeline; all state changes funnel through
/// the collection actor, which publishes snapshots for the presentation
/// layer. Tasks run to completion — there is no cancellation of submitted
/// work and no automatic retry.
pub struct Orchestrator {
    reviewer: Arc<dyn TextReviewer>,
    events: mpsc::UnboundedSender<TaskEvent>,
    snapshot: watch::Receiver<Vec<Task>>,
    token: CancellationToken,
}

impl Orchestrator {
    /// Spawn the collection actor. Must be called within a tokio runtime.
    pub fn new(reviewer: Arc<dyn TextReviewer>) -> Self {
        let (events, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot) = watch::channel(Vec::new());
        let token = CancellationToken::new();

        tokio::spawn(run_collection_loop(rx, snapshot_tx, token.clone()));

        Self {
            reviewer,
            events,
            snapshot,
            token,
        }
    }

    /// Submit a batch of files for processing.
    ///
    /// The whole batch is prepended to the collection as pending tasks in
    /// one atomic update before any per-file work starts; then one pipeline
    /// per task runs concurrently, each applying exactly one terminal update.
    /// An empty batch is a no-op.
    pub fn submit(&self, files: Vec<UploadedFile>) -> BatchHandle {
        if files.is_empty() {
            return BatchHandle::empty();
        }

        let tasks: Vec<Task> = files.iter().map(|f| Task::new(f.name.clone())).collect();
        let task_ids: Vec<TaskId> = tasks.iter().map(|t| t.id.clone()).collect();

        tracing::debug!(batch_size = tasks.len(), "submitting batch");
        let _ = self.events.send(TaskEvent::BatchSubmitted(tasks));

        let pipelines = task_ids
            .iter()
            .cloned()
            .zip(files)
            .map(|(id, file)| {
                tokio::spawn(run_pipeline(
                    self.events.clone(),
                    self.reviewer.clone(),
                    id,
                    file,
                ))
            })
            .collect();

        BatchHandle {
            task_ids,
            pipelines,
            snapshot: Some(self.snapshot.clone()),
        }
    }

    /// Reactive output boundary: a new value is published on every state
    /// transition.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.snapshot.clone()
    }

    /// Current collection, most recent batch first.
    pub fn results(&self) -> Vec<Task> {
        self.snapshot.borrow().clone()
    }

    /// True while any task anywhere in the collection is non-terminal.
    pub fn is_processing(&self) -> bool {
        has_active_tasks(&self.snapshot.borrow())
    }

    /// Stop the collection actor. In-flight pipelines finish but their
    /// updates are no longer applied.
    pub fn shutdown(&self) {
        self.token.cancel();
    }
}

/// One file's pipeline: mark processing, validate/encode locally, then a
/// single inference attempt. Every exit path emits exactly one terminal
/// update for this task and touches no sibling.
async fn run_pipeline(
    events: mpsc::UnboundedSender<TaskEvent>,
    reviewer: Arc<dyn TextReviewer>,
    id: TaskId,
    file: UploadedFile,
) {
    // Enqueued before the inference dispatch, so the processing state is
    // visible to readers ahead of this task's terminal update.
    let _ = events.send(TaskEvent::StatusChanged {
        id: id.clone(),
        update: StatusUpdate::Started,
    });

    let update = match tegaki_encoder::encode(&file) {
        Err(e) => {
            tracing::warn!(%id, file = %file.name, error = %e, "upload rejected");
            StatusUpdate::Failed(e.to_string())
        }
        Ok(part) => match reviewer.review(&part).await {
            Ok(feedback) => StatusUpdate::Succeeded(feedback),
            Err(e) => {
                tracing::warn!(%id, file = %file.name, error = %e, "inference failed");
                StatusUpdate::Failed(format!("AI processing failed: {e}"))
            }
        },
    };

    let _ = events.send(TaskEvent::StatusChanged { id, update });
}

/// Completion handle for one submitted batch.
pub struct BatchHandle {
    task_ids: Vec<TaskId>,
    pipelines: Vec<JoinHandle<()>>,
    snapshot: Option<watch::Receiver<Vec<Task>>>,
}

impl BatchHandle {
    fn empty() -> Self {
        Self {
            task_ids: Vec::new(),
            pipelines: Vec::new(),
            snapshot: None,
        }
    }

    /// Ids of the tasks created for this batch, in submission order.
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Resolve once every task in the batch has reached a terminal state in
    /// the published collection.
    pub async fn wait(mut self) {
        for pipeline in self.pipelines.drain(..) {
            let _ = pipeline.await;
        }

        // Pipelines have emitted their terminal events; wait for the actor
        // to apply them so observers see the settled collection.
        let Some(mut snapshot) = self.snapshot.take() else {
            return;
        };
        let ids = self.task_ids;
        let _ = snapshot
            .wait_for(|tasks| {
                ids.iter().all(|id| {
                    tasks
                        .iter()
                        .find(|t| &t.id == id)
                        .is_some_and(Task::is_terminal)
                })
            })
            .await;
    }
}
