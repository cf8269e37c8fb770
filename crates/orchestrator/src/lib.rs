mod collection;
mod event;
mod orchestrator;
mod reducer;

pub use event::{StatusUpdate, TaskEvent};
pub use orchestrator::{BatchHandle, Orchestrator};
pub use reducer::{apply_event, has_active_tasks};
