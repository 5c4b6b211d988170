pub mod board;
pub mod draft;
pub mod task;

pub use board::TaskBoard;
pub use draft::{TaskDraft, ValidationError};
pub use task::{ScheduledTask, Task, TaskId};
