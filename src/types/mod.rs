mod task;

pub use task::{NewTask, StatusUpdate, Task, TaskPriority, TaskStats, TaskStatus};
