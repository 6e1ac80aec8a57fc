pub mod api;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod notify;
pub mod types;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use board::{HtmlBoard, TaskBoard, TerminalBoard};
pub use config::{ClientConfig, FailureNotice};
pub use controller::{DeleteOutcome, Refresh, TaskListController};
pub use error::TaskflowError;
pub use form::TaskForm;
pub use notify::{Notice, Notifier, TerminalNotifier};

pub type Result<T> = std::result::Result<T, TaskflowError>;
