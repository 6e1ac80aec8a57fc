use std::io::{self, BufRead, Write};
use async_trait::async_trait;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    TaskCreated,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::TaskCreated => "Task created successfully!",
            Notice::CreateFailed => "Error creating task",
            Notice::UpdateFailed => "Error updating task",
            Notice::DeleteFailed => "Error deleting task",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::TaskCreated)
    }
}

/// Confirmation and alert dialogs. The controller waits on both.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;

    async fn notify(&self, notice: Notice);
}

/// Asks on stdin, answers on stdout.
#[derive(Debug, Default, Clone)]
pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every confirmation is answered yes without prompting.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stdout = io::stdout();
            write!(stdout, "{} [y/N] ", prompt)?;
            stdout.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            Ok(Err(e)) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("Confirmation prompt aborted: {}", e);
                false
            }
        }
    }

    async fn notify(&self, notice: Notice) {
        if notice.is_error() {
            eprintln!("{}", notice.message());
        } else {
            println!("{}", notice.message());
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
