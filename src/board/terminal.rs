use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use crate::view::{GridView, StatsView};
use super::TaskBoard;

/// Prints the board as plain text.
pub struct TerminalBoard<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalBoard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalBoard<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn write_block(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::error!("Failed to write board output: {}", e);
        }
    }
}

impl TerminalBoard<Vec<u8>> {
    pub fn output(&self) -> String {
        let out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&out).into_owned()
    }
}

pub fn format_grid(grid: &GridView) -> String {
    match grid {
        GridView::Empty { title, hint } => format!("{}\n{}\n", title, hint),
        GridView::Cards { cards } => {
            let mut text = String::new();
            for card in cards {
                text.push_str(&format!(
                    "#{} [{}] [{}] {}\n    {}\n    Assigned: {} | Category: {}",
                    card.id,
                    card.priority_label,
                    card.status_label,
                    card.title,
                    card.description,
                    card.assigned_to,
                    card.category,
                ));
                if let Some(due) = &card.due_date {
                    text.push_str(&format!(" | Due: {}", due));
                }
                text.push('\n');
            }
            text
        }
    }
}

pub fn format_stats(stats: &StatsView) -> String {
    format!(
        "Total: {}  Pending: {}  In Progress: {}  High Priority: {}\n",
        stats.total_tasks, stats.pending_tasks, stats.in_progress_tasks, stats.high_priority_tasks
    )
}

impl<W: Write + Send> TaskBoard for TerminalBoard<W> {
    fn show_tasks(&self, grid: &GridView) {
        self.write_block(&format_grid(grid));
    }

    fn show_stats(&self, stats: &StatsView) {
        self.write_block(&format_stats(stats));
    }

    fn reset_form(&self) {}

    fn set_submitting(&self, submitting: bool) {
        tracing::debug!("Submit control {}", if submitting { "disabled" } else { "enabled" });
    }
}
