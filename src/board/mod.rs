use crate::view::{GridView, StatsView};

mod html;
mod terminal;

pub use html::HtmlBoard;
pub use terminal::TerminalBoard;

/// The display targets of the page: the task grid, the four counters and the form.
pub trait TaskBoard: Send + Sync {
    fn show_tasks(&self, grid: &GridView);

    fn show_stats(&self, stats: &StatsView);

    fn reset_form(&self);

    /// Disables the submit control while a creation is in flight.
    fn set_submitting(&self, submitting: bool);
}
