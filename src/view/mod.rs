use serde::Serialize;
use crate::types::{Task, TaskStats};

pub mod html;

pub const EMPTY_TITLE: &str = "No Tasks Yet";
pub const EMPTY_HINT: &str = "Create your first task to get started!";
pub const NO_DESCRIPTION: &str = "No description";

/// What the task grid shows: one block for an empty list, otherwise one card per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView {
    Empty { title: String, hint: String },
    Cards { cards: Vec<TaskCard> },
}

impl GridView {
    pub fn cards(&self) -> &[TaskCard] {
        match self {
            GridView::Empty { .. } => &[],
            GridView::Cards { cards } => cards,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, GridView::Empty { .. })
    }
}

impl Default for GridView {
    fn default() -> Self {
        GridView::Empty {
            title: EMPTY_TITLE.to_string(),
            hint: EMPTY_HINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    pub id: u64,
    /// Raw values, used for css classes.
    pub priority: String,
    pub status: String,
    pub priority_label: String,
    pub status_label: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub category: String,
    pub due_date: Option<String>,
    pub actions: [CardAction; 2],
}

/// A control on a card, bound to the task it was rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "task_id", rename_all = "snake_case")]
pub enum CardAction {
    UpdateStatus(u64),
    Delete(u64),
}

/// The four display counters, already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub total_tasks: String,
    pub pending_tasks: String,
    pub in_progress_tasks: String,
    pub high_priority_tasks: String,
}

pub fn render_tasks(tasks: &[Task]) -> GridView {
    if tasks.is_empty() {
        return GridView::default();
    }

    GridView::Cards {
        cards: tasks.iter().map(render_card).collect(),
    }
}

fn render_card(task: &Task) -> TaskCard {
    let description = task
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);

    TaskCard {
        id: task.id,
        priority: task.priority.to_string(),
        status: task.status.to_string(),
        priority_label: task.priority.as_str().to_uppercase(),
        // Only the first underscore, as the page always did.
        status_label: task.status.as_str().replacen('_', " ", 1).to_uppercase(),
        title: task.title.clone(),
        description: description.to_string(),
        assigned_to: task.assigned_to.clone(),
        category: task.category.clone(),
        due_date: task.due_date.clone().filter(|d| !d.is_empty()),
        actions: [CardAction::UpdateStatus(task.id), CardAction::Delete(task.id)],
    }
}

pub fn render_stats(stats: &TaskStats) -> StatsView {
    StatsView {
        total_tasks: stats.total.to_string(),
        pending_tasks: stats.pending.to_string(),
        in_progress_tasks: stats.in_progress.to_string(),
        high_priority_tasks: stats.high_priority.to_string(),
    }
}
