use minijinja::{context, Environment};
use super::{GridView, StatsView};
use crate::form::TaskForm;
use crate::Result;

const GRID_TEMPLATE: &str = r#"{% if grid.kind == "empty" %}
<div class="empty-state" style="grid-column: 1/-1;">
    <h2>{{ grid.title }}</h2>
    <p>{{ grid.hint }}</p>
</div>
{% else %}{% for card in grid.cards %}
<div class="task-card" data-task-id="{{ card.id }}">
    <span class="task-priority priority-{{ card.priority }}">{{ card.priority_label }}</span>
    <span class="task-status status-{{ card.status }}">{{ card.status_label }}</span>
    <h3>{{ card.title }}</h3>
    <p class="description">{{ card.description }}</p>
    <div class="task-info">
        <span class="info-badge">Assigned: {{ card.assigned_to }}</span>
        <span class="info-badge">Category: {{ card.category }}</span>
        {% if card.due_date %}<span class="info-badge">Due: {{ card.due_date }}</span>{% endif %}
    </div>
    <div class="task-actions">
        {% for control in card.actions %}{% if control.action == "delete" %}<button class="btn btn-danger btn-small" data-action="delete" data-task-id="{{ control.task_id }}">Delete</button>
        {% else %}<button class="btn btn-secondary btn-small" data-action="{{ control.action }}" data-task-id="{{ control.task_id }}">Update Status</button>
        {% endif %}{% endfor %}
    </div>
</div>
{% endfor %}{% endif %}"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Taskflow</title>
</head>
<body>
    <section class="stats">
        <div class="stat-card"><h3 id="totalTasks">{{ stats.total_tasks }}</h3><p>Total Tasks</p></div>
        <div class="stat-card"><h3 id="pendingTasks">{{ stats.pending_tasks }}</h3><p>Pending</p></div>
        <div class="stat-card"><h3 id="inProgressTasks">{{ stats.in_progress_tasks }}</h3><p>In Progress</p></div>
        <div class="stat-card"><h3 id="highPriorityTasks">{{ stats.high_priority_tasks }}</h3><p>High Priority</p></div>
    </section>
    <form id="taskForm" method="post" action="/api/tasks">
        <input type="text" id="title" name="title" value="{{ form.title }}" required>
        <textarea id="description" name="description">{{ form.description }}</textarea>
        <select id="priority" name="priority">
            {% for value in ["low", "medium", "high"] %}<option value="{{ value }}"{% if value == form.priority %} selected{% endif %}>{{ value|title }}</option>{% endfor %}
        </select>
        <input type="text" id="assigned_to" name="assigned_to" value="{{ form.assigned_to }}" required>
        <select id="status" name="status">
            {% for value in ["pending", "in_progress", "completed"] %}<option value="{{ value }}"{% if value == form.status %} selected{% endif %}>{{ value|replace("_", " ")|title }}</option>{% endfor %}
        </select>
        <input type="date" id="due_date" name="due_date" value="{{ form.due_date }}">
        <input type="text" id="category" name="category" value="{{ form.category }}">
        <button type="submit" class="btn btn-primary"{% if submitting %} disabled{% endif %}>Create Task</button>
    </form>
    <div class="tasks-grid" id="tasksGrid">{% include "grid.html" %}</div>
</body>
</html>
"#;

/// Renders the board as HTML. Values are escaped by the `.html` template names.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("grid.html", GRID_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_grid(&self, grid: &GridView) -> Result<String> {
        let template = self.env.get_template("grid.html")?;
        Ok(template.render(context! { grid => grid })?)
    }

    pub fn render_page(
        &self,
        grid: &GridView,
        stats: &StatsView,
        form: &TaskForm,
        submitting: bool,
    ) -> Result<String> {
        let template = self.env.get_template("page.html")?;
        Ok(template.render(context! {
            grid => grid,
            stats => stats,
            form => form,
            submitting => submitting,
        })?)
    }
}
