use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use crate::form::TaskForm;
use crate::view::html::PageRenderer;
use crate::view::{GridView, StatsView};
use crate::Result;
use super::TaskBoard;

#[derive(Default)]
struct PageState {
    grid: GridView,
    stats: StatsView,
    form: TaskForm,
    submitting: bool,
    html: String,
}

/// Keeps the whole page rendered as HTML in memory. Board updates never touch
/// the disk; `flush` mirrors the latest page to the output file.
pub struct HtmlBoard {
    renderer: PageRenderer,
    output: Option<PathBuf>,
    state: Mutex<PageState>,
}

impl HtmlBoard {
    pub fn new() -> Result<Self> {
        let board = Self {
            renderer: PageRenderer::new()?,
            output: None,
            state: Mutex::new(PageState::default()),
        };
        board.refresh(|_| {});
        Ok(board)
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Latest rendered page.
    pub fn page(&self) -> String {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).html.clone()
    }

    /// Fills the form controls, as a user typing would.
    pub fn fill_form(&self, form: TaskForm) {
        self.refresh(|state| state.form = form);
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.page())?;
        Ok(())
    }

    /// Writes the latest page to the output file, if one is set.
    pub fn flush(&self) -> Result<()> {
        match &self.output {
            Some(path) => {
                tracing::debug!("Writing page to {}", path.display());
                self.write_to(path)
            }
            None => Ok(()),
        }
    }

    fn refresh<F: FnOnce(&mut PageState)>(&self, update: F) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        update(&mut state);

        match self
            .renderer
            .render_page(&state.grid, &state.stats, &state.form, state.submitting)
        {
            Ok(html) => state.html = html,
            // Previous page stays in place.
            Err(e) => tracing::error!("Failed to render page: {}", e),
        }
    }
}

impl TaskBoard for HtmlBoard {
    fn show_tasks(&self, grid: &GridView) {
        self.refresh(|state| state.grid = grid.clone());
    }

    fn show_stats(&self, stats: &StatsView) {
        self.refresh(|state| state.stats = stats.clone());
    }

    fn reset_form(&self) {
        self.refresh(|state| state.form = TaskForm::default());
    }

    fn set_submitting(&self, submitting: bool) {
        self.refresh(|state| state.submitting = submitting);
    }
}
