use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::api::TaskApi;
use crate::board::TaskBoard;
use crate::config::FailureNotice;
use crate::error::TaskflowError;
use crate::form::TaskForm;
use crate::notify::{Notice, Notifier, DELETE_PROMPT};
use crate::types::{StatusUpdate, Task, TaskStats};
use crate::view::{render_stats, render_tasks};
use crate::Result;


/// Whether a fetched response made it to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Applied,
    /// A newer request was issued while this one was in flight.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Local copy of backend state. Only ever replaced wholesale.
#[derive(Debug, Default, Clone)]
struct TaskListState {
    tasks: Vec<Task>,
    stats: Option<TaskStats>,
}

pub struct TaskListController<A, B, N>
where
    A: TaskApi + ?Sized,
    B: TaskBoard + ?Sized,
    N: Notifier + ?Sized,
{
    api: Arc<A>,
    board: Arc<B>,
    notifier: Arc<N>,
    failure_notice: FailureNotice,
    state: RwLock<TaskListState>,
    load_generation: AtomicU64,
    stats_generation: AtomicU64,
    submitting: AtomicBool,
}

impl<A, B, N> TaskListController<A, B, N>
where
    A: TaskApi + ?Sized,
    B: TaskBoard + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(api: Arc<A>, board: Arc<B>, notifier: Arc<N>) -> Self {
        Self {
            api,
            board,
            notifier,
            failure_notice: FailureNotice::default(),
            state: RwLock::new(TaskListState::default()),
            load_generation: AtomicU64::new(0),
            stats_generation: AtomicU64::new(0),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn with_failure_notice(mut self, notice: FailureNotice) -> Self {
        self.failure_notice = notice;
        self
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    pub async fn stats(&self) -> Option<TaskStats> {
        self.state.read().await.stats.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Fetches the full list, redraws the grid, then refreshes the stats.
    /// On failure the previous render stays on screen.
    pub async fn load_tasks(&self) -> Result<Refresh> {
        let generation = self.load_generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!("Loading tasks (generation {})", generation);

        let tasks = match self.api.list_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::error!("Error loading tasks: {}", e);
                return Err(e);
            }
        };

        {
            let mut state = self.state.write().await;
            if self.load_generation.load(Ordering::Acquire) != generation {
                tracing::debug!("Discarding stale task list (generation {})", generation);
                return Ok(Refresh::Stale);
            }
            tracing::info!("Loaded {} tasks", tasks.len());
            state.tasks = tasks;
            self.board.show_tasks(&render_tasks(&state.tasks));
        }

        // Stats failures are logged there and never fail the load.
        let _ = self.update_stats().await;
        Ok(Refresh::Applied)
    }

    pub async fn update_stats(&self) -> Result<Refresh> {
        let generation = self.stats_generation.fetch_add(1, Ordering::AcqRel) + 1;

        let stats = match self.api.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Error loading stats: {}", e);
                return Err(e);
            }
        };

        let mut state = self.state.write().await;
        if self.stats_generation.load(Ordering::Acquire) != generation {
            tracing::debug!("Discarding stale stats (generation {})", generation);
            return Ok(Refresh::Stale);
        }
        self.board.show_stats(&render_stats(&stats));
        state.stats = Some(stats);
        Ok(Refresh::Applied)
    }

    /// Creates a task from the form. The submit control stays disabled until
    /// this returns, and a second submit in the meantime is rejected.
    pub async fn handle_form_submit(&self, form: TaskForm) -> Result<()> {
        let _guard = self.begin_submit()?;

        let task = match form.into_new_task() {
            Ok(task) => task,
            Err(e) => {
                tracing::warn!("Rejected task form: {}", e);
                return Err(e);
            }
        };

        match self.api.create_task(&task).await {
            Ok(()) => {
                tracing::info!("Created task '{}'", task.title);
                let _ = self.load_tasks().await;
                self.board.reset_form();
                self.notifier.notify(Notice::TaskCreated).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error creating task: {}", e);
                self.notifier.notify(Notice::CreateFailed).await;
                Err(e)
            }
        }
    }

    /// Moves a task one step along the status cycle.
    pub async fn update_task_status(&self, task_id: u64) -> Result<()> {
        let next = {
            let state = self.state.read().await;
            state
                .tasks
                .iter()
                .find(|t| t.id == task_id)
                .map(|t| t.status.next())
        };
        let Some(status) = next else {
            tracing::warn!("Task {} is not on the board", task_id);
            return Err(TaskflowError::TaskNotFound(task_id));
        };

        tracing::debug!("Advancing task {} to {}", task_id, status);
        match self.api.update_task(task_id, &StatusUpdate { status }).await {
            Ok(()) => {
                let _ = self.load_tasks().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error updating task {}: {}", task_id, e);
                self.report_failure(Notice::UpdateFailed).await;
                Err(e)
            }
        }
    }

    pub async fn delete_task(&self, task_id: u64) -> Result<DeleteOutcome> {
        if !self.notifier.confirm(DELETE_PROMPT).await {
            tracing::debug!("Delete of task {} declined", task_id);
            return Ok(DeleteOutcome::Declined);
        }

        match self.api.delete_task(task_id).await {
            Ok(()) => {
                tracing::info!("Deleted task {}", task_id);
                let _ = self.load_tasks().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                tracing::error!("Error deleting task {}: {}", task_id, e);
                self.report_failure(Notice::DeleteFailed).await;
                Err(e)
            }
        }
    }

    async fn report_failure(&self, notice: Notice) {
        match self.failure_notice {
            FailureNotice::Alert => self.notifier.notify(notice).await,
            FailureNotice::Silent => {}
        }
    }

    fn begin_submit(&self) -> Result<SubmitGuard<'_, B>> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Ignoring submit while another is in flight");
            return Err(TaskflowError::SubmitInProgress);
        }
        self.board.set_submitting(true);
        Ok(SubmitGuard {
            flag: &self.submitting,
            board: &*self.board,
        })
    }
}

/// Holds the submitting flag; dropping it re-enables the form.
struct SubmitGuard<'a, B: TaskBoard + ?Sized> {
    flag: &'a AtomicBool,
    board: &'a B,
}

impl<B: TaskBoard + ?Sized> Drop for SubmitGuard<'_, B> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.board.set_submitting(false);
    }
}
