use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taskflow::view::{render_stats, render_tasks};
use taskflow::{
    ClientConfig, DeleteOutcome, FailureNotice, HtmlBoard, HttpTaskApi, TaskBoard, TaskForm,
    TaskListController, TerminalBoard, TerminalNotifier,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the task backend (overrides TASKFLOW_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds, 0 to wait forever
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Whether failed status updates and deletes alert: alert or silent
    #[arg(long, global = true)]
    failure_notice: Option<FailureNotice>,

    /// Keep an HTML rendering of the board at this path
    #[arg(long, global = true)]
    html: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every task and the stats
    List,
    /// Create a task
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        assigned_to: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "medium")]
        priority: String,
        #[arg(long, default_value = "pending")]
        status: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        due_date: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Move a task to its next status
    Advance { id: u64 },
    /// Delete a task after confirmation
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Show only the stats
    Stats,
    /// Write the rendered board as an HTML page
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::from_env().context("Invalid taskflow configuration")?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    if let Some(notice) = cli.failure_notice {
        config = config.with_failure_notice(notice);
    }
    tracing::debug!("Using backend at {}", config.api_url);

    let api = Arc::new(HttpTaskApi::new(&config)?);
    let page = match cli.html {
        Some(path) => HtmlBoard::new()?.with_output(path),
        None => HtmlBoard::new()?,
    };
    let page = Arc::new(page);
    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let notifier = Arc::new(TerminalNotifier::new().assume_yes(assume_yes));

    let controller = TaskListController::new(api, page.clone(), notifier)
        .with_failure_notice(config.failure_notice);

    controller
        .load_tasks()
        .await
        .with_context(|| format!("Failed to load tasks from {}", config.api_url))?;

    let terminal = TerminalBoard::stdout();
    let outcome = run_command(cli.command, &controller, &page, &terminal).await;
    page.flush().context("Failed to write the HTML page")?;
    outcome
}

async fn run_command(
    command: Commands,
    controller: &TaskListController<HttpTaskApi, HtmlBoard, TerminalNotifier>,
    page: &HtmlBoard,
    terminal: &TerminalBoard<std::io::Stdout>,
) -> Result<()> {
    match command {
        Commands::List => {}
        Commands::Add {
            title,
            assigned_to,
            description,
            priority,
            status,
            due_date,
            category,
        } => {
            let form = TaskForm::new(title, assigned_to)
                .with_description(description)
                .with_priority(priority)
                .with_status(status)
                .with_due_date(due_date)
                .with_category(category);
            page.fill_form(form.clone());
            controller.handle_form_submit(form).await?;
        }
        Commands::Advance { id } => {
            controller
                .update_task_status(id)
                .await
                .with_context(|| format!("Failed to update task {}", id))?;
        }
        Commands::Delete { id, .. } => {
            let outcome = controller
                .delete_task(id)
                .await
                .with_context(|| format!("Failed to delete task {}", id))?;
            if outcome == DeleteOutcome::Declined {
                return Ok(());
            }
        }
        Commands::Stats => {
            if let Some(stats) = controller.stats().await {
                terminal.show_stats(&render_stats(&stats));
            }
            return Ok(());
        }
        Commands::Export { path } => {
            page.write_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
    }

    terminal.show_tasks(&render_tasks(&controller.tasks().await));
    if let Some(stats) = controller.stats().await {
        terminal.show_stats(&render_stats(&stats));
    }

    Ok(())
}
