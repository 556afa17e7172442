//! CLI 模块

pub mod board;
pub mod column;
pub mod export;
pub mod task;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::model::{Priority, TaskId};
use crate::storage::board::BoardStore;
use crate::storage::config::Config;

#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "A terminal Kanban board backed by SQLite")]
pub struct Cli {
    /// Database file (defaults to ~/.todo-board/todo.db)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every column with its tasks
    Board,
    /// Add a task to the end of a column
    Add {
        /// Task title
        title: String,
        /// Target column
        #[arg(short, long, default_value = "Todo")]
        column: String,
        /// Description
        #[arg(short = 'd', long = "desc")]
        description: Option<String>,
        /// Priority (low/med/high or 1-3)
        #[arg(short, long)]
        priority: Option<Priority>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Move a task to a column (appended unless --position is given)
    Move {
        task_id: TaskId,
        /// Target column name
        column: String,
        /// 0-based slot in the target column
        #[arg(long)]
        position: Option<usize>,
    },
    /// Move a task to the Done column
    Done { task_id: TaskId },
    /// Edit task fields
    Edit {
        task_id: TaskId,
        #[arg(short, long)]
        title: Option<String>,
        /// New description ("" clears it)
        #[arg(short = 'd', long = "desc")]
        description: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        /// New due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Show task details
    Show { task_id: TaskId },
    /// Delete a task
    Rm {
        task_id: TaskId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List tasks as a table
    List {
        /// Only tasks in this column
        #[arg(short, long)]
        column: Option<String>,
    },
    /// Manage columns
    Column {
        #[command(subcommand)]
        action: ColumnAction,
    },
    /// Export a column as a dated Markdown file
    Export {
        /// Column name
        column: String,
        /// Output directory (defaults to [export] dir, then the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Add a column
    Add {
        name: String,
        /// 0-based position; later columns shift right
        #[arg(long)]
        position: Option<i64>,
    },
    /// List columns
    List,
}

/// 执行一个子命令，输出写到 stdout
pub fn execute(command: Commands, store: &mut BoardStore, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    dispatch(command, store, config, &mut out, &mut input)?;
    out.flush()?;
    Ok(())
}

fn dispatch(
    command: Commands,
    store: &mut BoardStore,
    config: &Config,
    out: &mut dyn Write,
    input: &mut dyn io::BufRead,
) -> Result<()> {
    match command {
        Commands::Board => board::execute(store, out),
        Commands::Add {
            title,
            column,
            description,
            priority,
            due,
        } => task::add(
            store,
            out,
            task::AddArgs {
                title,
                column,
                description,
                priority,
                due,
            },
        ),
        Commands::Move {
            task_id,
            column,
            position,
        } => task::move_to(store, out, task_id, &column, position),
        Commands::Done { task_id } => task::done(store, out, task_id),
        Commands::Edit {
            task_id,
            title,
            description,
            priority,
            due,
            clear_due,
        } => task::edit(
            store,
            out,
            task_id,
            task::EditArgs {
                title,
                description,
                priority,
                due,
                clear_due,
            },
        ),
        Commands::Show { task_id } => task::show(store, out, task_id),
        Commands::Rm { task_id, force } => task::remove(store, out, input, task_id, force),
        Commands::List { column } => task::list(store, out, column.as_deref()),
        Commands::Column { action } => match action {
            ColumnAction::Add { name, position } => column::add(store, out, &name, position),
            ColumnAction::List => column::list(store, out),
        },
        Commands::Export { column, dir } => {
            let dir = dir.unwrap_or_else(|| config.export.resolve_dir());
            export::execute(store, out, &column, &dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_options() {
        let cli = Cli::try_parse_from([
            "todo", "add", "Write spec", "-c", "Doing", "-p", "high", "--due", "2026-10-20",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                column,
                priority,
                due,
                ..
            }) => {
                assert_eq!(title, "Write spec");
                assert_eq!(column, "Doing");
                assert_eq!(priority, Some(Priority::High));
                assert_eq!(due.as_deref(), Some("2026-10-20"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["todo", "--db", "/tmp/board.db"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/board.db")));
    }

    #[test]
    fn test_edit_due_conflicts_with_clear_due() {
        let result =
            Cli::try_parse_from(["todo", "edit", "1", "--due", "2026-10-20", "--clear-due"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dispatch_column_list() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let mut out = Vec::new();
        let mut input: &[u8] = b"";
        dispatch(
            Commands::Column {
                action: ColumnAction::List,
            },
            &mut store,
            &Config::default(),
            &mut out,
            &mut input,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Todo"));
        assert!(text.contains("Done"));
    }
}
