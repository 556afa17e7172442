//! Export a column as a dated Markdown checklist
//!
//! Shared by the TUI `x` key and the `todo export` subcommand. The caller
//! decides the directory; this module only renders and writes the file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::BoardColumn;

/// Result of an export, for the caller's toast / stdout message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub path: PathBuf,
    pub task_count: usize,
}

/// `<YYYY-MM-DD>-<Column>.md`
pub fn export_file_name(column_name: &str, date: NaiveDate) -> String {
    let safe: String = column_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '-' } else { c })
        .collect();
    format!("{}-{}.md", date.format("%Y-%m-%d"), safe)
}

/// Render the export body
pub fn render_column(entry: &BoardColumn, date: NaiveDate) -> String {
    let mut lines = vec![
        format!("{} - {}", entry.column.name, date.format("%Y-%m-%d")),
        "=".repeat(30),
        String::new(),
    ];
    lines.extend(entry.tasks.iter().map(|task| format!("- {}", task.title)));
    lines.join("\n") + "\n"
}

/// Write `entry` to `dir`, creating the directory if needed
pub fn export_column(entry: &BoardColumn, dir: &Path, date: NaiveDate) -> Result<ExportResult> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(&entry.column.name, date));
    std::fs::write(&path, render_column(entry, date))?;

    tracing::info!(
        column = %entry.column.name,
        path = %path.display(),
        tasks = entry.tasks.len(),
        "exported column"
    );
    Ok(ExportResult {
        path,
        task_count: entry.tasks.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewTask, Priority};
    use crate::storage::board::BoardStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn board_with_tasks() -> Vec<BoardColumn> {
        let mut store = BoardStore::open_in_memory().unwrap();
        let todo = store.find_column_by_name("Todo").unwrap().id;
        store.create_task(NewTask::new("Write spec", todo)).unwrap();
        store
            .create_task(NewTask::new("Review", todo).priority(Priority::High))
            .unwrap();
        store.list_board().unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name("Todo", date()), "2026-10-16-Todo.md");
        assert_eq!(export_file_name("In/Out", date()), "2026-10-16-In-Out.md");
    }

    #[test]
    fn test_render_column() {
        let board = board_with_tasks();
        let text = render_column(&board[0], date());
        assert_eq!(
            text,
            "Todo - 2026-10-16\n==============================\n\n- Write spec\n- Review\n"
        );

        let empty = render_column(&board[1], date());
        assert_eq!(empty, "Doing - 2026-10-16\n==============================\n\n");
    }

    #[test]
    fn test_export_column_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let board = board_with_tasks();

        let result = export_column(&board[0], &target, date()).unwrap();
        assert_eq!(result.task_count, 2);
        assert_eq!(result.path, target.join("2026-10-16-Todo.md"));

        let content = std::fs::read_to_string(&result.path).unwrap();
        assert!(content.starts_with("Todo - 2026-10-16\n"));
        assert!(content.ends_with("- Review\n"));
    }
}
