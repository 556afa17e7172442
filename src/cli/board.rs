//! `todo board`：按列打印整个看板

use std::io::Write;

use crate::error::Result;
use crate::storage::board::BoardStore;

pub fn execute(store: &BoardStore, out: &mut dyn Write) -> Result<()> {
    for entry in store.list_board()? {
        writeln!(out, "{} ({})", entry.column.name, entry.len())?;
        writeln!(out, "{}", "-".repeat(30))?;
        if entry.is_empty() {
            writeln!(out, "  No tasks")?;
        }
        for task in &entry.tasks {
            let due = task
                .due_date
                .map(|d| format!(" ({})", d.format("%Y-%m-%d")))
                .unwrap_or_default();
            writeln!(out, "  [{}] {}{}", task.id, task.title, due)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_due_date, NewTask};

    #[test]
    fn test_board_output() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let todo = store.find_column_by_name("Todo").unwrap().id;
        store.create_task(NewTask::new("Write spec", todo)).unwrap();
        store
            .create_task(
                NewTask::new("Review", todo).due_date(parse_due_date("2026-10-20").unwrap()),
            )
            .unwrap();

        let mut out = Vec::new();
        execute(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Todo (2)\n"));
        assert!(text.contains("  [1] Write spec\n  [2] Review (2026-10-20)\n"));
        assert!(text.contains("Doing (0)\n------------------------------\n  No tasks\n"));
    }
}
