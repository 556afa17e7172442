//! `todo export <column>`

use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::model::BoardColumn;
use crate::operations::export;
use crate::storage::board::BoardStore;

pub fn execute(store: &BoardStore, out: &mut dyn Write, column: &str, dir: &Path) -> Result<()> {
    let target = store.find_column_by_name(column)?;
    let tasks = store.list_tasks(Some(target.id))?;
    let entry = BoardColumn {
        column: target,
        tasks,
    };

    let result = export::export_column(&entry, dir, Local::now().date_naive())?;
    writeln!(
        out,
        "Exported {} tasks to {}",
        result.task_count,
        result.path.display()
    )?;
    Ok(())
}
