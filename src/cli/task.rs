//! 任务相关子命令：add / move / done / edit / show / rm / list

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::model::{parse_due_date, ColumnId, NewTask, Priority, TaskId, TaskUpdate, DONE_COLUMN};
use crate::storage::board::BoardStore;

pub struct AddArgs {
    pub title: String,
    pub column: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due: Option<String>,
}

pub struct EditArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due: Option<String>,
    pub clear_due: bool,
}

pub fn add(store: &mut BoardStore, out: &mut dyn Write, args: AddArgs) -> Result<()> {
    let column = store.find_column_by_name(&args.column)?;
    let mut new = NewTask::new(args.title, column.id);
    if let Some(description) = args.description {
        new = new.description(description);
    }
    if let Some(priority) = args.priority {
        new = new.priority(priority);
    }
    if let Some(due) = args.due.as_deref() {
        new = new.due_date(parse_due_date(due)?);
    }

    let task = store.create_task(new)?;
    writeln!(out, "Added task [{}]: {}", task.id, task.title)?;
    Ok(())
}

pub fn move_to(
    store: &mut BoardStore,
    out: &mut dyn Write,
    task_id: TaskId,
    column: &str,
    position: Option<usize>,
) -> Result<()> {
    let target = store.find_column_by_name(column)?;
    let task = store.move_task(task_id, target.id, position)?;
    writeln!(
        out,
        "Moved task [{}] to {} (position {})",
        task.id, target.name, task.position
    )?;
    Ok(())
}

pub fn done(store: &mut BoardStore, out: &mut dyn Write, task_id: TaskId) -> Result<()> {
    let target = store.find_column_by_name(DONE_COLUMN)?;
    let task = store.move_task(task_id, target.id, None)?;
    writeln!(out, "Completed task [{}]: {}", task.id, task.title)?;
    Ok(())
}

pub fn edit(
    store: &mut BoardStore,
    out: &mut dyn Write,
    task_id: TaskId,
    args: EditArgs,
) -> Result<()> {
    let due_date = if args.clear_due {
        Some(None)
    } else {
        args.due.as_deref().map(parse_due_date).transpose()?.map(Some)
    };
    let update = TaskUpdate {
        title: args.title,
        // 空字符串清空描述
        description: args
            .description
            .map(|d| Some(d).filter(|d| !d.trim().is_empty())),
        priority: args.priority,
        due_date,
    };

    if update.is_empty() {
        // 仍然校验任务存在
        store.get_task(task_id)?;
        writeln!(out, "Nothing to update")?;
        return Ok(());
    }

    let task = store.update_task(task_id, &update)?;
    writeln!(out, "Updated task [{}]", task.id)?;
    Ok(())
}

pub fn show(store: &BoardStore, out: &mut dyn Write, task_id: TaskId) -> Result<()> {
    let task = store.get_task(task_id)?;
    let column = store.get_column(task.column_id)?;
    let due = task
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let rows = [
        ("ID", task.id.to_string()),
        ("Title", task.title.clone()),
        (
            "Description",
            task.description.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Column", column.name),
        ("Priority", task.priority.label().to_string()),
        ("Due Date", due),
        ("Created", task.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
        ("Updated", task.updated_at.format("%Y-%m-%d %H:%M:%S").to_string()),
    ];
    for (field, value) in rows {
        writeln!(out, "{:<12} {}", field, value)?;
    }
    Ok(())
}

/// 删除任务；未加 `--force` 时从 `input` 读取 y/N 确认
pub fn remove(
    store: &mut BoardStore,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    task_id: TaskId,
    force: bool,
) -> Result<()> {
    let task = store.get_task(task_id)?;

    if !force {
        write!(out, "Delete task [{}] '{}'? [y/N] ", task.id, task.title)?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            writeln!(out, "Cancelled")?;
            return Ok(());
        }
    }

    store.delete_task(task_id)?;
    writeln!(out, "Deleted task [{}]", task_id)?;
    Ok(())
}

pub fn list(store: &BoardStore, out: &mut dyn Write, column: Option<&str>) -> Result<()> {
    let filter = match column {
        Some(name) => Some(store.find_column_by_name(name)?.id),
        None => None,
    };
    let tasks = store.list_tasks(filter)?;
    if tasks.is_empty() {
        writeln!(out, "No tasks found")?;
        return Ok(());
    }

    let names: HashMap<ColumnId, String> = store
        .list_columns()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let title_width = tasks
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);
    let column_width = names
        .values()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    writeln!(
        out,
        "{:>4}  {:<tw$}  {:<cw$}  {:<8}  {}",
        "ID",
        "Title",
        "Column",
        "Priority",
        "Due",
        tw = title_width,
        cw = column_width
    )?;
    for task in &tasks {
        let due = task
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:>4}  {:<tw$}  {:<cw$}  {:<8}  {}",
            task.id,
            task.title,
            names.get(&task.column_id).map(String::as_str).unwrap_or("?"),
            task.priority.label(),
            due,
            tw = title_width,
            cw = column_width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn add_task(store: &mut BoardStore, title: &str) -> TaskId {
        let todo = store.find_column_by_name("Todo").unwrap().id;
        store.create_task(NewTask::new(title, todo)).unwrap().id
    }

    #[test]
    fn test_add_to_named_column() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let text = output(|out| {
            add(
                &mut store,
                out,
                AddArgs {
                    title: "Review".to_string(),
                    column: "doing".to_string(),
                    description: Some("PR #12".to_string()),
                    priority: Some(Priority::High),
                    due: Some("2026-10-20".to_string()),
                },
            )
        });
        assert_eq!(text, "Added task [1]: Review\n");

        let task = store.get_task(1).unwrap();
        assert_eq!(store.get_column(task.column_id).unwrap().name, "Doing");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date.unwrap().to_string(), "2026-10-20");
    }

    #[test]
    fn test_add_rejects_bad_due_date() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let mut out = Vec::new();
        let err = add(
            &mut store,
            &mut out,
            AddArgs {
                title: "Review".to_string(),
                column: "Todo".to_string(),
                description: None,
                priority: None,
                due: Some("next week".to_string()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
        assert!(store.list_tasks(None).unwrap().is_empty());
    }

    #[test]
    fn test_move_and_done() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let a = add_task(&mut store, "Write spec");
        add_task(&mut store, "Review");

        let text = output(|out| move_to(&mut store, out, a, "Doing", None));
        assert_eq!(text, "Moved task [1] to Doing (position 0)\n");

        let text = output(|out| done(&mut store, out, a));
        assert_eq!(text, "Completed task [1]: Write spec\n");
        let done_col = store.find_column_by_name("Done").unwrap().id;
        assert_eq!(store.get_task(a).unwrap().column_id, done_col);
    }

    #[test]
    fn test_move_to_unknown_column_fails() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let a = add_task(&mut store, "Write spec");
        let mut out = Vec::new();
        let err = move_to(&mut store, &mut out, a, "Backlog", None).unwrap_err();
        assert_eq!(err.to_string(), "Not found: column 'Backlog'");
    }

    #[test]
    fn test_edit_clears_description_and_due() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let todo = store.find_column_by_name("Todo").unwrap().id;
        let id = store
            .create_task(
                NewTask::new("Write spec", todo)
                    .description("draft")
                    .due_date(parse_due_date("2026-10-20").unwrap()),
            )
            .unwrap()
            .id;

        let text = output(|out| {
            edit(
                &mut store,
                out,
                id,
                EditArgs {
                    title: None,
                    description: Some(String::new()),
                    priority: Some(Priority::Low),
                    due: None,
                    clear_due: true,
                },
            )
        });
        assert_eq!(text, "Updated task [1]\n");

        let task = store.get_task(id).unwrap();
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.priority, Priority::Low);
    }

    #[test]
    fn test_show_lists_fields() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let id = add_task(&mut store, "Write spec");
        let text = output(|out| show(&store, out, id));

        assert!(text.contains("Title        Write spec"));
        assert!(text.contains("Description  -"));
        assert!(text.contains("Column       Todo"));
        assert!(text.contains("Priority     med"));
    }

    #[test]
    fn test_rm_declined_changes_nothing() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let id = add_task(&mut store, "Write spec");
        let mut answer: &[u8] = b"n\n";

        let text = output(|out| remove(&mut store, out, &mut answer, id, false));
        assert_eq!(text, "Delete task [1] 'Write spec'? [y/N] Cancelled\n");
        assert!(store.get_task(id).is_ok());
    }

    #[test]
    fn test_rm_confirmed_and_forced() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let a = add_task(&mut store, "Write spec");
        let b = add_task(&mut store, "Review");

        let mut yes: &[u8] = b"y\n";
        output(|out| remove(&mut store, out, &mut yes, a, false));
        let mut nothing: &[u8] = b"";
        let text = output(|out| remove(&mut store, out, &mut nothing, b, true));

        assert_eq!(text, "Deleted task [2]\n");
        assert!(store.list_tasks(None).unwrap().is_empty());
    }

    #[test]
    fn test_list_table() {
        let mut store = BoardStore::open_in_memory().unwrap();
        assert_eq!(output(|out| list(&store, out, None)), "No tasks found\n");

        add_task(&mut store, "Write spec");
        let text = output(|out| list(&store, out, Some("todo")));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Title"));
        assert!(lines[1].contains("Write spec"));
        assert!(lines[1].ends_with("-"));
    }
}
