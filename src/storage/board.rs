//! Board Store：列与任务的唯一数据源
//!
//! 所有写操作都在一个 `IMMEDIATE` 事务内完成，要么全部提交，要么全部回滚；
//! 读操作在读事务内执行，保证看到的是一致的快照（不会读到重排到一半的列）。
//!
//! 列内任务的 position 始终是从 0 开始的连续序列。重排时先把需要变动的行
//! "停放"到互不相同的负数位置，再写入最终位置，避免中途触发
//! `UNIQUE(column_id, position)` 约束。

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use super::config::DatabaseConfig;
use super::schema;
use crate::error::{BoardError, Result};
use crate::model::{BoardColumn, Column, ColumnId, NewTask, Task, TaskId, TaskUpdate};
use crate::operations::ordering::{self, Placement};

const COLUMN_FIELDS: &str = "id, name, position, created_at";

const TASK_FIELDS: &str =
    "id, title, description, column_id, position, priority, due_date, created_at, updated_at";

/// 按列顺序、列内顺序列出所有任务
const SELECT_ALL_TASKS: &str = "
SELECT t.id, t.title, t.description, t.column_id, t.position, t.priority,
       t.due_date, t.created_at, t.updated_at
FROM tasks t
JOIN columns c ON c.id = t.column_id
ORDER BY c.position, t.position
";

fn read_column(row: &Row) -> rusqlite::Result<Column> {
    Ok(Column {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn read_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        column_id: row.get(3)?,
        position: row.get(4)?,
        priority: row.get(5)?,
        due_date: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::validation("task title must not be empty"));
    }
    Ok(title.to_string())
}

/// 空白描述视为无描述
fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

fn fetch_task(conn: &Connection, id: TaskId) -> Result<Task> {
    conn.query_row(
        &format!("SELECT {TASK_FIELDS} FROM tasks WHERE id = ?1"),
        params![id],
        read_task,
    )
    .optional()?
    .ok_or_else(|| BoardError::not_found(format!("task {}", id)))
}

fn fetch_column(conn: &Connection, id: ColumnId) -> Result<Column> {
    conn.query_row(
        &format!("SELECT {COLUMN_FIELDS} FROM columns WHERE id = ?1"),
        params![id],
        read_column,
    )
    .optional()?
    .ok_or_else(|| BoardError::not_found(format!("column {}", id)))
}

fn query_columns(conn: &Connection) -> Result<Vec<Column>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMN_FIELDS} FROM columns ORDER BY position"
    ))?;
    let columns = stmt
        .query_map([], read_column)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

fn query_column_tasks(conn: &Connection, column_id: ColumnId) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_FIELDS} FROM tasks WHERE column_id = ?1 ORDER BY position"
    ))?;
    let tasks = stmt
        .query_map(params![column_id], read_task)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tasks)
}

fn query_all_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(SELECT_ALL_TASKS)?;
    let tasks = stmt
        .query_map([], read_task)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tasks)
}

/// 某列当前的任务位置（按 position 排序）
fn column_placements(conn: &Connection, column_id: ColumnId) -> Result<Vec<Placement>> {
    let mut stmt =
        conn.prepare("SELECT id, column_id, position FROM tasks WHERE column_id = ?1 ORDER BY position")?;
    let placements = stmt
        .query_map(params![column_id], |row| {
            Ok(Placement {
                id: row.get(0)?,
                column_id: row.get(1)?,
                position: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(placements)
}

fn ids(placements: &[Placement]) -> Vec<TaskId> {
    placements.iter().map(|p| p.id).collect()
}

/// 两阶段写入新位置：先停放到负数位置，再写最终位置并刷新 updated_at
fn apply_placements(conn: &Connection, changes: &[Placement], now: DateTime<Utc>) -> Result<()> {
    for (k, p) in changes.iter().enumerate() {
        conn.execute(
            "UPDATE tasks SET position = ?1 WHERE id = ?2",
            params![-(k as i64) - 1, p.id],
        )?;
    }
    for p in changes {
        conn.execute(
            "UPDATE tasks SET column_id = ?1, position = ?2, updated_at = ?3 WHERE id = ?4",
            params![p.column_id, p.position, now, p.id],
        )?;
    }
    Ok(())
}

/// Board Store
pub struct BoardStore {
    conn: Connection,
    clock: Box<dyn Clock>,
}

impl BoardStore {
    /// 打开（必要时创建）数据库文件
    pub fn open(path: &Path, config: &DatabaseConfig) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        schema::configure(&conn, Duration::from_millis(config.busy_timeout_ms), true)?;
        tracing::debug!(path = %path.display(), "opened board database");
        Self::from_connection(conn, Box::new(DefaultClock))
    }

    /// 内存数据库（测试、演示用）
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::configure(&conn, Duration::from_millis(0), false)?;
        Self::from_connection(conn, Box::new(DefaultClock))
    }

    fn from_connection(mut conn: Connection, clock: Box<dyn Clock>) -> Result<Self> {
        schema::init(&mut conn, clock.utc())?;
        Ok(Self { conn, clock })
    }

    /// 替换时钟
    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Columns
    // ─────────────────────────────────────────────────────────────────────

    /// 新建列
    ///
    /// `position` 为空时追加到最右侧；指定的位置已被占用时，
    /// 该位置及之后的列整体右移一位。
    pub fn create_column(&mut self, name: &str, position: Option<i64>) -> Result<Column> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::validation("column name must not be empty"));
        }
        if matches!(position, Some(p) if p < 0) {
            return Err(BoardError::validation("column position must not be negative"));
        }

        let now = self.clock.utc();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let duplicate: bool = tx.query_row(
            "SELECT EXISTS (SELECT 1 FROM columns WHERE name = ?1 COLLATE NOCASE)",
            params![name],
            |row| row.get(0),
        )?;
        if duplicate {
            return Err(BoardError::validation(format!(
                "column '{}' already exists",
                name
            )));
        }

        let position = match position {
            Some(p) => {
                let taken: bool = tx.query_row(
                    "SELECT EXISTS (SELECT 1 FROM columns WHERE position = ?1)",
                    params![p],
                    |row| row.get(0),
                )?;
                if taken {
                    tx.execute(
                        "UPDATE columns SET position = -(position + 1) WHERE position >= ?1",
                        params![p],
                    )?;
                    tx.execute("UPDATE columns SET position = -position WHERE position < 0", [])?;
                }
                p
            }
            None => tx.query_row(
                "SELECT COALESCE(MAX(position), -1) + 1 FROM columns",
                [],
                |row| row.get(0),
            )?,
        };

        tx.execute(
            "INSERT INTO columns (name, position, created_at) VALUES (?1, ?2, ?3)",
            params![name, position, now],
        )?;
        let column = fetch_column(&tx, tx.last_insert_rowid())?;
        tx.commit()?;

        tracing::info!(column_id = column.id, name = %column.name, position, "created column");
        Ok(column)
    }

    /// 所有列（按 position 排序）
    pub fn list_columns(&self) -> Result<Vec<Column>> {
        query_columns(&self.conn)
    }

    pub fn get_column(&self, id: ColumnId) -> Result<Column> {
        fetch_column(&self.conn, id)
    }

    /// 按名称查找列（不区分大小写）
    pub fn find_column_by_name(&self, name: &str) -> Result<Column> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMN_FIELDS} FROM columns WHERE name = ?1 COLLATE NOCASE"),
                params![name.trim()],
                read_column,
            )
            .optional()?
            .ok_or_else(|| BoardError::not_found(format!("column '{}'", name.trim())))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// 整个看板：列按 position 排序，列内任务按 position 排序
    pub fn list_board(&self) -> Result<Vec<BoardColumn>> {
        let tx = self.conn.unchecked_transaction()?;
        let columns = query_columns(&tx)?;

        let mut by_column: HashMap<ColumnId, Vec<Task>> = HashMap::new();
        for task in query_all_tasks(&tx)? {
            by_column.entry(task.column_id).or_default().push(task);
        }
        tx.commit()?;

        let board: Vec<BoardColumn> = columns
            .into_iter()
            .map(|column| {
                let tasks = by_column.remove(&column.id).unwrap_or_default();
                BoardColumn { column, tasks }
            })
            .collect();
        tracing::debug!(columns = board.len(), "loaded board");
        Ok(board)
    }

    /// 列出任务；`column` 为空时返回全部任务（按列顺序）
    pub fn list_tasks(&self, column: Option<ColumnId>) -> Result<Vec<Task>> {
        let tx = self.conn.unchecked_transaction()?;
        let tasks = match column {
            Some(column_id) => {
                fetch_column(&tx, column_id)?;
                query_column_tasks(&tx, column_id)?
            }
            None => query_all_tasks(&tx)?,
        };
        tx.commit()?;
        Ok(tasks)
    }

    pub fn get_task(&self, id: TaskId) -> Result<Task> {
        fetch_task(&self.conn, id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Task mutations
    // ─────────────────────────────────────────────────────────────────────

    /// 新建任务，追加到所在列末尾
    pub fn create_task(&mut self, new: NewTask) -> Result<Task> {
        let title = validate_title(&new.title)?;
        let description = normalize_description(new.description.as_deref());
        let priority = new.priority.unwrap_or_default();

        let now = self.clock.utc();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        fetch_column(&tx, new.column_id)?;

        let max: Option<i64> = tx.query_row(
            "SELECT MAX(position) FROM tasks WHERE column_id = ?1",
            params![new.column_id],
            |row| row.get(0),
        )?;
        let position = ordering::append_position(max);

        tx.execute(
            "INSERT INTO tasks (title, description, column_id, position, priority, due_date,
                                created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                title,
                description,
                new.column_id,
                position,
                priority,
                new.due_date,
                now
            ],
        )?;
        let task = fetch_task(&tx, tx.last_insert_rowid())?;
        tx.commit()?;

        tracing::info!(
            task_id = task.id,
            column_id = task.column_id,
            position = task.position,
            "created task"
        );
        Ok(task)
    }

    /// 部分更新 title / description / priority / due_date，不改变位置
    pub fn update_task(&mut self, id: TaskId, update: &TaskUpdate) -> Result<Task> {
        let now = self.clock.utc();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut task = fetch_task(&tx, id)?;
        if update.is_empty() {
            return Ok(task);
        }

        if let Some(title) = &update.title {
            task.title = validate_title(title)?;
        }
        if let Some(description) = &update.description {
            task.description = normalize_description(description.as_deref());
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        task.updated_at = now;

        tx.execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, priority = ?3, due_date = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                task.title,
                task.description,
                task.priority,
                task.due_date,
                task.updated_at,
                id
            ],
        )?;
        tx.commit()?;

        tracing::info!(task_id = id, "updated task");
        Ok(task)
    }

    /// 移动任务到 `target_column_id` 的 `target_position`（为空则放到末尾）
    ///
    /// 同列为重排（删除后重新插入）；跨列时源列补齐空位，目标列在插入点之后的
    /// 任务整体后移一位。所有位置变更在同一事务内提交。
    pub fn move_task(
        &mut self,
        id: TaskId,
        target_column_id: ColumnId,
        target_position: Option<usize>,
    ) -> Result<Task> {
        let now = self.clock.utc();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let task = fetch_task(&tx, id)?;
        fetch_column(&tx, target_column_id)?;

        let source = column_placements(&tx, task.column_id)?;
        let source_ids = ids(&source);
        let missing = || BoardError::not_found(format!("task {} in column {}", id, task.column_id));

        let (current, desired) = if target_column_id == task.column_id {
            let plan = ordering::plan_move(&source_ids, None, id, target_position)
                .ok_or_else(missing)?;
            (source, ordering::layout(task.column_id, &plan.source))
        } else {
            let target = column_placements(&tx, target_column_id)?;
            let target_ids = ids(&target);
            let plan = ordering::plan_move(&source_ids, Some(target_ids.as_slice()), id, target_position)
                .ok_or_else(missing)?;

            let mut desired = ordering::layout(task.column_id, &plan.source);
            desired.extend(ordering::layout(
                target_column_id,
                &plan.target.unwrap_or_default(),
            ));
            let mut current = source;
            current.extend(target);
            (current, desired)
        };

        let changes = ordering::diff_layout(&current, &desired);
        apply_placements(&tx, &changes, now)?;
        // 即便位置不变，被移动的任务也刷新 updated_at
        tx.execute(
            "UPDATE tasks SET updated_at = ?1 WHERE id = ?2",
            params![now, id],
        )?;

        let moved = fetch_task(&tx, id)?;
        tx.commit()?;

        tracing::info!(
            task_id = id,
            from_column = task.column_id,
            from_position = task.position,
            to_column = moved.column_id,
            to_position = moved.position,
            renumbered = changes.len(),
            "moved task"
        );
        Ok(moved)
    }

    /// 删除任务，并把同列剩余任务重新编号为 0..n-1
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        let now = self.clock.utc();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let task = fetch_task(&tx, id)?;
        let current = column_placements(&tx, task.column_id)?;
        tx.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;

        let remaining = ordering::plan_removal(&ids(&current), id);
        let desired = ordering::layout(task.column_id, &remaining);
        let changes = ordering::diff_layout(&current, &desired);
        apply_placements(&tx, &changes, now)?;
        tx.commit()?;

        tracing::info!(
            task_id = id,
            column_id = task.column_id,
            renumbered = changes.len(),
            "deleted task"
        );
        Ok(task)
    }
}
