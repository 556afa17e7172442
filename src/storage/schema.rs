//! SQLite 表结构与连接初始化

use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, TransactionBehavior};

use crate::model::DEFAULT_COLUMNS;

/// 建表语句（幂等）
///
/// `UNIQUE(column_id, position)` 同时提供"按列取有序任务"的访问路径。
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS columns (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL CHECK (length(trim(name)) > 0),
    position    INTEGER NOT NULL UNIQUE,
    created_at  TEXT    NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_columns_name ON columns (name COLLATE NOCASE);

CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL CHECK (length(trim(title)) > 0),
    description TEXT,
    column_id   INTEGER NOT NULL REFERENCES columns (id),
    position    INTEGER NOT NULL,
    priority    INTEGER NOT NULL DEFAULT 2 CHECK (priority BETWEEN 1 AND 3),
    due_date    TEXT,
    created_at  TEXT    NOT NULL,
    updated_at  TEXT    NOT NULL,
    UNIQUE (column_id, position)
);
";

/// 设置连接参数
pub fn configure(conn: &Connection, busy_timeout: Duration, file_backed: bool) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.busy_timeout(busy_timeout)?;
    if file_backed {
        // journal_mode 会返回一行结果，只能用 query_row 读取
        let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    }
    Ok(())
}

/// 建表并在首次启动时写入默认列 Todo / Doing / Done
pub fn init(conn: &mut Connection, now: DateTime<Utc>) -> rusqlite::Result<()> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    tx.execute_batch(SCHEMA)?;

    let count: i64 = tx.query_row("SELECT COUNT(*) FROM columns", [], |row| row.get(0))?;
    if count == 0 {
        for (position, name) in DEFAULT_COLUMNS.iter().enumerate() {
            tx.execute(
                "INSERT INTO columns (name, position, created_at) VALUES (?1, ?2, ?3)",
                params![name, position as i64, now],
            )?;
        }
        tracing::info!("seeded default columns");
    }

    tx.commit()
}
