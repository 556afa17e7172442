use chrono::{DateTime, Utc};

use super::Task;

/// Column 主键（SQLite rowid）
pub type ColumnId = i64;

/// 看板列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    /// 列之间从左到右的顺序（唯一，可稀疏）
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

/// `list_board` 的一项：列 + 按 position 排序的任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl BoardColumn {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// 首次启动时预置的列
pub const DEFAULT_COLUMNS: [&str; 3] = ["Todo", "Doing", "Done"];

/// `done` 命令的目标列
pub const DONE_COLUMN: &str = "Done";
