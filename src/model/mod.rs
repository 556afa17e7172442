pub mod column;
pub mod task;

pub use column::{BoardColumn, Column, ColumnId, DEFAULT_COLUMNS, DONE_COLUMN};
pub use task::{
    format_relative_time, parse_due_date, NewTask, Priority, Task, TaskId, TaskUpdate,
};
