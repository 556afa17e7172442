//! 看板视图状态
//!
//! 保存最近一次加载的看板快照、当前列、每列光标，以及"拿起"后悬浮中的任务。
//! 本模块不访问存储：`place()` 只产出一个 `MoveIntent`，由 App 交给 BoardStore 执行。

use crate::model::{BoardColumn, ColumnId, Task, TaskId};

/// 一次放下操作对应的移动请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub task_id: TaskId,
    pub target_column_id: ColumnId,
    /// 目标列中（不含该任务时）的插入位置
    pub target_position: usize,
}

/// 悬浮中的任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingTask {
    pub task: Task,
    /// 拿起时所在列的下标
    pub origin_column: usize,
    /// 拿起时在列中的下标
    pub origin_slot: usize,
    /// 当前预览的插入位置（在目标列去掉该任务后的下标）
    pub slot: usize,
}

/// 列内一行的渲染形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewRow<'a> {
    /// 普通任务，`selected` 表示光标所在行
    Task { task: &'a Task, selected: bool },
    /// 悬浮任务的原位置（淡化显示）
    Origin(&'a Task),
    /// 悬浮任务的预览位置
    Floating(&'a Task),
}

/// 看板视图
#[derive(Debug, Default)]
pub struct BoardView {
    columns: Vec<BoardColumn>,
    active_column: usize,
    cursors: Vec<usize>,
    floating: Option<FloatingTask>,
}

impl BoardView {
    pub fn new(columns: Vec<BoardColumn>) -> Self {
        let mut view = Self::default();
        view.reload(columns);
        view
    }

    /// 用新快照替换当前数据，光标按新长度收紧
    ///
    /// 悬浮任务若已不在原列中则丢弃。
    pub fn reload(&mut self, columns: Vec<BoardColumn>) {
        self.cursors.resize(columns.len(), 0);
        for (cursor, column) in self.cursors.iter_mut().zip(&columns) {
            *cursor = (*cursor).min(column.len().saturating_sub(1));
        }
        self.active_column = self.active_column.min(columns.len().saturating_sub(1));
        self.columns = columns;

        if let Some(floating) = &self.floating {
            let still_there = self
                .columns
                .get(floating.origin_column)
                .is_some_and(|c| c.tasks.iter().any(|t| t.id == floating.task.id));
            if !still_there {
                self.floating = None;
            }
        }
        if let Some(floating) = self.floating.as_mut() {
            let len = self
                .columns
                .get(self.active_column)
                .map_or(0, |c| len_without(c, floating.task.id));
            floating.slot = floating.slot.min(len);
        }
    }

    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    pub fn active_column(&self) -> usize {
        self.active_column
    }

    pub fn cursor(&self, column: usize) -> usize {
        self.cursors.get(column).copied().unwrap_or(0)
    }

    pub fn floating(&self) -> Option<&FloatingTask> {
        self.floating.as_ref()
    }

    pub fn is_floating(&self) -> bool {
        self.floating.is_some()
    }

    /// 当前列
    pub fn current_column(&self) -> Option<&BoardColumn> {
        self.columns.get(self.active_column)
    }

    /// 光标所在任务；悬浮时返回悬浮任务
    pub fn selected_task(&self) -> Option<&Task> {
        if let Some(floating) = &self.floating {
            return Some(&floating.task);
        }
        self.current_column()?
            .tasks
            .get(self.cursor(self.active_column))
    }

    /// 把光标定位到指定任务（不存在则不动）
    pub fn select_task(&mut self, id: TaskId) -> bool {
        for (ci, column) in self.columns.iter().enumerate() {
            if let Some(ti) = column.tasks.iter().position(|t| t.id == id) {
                self.active_column = ci;
                self.cursors[ci] = ti;
                return true;
            }
        }
        false
    }

    // ========== 导航 ==========

    pub fn move_left(&mut self) {
        if self.active_column > 0 {
            self.set_active_column(self.active_column - 1);
        }
    }

    pub fn move_right(&mut self) {
        if self.active_column + 1 < self.columns.len() {
            self.set_active_column(self.active_column + 1);
        }
    }

    pub fn move_up(&mut self) {
        match self.floating.as_mut() {
            Some(floating) => floating.slot = floating.slot.saturating_sub(1),
            None => {
                if let Some(cursor) = self.cursors.get_mut(self.active_column) {
                    *cursor = cursor.saturating_sub(1);
                }
            }
        }
    }

    pub fn move_down(&mut self) {
        let Some(column) = self.columns.get(self.active_column) else {
            return;
        };
        match self.floating.as_mut() {
            Some(floating) => {
                let len = len_without(column, floating.task.id);
                floating.slot = (floating.slot + 1).min(len);
            }
            None => {
                let last = column.len().saturating_sub(1);
                let cursor = &mut self.cursors[self.active_column];
                *cursor = (*cursor + 1).min(last);
            }
        }
    }

    fn set_active_column(&mut self, index: usize) {
        self.active_column = index;
        if let Some(floating) = self.floating.as_mut() {
            let column = &self.columns[index];
            let len = len_without(column, floating.task.id);
            floating.slot = if index == floating.origin_column {
                floating.origin_slot.min(len)
            } else {
                self.cursors[index].min(len)
            };
        }
    }

    // ========== 拿起 / 放下 ==========

    /// 拿起光标所在任务，返回是否成功
    pub fn pick_up(&mut self) -> bool {
        if self.floating.is_some() {
            return false;
        }
        let column = self.active_column;
        let slot = self.cursor(column);
        let Some(task) = self.columns.get(column).and_then(|c| c.tasks.get(slot)) else {
            return false;
        };
        self.floating = Some(FloatingTask {
            task: task.clone(),
            origin_column: column,
            origin_slot: slot,
            slot,
        });
        true
    }

    /// 放下悬浮任务
    ///
    /// 位置没有变化时返回 `None`，调用方无需访问存储。
    pub fn place(&mut self) -> Option<MoveIntent> {
        let floating = self.floating.take()?;
        if self.active_column == floating.origin_column && floating.slot == floating.origin_slot {
            return None;
        }
        let column = self.columns.get(self.active_column)?;
        Some(MoveIntent {
            task_id: floating.task.id,
            target_column_id: column.column.id,
            target_position: floating.slot,
        })
    }

    /// 取消移动，回到原列；不产生任何存储调用
    pub fn cancel(&mut self) -> bool {
        match self.floating.take() {
            Some(floating) => {
                self.active_column = floating.origin_column;
                self.cursors[floating.origin_column] = floating.origin_slot;
                true
            }
            None => false,
        }
    }

    // ========== 渲染辅助 ==========

    /// 第 `index` 列的行序列（含悬浮预览）
    pub fn preview_rows(&self, index: usize) -> Vec<PreviewRow<'_>> {
        let Some(column) = self.columns.get(index) else {
            return Vec::new();
        };
        let Some(floating) = &self.floating else {
            let cursor = self.cursor(index);
            return column
                .tasks
                .iter()
                .enumerate()
                .map(|(i, task)| PreviewRow::Task {
                    task,
                    selected: index == self.active_column && i == cursor,
                })
                .collect();
        };

        let is_target = index == self.active_column;
        let mut rows = Vec::with_capacity(column.len() + 1);
        let mut seen = 0;
        for task in &column.tasks {
            if task.id == floating.task.id {
                rows.push(PreviewRow::Origin(task));
                continue;
            }
            if is_target && seen == floating.slot {
                rows.push(PreviewRow::Floating(&floating.task));
            }
            rows.push(PreviewRow::Task {
                task,
                selected: false,
            });
            seen += 1;
        }
        if is_target && seen <= floating.slot {
            rows.push(PreviewRow::Floating(&floating.task));
        }
        rows
    }

    /// 列标题中的计数，移动预览时显示变化 `n→n±1`
    pub fn count_label(&self, index: usize) -> String {
        let Some(column) = self.columns.get(index) else {
            return String::new();
        };
        let count = column.len();
        match &self.floating {
            Some(floating) if floating.origin_column != self.active_column => {
                if index == floating.origin_column {
                    format!("{}→{}", count, count.saturating_sub(1))
                } else if index == self.active_column {
                    format!("{}→{}", count, count + 1)
                } else {
                    count.to_string()
                }
            }
            _ => count.to_string(),
        }
    }
}

fn len_without(column: &BoardColumn, id: TaskId) -> usize {
    column.tasks.iter().filter(|t| t.id != id).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Priority};
    use chrono::{TimeZone, Utc};

    fn task(id: TaskId, column_id: ColumnId, position: i64) -> Task {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        Task {
            id,
            title: format!("task {}", id),
            description: None,
            column_id,
            position,
            priority: Priority::Medium,
            due_date: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn column(id: ColumnId, name: &str, task_ids: &[TaskId]) -> BoardColumn {
        BoardColumn {
            column: Column {
                id,
                name: name.to_string(),
                position: id - 1,
                created_at: Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap(),
            },
            tasks: task_ids
                .iter()
                .enumerate()
                .map(|(i, t)| task(*t, id, i as i64))
                .collect(),
        }
    }

    /// Todo: [1, 2, 3]  Doing: [4]  Done: []
    fn board() -> BoardView {
        BoardView::new(vec![
            column(1, "Todo", &[1, 2, 3]),
            column(2, "Doing", &[4]),
            column(3, "Done", &[]),
        ])
    }

    #[test]
    fn test_navigation_clamps() {
        let mut view = board();
        view.move_up();
        assert_eq!(view.cursor(0), 0);
        for _ in 0..5 {
            view.move_down();
        }
        assert_eq!(view.cursor(0), 2);
        assert_eq!(view.selected_task().unwrap().id, 3);

        view.move_left();
        assert_eq!(view.active_column(), 0);
        view.move_right();
        view.move_right();
        view.move_right();
        assert_eq!(view.active_column(), 2);
        assert!(view.selected_task().is_none());
    }

    #[test]
    fn test_pick_up_on_empty_column_fails() {
        let mut view = board();
        view.move_right();
        view.move_right();
        assert!(!view.pick_up());
        assert!(!view.is_floating());
    }

    #[test]
    fn test_place_across_columns_yields_single_intent() {
        let mut view = board();
        view.move_down(); // task 2
        assert!(view.pick_up());
        view.move_right(); // Doing, cursor 0
        view.move_down(); // after task 4

        let intent = view.place().unwrap();
        assert_eq!(
            intent,
            MoveIntent {
                task_id: 2,
                target_column_id: 2,
                target_position: 1,
            }
        );
        assert!(!view.is_floating());
        assert!(view.place().is_none());
    }

    #[test]
    fn test_place_at_origin_is_noop() {
        let mut view = board();
        view.move_down();
        view.pick_up();
        view.move_right();
        view.move_left();
        assert_eq!(view.floating().unwrap().slot, 1);
        assert!(view.place().is_none());
    }

    #[test]
    fn test_reorder_within_column() {
        let mut view = board();
        view.pick_up(); // task 1
        view.move_down();
        view.move_down();
        view.move_down(); // clamped at 2 (end of [2, 3])

        let intent = view.place().unwrap();
        assert_eq!(intent.task_id, 1);
        assert_eq!(intent.target_column_id, 1);
        assert_eq!(intent.target_position, 2);
    }

    #[test]
    fn test_cancel_restores_origin() {
        let mut view = board();
        view.move_down();
        view.pick_up();
        view.move_right();
        view.move_right();

        assert!(view.cancel());
        assert!(!view.is_floating());
        assert_eq!(view.active_column(), 0);
        assert_eq!(view.selected_task().unwrap().id, 2);
        assert!(!view.cancel());
    }

    #[test]
    fn test_preview_rows_show_origin_and_floating() {
        let mut view = board();
        view.pick_up(); // task 1
        view.move_right(); // Doing, slot 0

        let origin = view.preview_rows(0);
        assert!(matches!(origin[0], PreviewRow::Origin(t) if t.id == 1));
        assert_eq!(origin.len(), 3);

        let target = view.preview_rows(1);
        assert!(matches!(target[0], PreviewRow::Floating(t) if t.id == 1));
        assert!(matches!(target[1], PreviewRow::Task { task, .. } if task.id == 4));

        view.move_right(); // Done, empty
        let done = view.preview_rows(2);
        assert_eq!(done.len(), 1);
        assert!(matches!(done[0], PreviewRow::Floating(_)));
    }

    #[test]
    fn test_preview_rows_same_column() {
        let mut view = board();
        view.pick_up(); // task 1
        view.move_down(); // slot 1 -> between 2 and 3

        let rows = view.preview_rows(0);
        let kinds: Vec<&str> = rows
            .iter()
            .map(|r| match r {
                PreviewRow::Task { .. } => "task",
                PreviewRow::Origin(_) => "origin",
                PreviewRow::Floating(_) => "floating",
            })
            .collect();
        assert_eq!(kinds, vec!["origin", "task", "floating", "task"]);
    }

    #[test]
    fn test_count_label_during_move() {
        let mut view = board();
        assert_eq!(view.count_label(0), "3");
        view.pick_up();
        assert_eq!(view.count_label(0), "3");
        view.move_right();
        assert_eq!(view.count_label(0), "3→2");
        assert_eq!(view.count_label(1), "1→2");
        assert_eq!(view.count_label(2), "0");
    }

    #[test]
    fn test_reload_clamps_cursor_and_drops_stale_floating() {
        let mut view = board();
        view.move_down();
        view.move_down(); // cursor 2
        view.reload(vec![
            column(1, "Todo", &[1]),
            column(2, "Doing", &[4]),
            column(3, "Done", &[]),
        ]);
        assert_eq!(view.cursor(0), 0);

        view.pick_up(); // task 1
        view.reload(vec![
            column(1, "Todo", &[]),
            column(2, "Doing", &[4, 1]),
            column(3, "Done", &[]),
        ]);
        assert!(!view.is_floating());
    }

    #[test]
    fn test_select_task_follows_moved_task() {
        let mut view = board();
        view.reload(vec![
            column(1, "Todo", &[1, 3]),
            column(2, "Doing", &[4, 2]),
            column(3, "Done", &[]),
        ]);
        assert!(view.select_task(2));
        assert_eq!(view.active_column(), 1);
        assert_eq!(view.cursor(1), 1);
        assert!(!view.select_task(99));
    }
}
