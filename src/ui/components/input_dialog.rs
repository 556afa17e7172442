//! 单行输入弹窗（新建任务 / 编辑标题）

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::model::{ColumnId, TaskId};
use crate::theme::ThemeColors;

/// 输入弹窗用途
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// 在指定列末尾新建任务
    AddTask {
        column_id: ColumnId,
        column_name: String,
    },
    /// 修改任务标题
    EditTitle { task_id: TaskId },
}

/// 输入弹窗数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDialogData {
    pub kind: InputKind,
    pub input: String,
}

impl InputDialogData {
    pub fn add_task(column_id: ColumnId, column_name: impl Into<String>) -> Self {
        Self {
            kind: InputKind::AddTask {
                column_id,
                column_name: column_name.into(),
            },
            input: String::new(),
        }
    }

    /// 编辑标题，输入框预填当前标题
    pub fn edit_title(task_id: TaskId, current: impl Into<String>) -> Self {
        Self {
            kind: InputKind::EditTitle { task_id },
            input: current.into(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn title(&self) -> String {
        match &self.kind {
            InputKind::AddTask { column_name, .. } => format!(" New Task → {} ", column_name),
            InputKind::EditTitle { task_id } => format!(" Edit Task [{}] ", task_id),
        }
    }

    /// 去掉首尾空白后的输入，空输入返回 None
    pub fn value(&self) -> Option<&str> {
        Some(self.input.trim()).filter(|v| !v.is_empty())
    }
}

/// 渲染输入弹窗
pub fn render(frame: &mut Frame, data: &InputDialogData, colors: &ThemeColors) {
    let width = 60u16.min(frame.area().width.saturating_sub(4));
    let area = center_dialog(frame.area(), width, 7);
    let inner = render_dialog_frame(frame, area, &data.title(), colors.highlight, colors);

    let [_, input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    // "Title: {input}█"
    let input_line = Line::from(vec![
        Span::styled("  Title: ", Style::default().fg(colors.muted)),
        Span::styled(data.input.as_str(), Style::default().fg(colors.text)),
        Span::styled("█", Style::default().fg(colors.highlight)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let action = match data.kind {
        InputKind::AddTask { .. } => "create",
        InputKind::EditTitle { .. } => "save",
    };
    render_hint(
        frame,
        hint_area,
        &[("Enter", action), ("Esc", "cancel")],
        colors,
    );
}
