//! 确认弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame};
use super::truncate;
use crate::model::TaskId;
use crate::theme::ThemeColors;

/// 确认弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmType {
    /// 删除任务
    DeleteTask { task_id: TaskId, title: String },
}

impl ConfirmType {
    pub fn title(&self) -> &str {
        match self {
            ConfirmType::DeleteTask { .. } => " Delete ",
        }
    }

    pub fn message(&self) -> Vec<Line<'static>> {
        match self {
            ConfirmType::DeleteTask { task_id, title } => vec![
                Line::from(format!("[{}] {}", task_id, truncate(title, 30))),
                Line::from(""),
                Line::from("Delete this task?"),
            ],
        }
    }
}

/// 渲染确认弹窗
pub fn render(frame: &mut Frame, confirm_type: &ConfirmType, colors: &ThemeColors) {
    let message_lines = confirm_type.message();
    // 标题 + 边框 + 内容 + 提示
    let height = (message_lines.len() as u16) + 4;
    let area = center_dialog(frame.area(), 40, height);
    let inner = render_dialog_frame(frame, area, confirm_type.title(), colors.warning, colors);

    let [content_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let styled_lines: Vec<Line> = message_lines
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(colors.text),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(styled_lines).alignment(Alignment::Center),
        content_area,
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" delete  ", Style::default().fg(colors.muted)),
        Span::styled(
            "n",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
