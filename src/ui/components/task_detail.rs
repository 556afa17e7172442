//! 任务详情栏

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{format_relative_time, Task};
use crate::theme::ThemeColors;

/// 渲染选中任务的详情
pub fn render(frame: &mut Frame, area: Rect, task: Option<&Task>, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg_secondary));

    let lines = match task {
        Some(task) => detail_lines(task, colors),
        None => vec![Line::from(Span::styled(
            " No task selected",
            Style::default().fg(colors.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn detail_lines(task: &Task, colors: &ThemeColors) -> Vec<Line<'static>> {
    let label = Style::default().fg(colors.muted);
    let due = task
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    vec![
        Line::from(vec![
            Span::styled(format!(" [{}] ", task.id), label),
            Span::styled(
                task.title.clone(),
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Priority: ", label),
            Span::styled(
                task.priority.label().to_string(),
                Style::default().fg(colors.priority(task.priority)),
            ),
            Span::styled("   Due: ", label),
            Span::styled(due, Style::default().fg(colors.warning)),
            Span::styled("   Updated: ", label),
            Span::styled(
                format_relative_time(task.updated_at, Utc::now()),
                Style::default().fg(colors.text),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", task.description.as_deref().unwrap_or("(no description)")),
            Style::default().fg(colors.text),
        )),
    ]
}
