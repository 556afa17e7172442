//! 单列面板：标题 `Name (count)`，任务行，移动预览

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::truncate;
use crate::board_view::{BoardView, PreviewRow};
use crate::model::{Priority, Task};
use crate::theme::ThemeColors;

/// 渲染第 `index` 列
pub fn render(frame: &mut Frame, area: Rect, view: &BoardView, index: usize, colors: &ThemeColors) {
    let Some(entry) = view.columns().get(index) else {
        return;
    };
    let accent = colors.column_accent(index);
    let is_active = index == view.active_column();

    let title = format!(" {} ({}) ", entry.column.name, view.count_label(index));
    let title_style = if is_active {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_active { accent } else { colors.border }))
        .style(Style::default().bg(colors.bg));

    let width = area.width.saturating_sub(6) as usize;
    let rows = view.preview_rows(index);
    if rows.is_empty() {
        let empty = List::new(vec![ListItem::new(Line::from(Span::styled(
            "  (empty)",
            Style::default().fg(colors.muted),
        )))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // 让光标行 / 预览行保持在可视范围内
    let focus = rows.iter().position(|row| {
        matches!(
            row,
            PreviewRow::Task { selected: true, .. } | PreviewRow::Floating(_)
        )
    });
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, width, accent, colors)))
        .collect();

    let mut state = ListState::default().with_selected(focus);
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn row_line(row: &PreviewRow, width: usize, accent: Color, colors: &ThemeColors) -> Line<'static> {
    match row {
        PreviewRow::Task { task, selected } => {
            if *selected {
                let style = Style::default()
                    .fg(colors.cursor_fg)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD);
                Line::from(Span::styled(
                    format!("❯ {}{}", truncate(&task.title, width), marker(task)),
                    style,
                ))
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        truncate(&task.title, width),
                        Style::default().fg(colors.priority(task.priority)),
                    ),
                    Span::styled(marker(task), Style::default().fg(colors.warning)),
                ])
            }
        }
        PreviewRow::Origin(task) => Line::from(Span::styled(
            format!("○ {}", truncate(&task.title, width)),
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        )),
        PreviewRow::Floating(task) => Line::from(Span::styled(
            format!("→ ◆ {}", truncate(&task.title, width.saturating_sub(2))),
            Style::default()
                .fg(colors.floating)
                .add_modifier(Modifier::BOLD),
        )),
    }
}

/// 高优先级 / 有截止日期的行尾标记
fn marker(task: &Task) -> String {
    let mut out = String::new();
    if task.priority == Priority::High {
        out.push_str(" !");
    }
    if task.due_date.is_some() {
        out.push_str(" ⏰");
    }
    out
}
