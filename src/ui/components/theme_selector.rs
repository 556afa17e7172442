//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::{Theme, ThemeColors};

/// 渲染主题选择器弹窗
pub fn render(frame: &mut Frame, selected_index: usize, current: Theme, colors: &ThemeColors) {
    let themes = Theme::all();
    // 标题 + 边框 + 内容 + 提示
    let height = (themes.len() as u16) + 4;
    let area = center_dialog(frame.area(), 30, height);
    let inner = render_dialog_frame(frame, area, " Theme ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let is_selected = i == selected_index;
            let prefix = if is_selected { "❯ " } else { "  " };
            let marker = if *theme == current { " ✓" } else { "" };
            let style = if is_selected {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(Span::styled(
                format!("{}{}{}", prefix, theme.label(), marker),
                style,
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left),
        list_area,
    );

    render_hint(
        frame,
        hint_area,
        &[("Enter", "select"), ("Esc", "cancel")],
        colors,
    );
}
