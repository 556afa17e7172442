//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::dialog_utils::center_dialog;
use crate::model::Priority;
use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 38;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 31;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, PANEL_HEIGHT);
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(build_help_lines(colors)).block(block);
    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("h / ←", "Previous column", colors),
        key_line("l / →", "Next column", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("j / ↓", "Move down", colors),
        Line::from(""),
        section_header("Move", colors),
        key_line("Enter", "Pick up / place", colors),
        key_line("Esc", "Cancel move", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("a", "Add task", colors),
        key_line("e", "Edit title", colors),
        key_line("d", "Delete task", colors),
        key_line("x", "Export column", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("r", "Reload", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "This help", colors),
        key_line("q", "Quit", colors),
        Line::from(""),
        section_header("Priority", colors),
        priority_legend(colors),
        Line::from(""),
        Line::from(Span::styled(
            "  ────────────────────────────────",
            Style::default().fg(colors.muted),
        )),
        Line::from(Span::styled(
            format!("  todo v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "      Press ? or Esc to close",
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 分组标题
fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 优先级图例，按详情栏里的颜色显示
fn priority_legend(colors: &ThemeColors) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for priority in Priority::all() {
        spans.push(Span::styled(
            format!("{:6}", priority.label()),
            Style::default().fg(colors.priority(*priority)),
        ));
    }
    spans.push(Span::styled("(! = high)", Style::default().fg(colors.muted)));
    Line::from(spans)
}

/// 快捷键行
fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:10}", key),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_colors;

    #[test]
    fn test_help_fits_panel() {
        let lines = build_help_lines(&dark_colors());
        // 上下边框各占一行
        assert!(lines.len() as u16 <= PANEL_HEIGHT - 2);
    }

    #[test]
    fn test_priority_legend_lists_every_priority() {
        let colors = dark_colors();
        let legend = priority_legend(&colors);
        let text: String = legend.spans.iter().map(|s| s.content.as_ref()).collect();
        for priority in Priority::all() {
            assert!(text.contains(priority.label()));
        }
        assert_eq!(legend.spans[3].style.fg, Some(colors.priority(Priority::High)));
    }
}
