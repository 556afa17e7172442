//! 底部状态栏：上下文快捷键提示，或最近一条消息

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::hint_line;
use crate::theme::ThemeColors;

/// 渲染状态栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    floating: bool,
    message: Option<&str>,
    colors: &ThemeColors,
) {
    let mut line = hint_line(shortcuts(floating), colors);
    if let Some(message) = message {
        line.spans.insert(0, Span::styled(" │ ", Style::default().fg(colors.border)));
        line.spans
            .insert(0, Span::styled(format!(" {}", message), Style::default().fg(colors.info)));
    } else {
        line.spans.insert(0, Span::raw(" "));
    }

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(paragraph, area);
}

/// 当前模式下的快捷键
pub fn shortcuts(floating: bool) -> &'static [(&'static str, &'static str)] {
    if floating {
        &[
            ("←/→", "column"),
            ("↑/↓", "slot"),
            ("Enter", "place"),
            ("Esc", "cancel"),
        ]
    } else {
        &[
            ("Enter", "move"),
            ("a", "add"),
            ("e", "edit"),
            ("d", "delete"),
            ("x", "export"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_by_mode() {
        assert!(shortcuts(true).iter().any(|(k, _)| *k == "Esc"));
        assert!(!shortcuts(true).iter().any(|(k, _)| *k == "a"));
        assert!(shortcuts(false).iter().any(|(k, _)| *k == "q"));
    }
}
