//! 看板区域底部的浮动提示
//!
//! 错误提示使用错误色边框并加 `✗` 前缀；普通提示使用高亮色。
//! 提示框贴在看板区域底部，不遮挡详情栏和状态栏。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::truncate;
use crate::theme::ThemeColors;
use crate::ui_state::{Toast, ToastKind};

const ERROR_PREFIX: &str = "✗ ";

/// 提示文本（错误带前缀）
fn label(toast: &Toast) -> String {
    match toast.kind {
        ToastKind::Info => toast.message.clone(),
        ToastKind::Error => format!("{}{}", ERROR_PREFIX, toast.message),
    }
}

/// 在 `area` 底部居中的位置，过窄或过矮时返回 None
fn placement(area: Rect, text_width: usize) -> Option<Rect> {
    if area.width < 8 || area.height < 4 {
        return None;
    }
    let width = (text_width + 4).min(area.width as usize - 2) as u16;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height - 4;
    Some(Rect::new(x, y, width, 3))
}

pub fn render(frame: &mut Frame, area: Rect, toast: &Toast, colors: &ThemeColors) {
    let text = label(toast);
    let Some(toast_area) = placement(area, text.chars().count()) else {
        return;
    };
    let text = truncate(&text, toast_area.width.saturating_sub(4) as usize);

    let accent = match toast.kind {
        ToastKind::Info => colors.highlight,
        ToastKind::Error => colors.error,
    };

    frame.render_widget(Clear, toast_area);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(colors.bg)),
        );
    frame.render_widget(paragraph, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_label_has_prefix() {
        let toast = Toast::error("task 9 not found", Duration::from_secs(1));
        assert_eq!(label(&toast), "✗ task 9 not found");

        let toast = Toast::new("Reloaded", Duration::from_secs(1));
        assert_eq!(label(&toast), "Reloaded");
    }

    #[test]
    fn test_placement_stays_inside_board_area() {
        let area = Rect::new(0, 0, 40, 20);
        let rect = placement(area, 100).unwrap();
        assert_eq!(rect.width, 38);
        assert_eq!(rect.y + rect.height, 19);
        assert!(rect.x >= area.x && rect.right() <= area.right());

        assert!(placement(Rect::new(0, 0, 6, 20), 5).is_none());
    }
}
