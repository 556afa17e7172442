//! 看板主界面

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::components::{
    column, confirm_dialog, help_panel, input_dialog, status_bar, task_detail, theme_selector,
    toast,
};
use crate::app::App;

/// 详情栏高度（含上边框）
const DETAIL_HEIGHT: u16 = 4;

/// 渲染整个界面
pub fn render(frame: &mut Frame, app: &App) {
    let colors = &app.ui.colors;
    frame.render_widget(Block::default().style(Style::default().bg(colors.bg)), frame.area());

    let [board_area, detail_area, status_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(DETAIL_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    // 每列等宽
    let count = app.view.columns().len();
    if count > 0 {
        let column_areas = Layout::horizontal(vec![Constraint::Fill(1); count]).split(board_area);
        for (index, area) in column_areas.iter().enumerate() {
            column::render(frame, *area, &app.view, index, colors);
        }
    }

    task_detail::render(frame, detail_area, app.view.selected_task(), colors);

    let message = app
        .ui
        .toast
        .as_ref()
        .map(|t| t.message.as_str())
        .or(app.ui.last_message.as_deref());
    status_bar::render(frame, status_area, app.view.is_floating(), message, colors);

    // 弹窗层
    if let Some(data) = &app.dialogs.input_dialog {
        input_dialog::render(frame, data, colors);
    }
    if let Some(confirm) = &app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm, colors);
    }
    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, app.ui.theme, colors);
    }
    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }

    if let Some(t) = &app.ui.toast {
        toast::render(frame, board_area, t, colors);
    }
}
