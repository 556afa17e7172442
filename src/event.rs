use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    if app.dialogs.input_dialog.is_some() {
        handle_input_dialog_key(app, key);
        return;
    }

    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    handle_board_key(app, key);
}

/// 看板主界面
fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // 导航；悬浮时左右选列、上下选插入位置
        KeyCode::Char('h') | KeyCode::Left => app.view.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.view.move_right(),
        KeyCode::Char('k') | KeyCode::Up => app.view.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.view.move_down(),

        // 拿起 / 放下
        KeyCode::Enter => app.pick_up_or_place(),
        KeyCode::Esc => app.cancel_move(),

        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('e') => app.open_edit_dialog(),
        KeyCode::Char('d') => app.open_delete_confirm(),
        KeyCode::Char('x') => app.export_current_column(),

        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('t') => app.open_theme_selector(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.toggle_help();
    }
}

fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_dialog_yes(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_dialog_no(),
        _ => {}
    }
}

fn handle_input_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.close_input_dialog(),
        KeyCode::Backspace => {
            if let Some(data) = app.dialogs.input_dialog.as_mut() {
                data.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(data) = app.dialogs.input_dialog.as_mut() {
                data.push(c);
            }
        }
        _ => {}
    }
}

fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.close_theme_selector(),
        _ => {}
    }
}
