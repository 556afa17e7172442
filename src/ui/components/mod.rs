/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

pub mod column;
pub mod confirm_dialog;
pub mod dialog_utils;
pub mod help_panel;
pub mod input_dialog;
pub mod status_bar;
pub mod task_detail;
pub mod theme_selector;
pub mod toast;
