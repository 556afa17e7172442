//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

pub use crate::ui::components::confirm_dialog::ConfirmType;
pub use crate::ui::components::input_dialog::{InputDialogData, InputKind};

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 新建 / 编辑标题输入框
    pub input_dialog: Option<InputDialogData>,
    /// 确认弹窗（删除）
    pub confirm_dialog: Option<ConfirmType>,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_state() {
        let state = DialogState::new();
        assert!(state.input_dialog.is_none());
        assert!(state.confirm_dialog.is_none());
        assert!(!state.show_help);
    }
}
