//! TUI 应用状态
//!
//! 把按键动作翻译成 BoardStore 调用。失败的操作只变成一条 Toast 和一条日志，
//! 随后重新加载看板，界面始终反映库里的真实状态。

use std::path::PathBuf;

use chrono::Local;

use crate::board_view::{BoardView, MoveIntent};
use crate::dialogs::{ConfirmType, DialogState, InputDialogData, InputKind};
use crate::error::{BoardError, Result};
use crate::model::{NewTask, TaskUpdate};
use crate::operations::export;
use crate::storage::board::BoardStore;
use crate::storage::config::{self, Config};
use crate::theme::{detect_system_theme, get_theme_colors, Theme};
use crate::ui_state::UiState;

/// 悬浮期间拒绝其他操作时的提示
pub const FINISH_MOVE_FIRST: &str = "Finish moving first (Enter or Esc)";

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 看板视图
    pub view: BoardView,
    /// UI 状态（主题、Toast）
    pub ui: UiState,
    /// 对话框状态
    pub dialogs: DialogState,
    store: BoardStore,
    config: Config,
    /// 主题保存位置，为空时不落盘
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(store: BoardStore, config: Config, config_path: Option<PathBuf>) -> Result<Self> {
        let theme = Theme::from_name(&config.theme.name);
        let ui = UiState::new(theme, get_theme_colors(theme), detect_system_theme());
        let view = BoardView::new(store.list_board()?);

        Ok(Self {
            should_quit: false,
            view,
            ui,
            dialogs: DialogState::new(),
            store,
            config,
            config_path,
        })
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 重新加载看板
    pub fn refresh(&mut self) {
        match self.store.list_board() {
            Ok(board) => self.view.reload(board),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load board");
                self.ui.show_error(e.to_string());
            }
        }
    }

    /// `r` 键
    pub fn reload(&mut self) {
        self.refresh();
        self.ui.show_toast("Reloaded");
    }

    /// 更新 Toast 状态
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// Auto 模式下跟随系统主题
    pub fn check_system_theme(&mut self) {
        self.ui.sync_system_theme();
    }

    fn report(&mut self, action: &str, err: BoardError) {
        if err.is_storage() {
            tracing::error!(action, error = %err, "board operation failed");
        } else {
            tracing::warn!(action, error = %err, "board operation rejected");
        }
        self.ui.show_error(err.to_string());
        self.refresh();
    }

    /// 悬浮中返回 false 并提示
    fn ensure_not_floating(&mut self) -> bool {
        if self.view.is_floating() {
            self.ui.show_toast(FINISH_MOVE_FIRST);
            return false;
        }
        true
    }

    // ========== 拿起 / 放下 ==========

    /// Enter：没有悬浮任务时拿起，否则放下
    pub fn pick_up_or_place(&mut self) {
        if self.view.is_floating() {
            let title = self
                .view
                .floating()
                .map(|f| f.task.title.clone())
                .unwrap_or_default();
            match self.view.place() {
                Some(intent) => self.apply_move(intent, &title),
                None => self.ui.show_toast("Not moved"),
            }
        } else if self.view.pick_up() {
            if let Some(task) = self.view.selected_task() {
                let message = format!("Moving '{}'", task.title);
                self.ui.show_toast(message);
            }
        } else {
            self.ui.show_toast("No task to move");
        }
    }

    fn apply_move(&mut self, intent: MoveIntent, title: &str) {
        let result = self.store.move_task(
            intent.task_id,
            intent.target_column_id,
            Some(intent.target_position),
        );
        match result {
            Ok(task) => {
                self.refresh();
                self.view.select_task(task.id);
                let column = self
                    .view
                    .current_column()
                    .map(|c| c.column.name.clone())
                    .unwrap_or_default();
                self.ui
                    .show_toast(format!("Moved '{}' → {} #{}", title, column, task.position + 1));
            }
            Err(e) => self.report("move", e),
        }
    }

    /// Esc：取消移动，不访问存储
    pub fn cancel_move(&mut self) {
        if self.view.cancel() {
            self.ui.show_toast("Move cancelled");
        }
    }

    // ========== 新建 / 编辑 / 删除 ==========

    pub fn open_add_dialog(&mut self) {
        if !self.ensure_not_floating() {
            return;
        }
        if let Some(column) = self.view.current_column() {
            self.dialogs.input_dialog = Some(InputDialogData::add_task(
                column.column.id,
                column.column.name.clone(),
            ));
        }
    }

    pub fn open_edit_dialog(&mut self) {
        if !self.ensure_not_floating() {
            return;
        }
        match self.view.selected_task() {
            Some(task) => {
                self.dialogs.input_dialog = Some(InputDialogData::edit_title(task.id, task.title.clone()));
            }
            None => self.ui.show_toast("No task selected"),
        }
    }

    pub fn close_input_dialog(&mut self) {
        self.dialogs.input_dialog = None;
    }

    /// 提交输入框，空输入保持弹窗打开
    pub fn submit_input(&mut self) {
        let Some(data) = self.dialogs.input_dialog.as_ref() else {
            return;
        };
        let Some(value) = data.value().map(str::to_string) else {
            self.ui.show_error("Title must not be empty");
            return;
        };
        let kind = data.kind.clone();
        self.dialogs.input_dialog = None;

        match kind {
            InputKind::AddTask { column_id, .. } => {
                match self.store.create_task(NewTask::new(value, column_id)) {
                    Ok(task) => {
                        self.refresh();
                        self.view.select_task(task.id);
                        self.ui
                            .show_toast(format!("Added task [{}] {}", task.id, task.title));
                    }
                    Err(e) => self.report("add", e),
                }
            }
            InputKind::EditTitle { task_id } => {
                match self.store.update_task(task_id, &TaskUpdate::title(value)) {
                    Ok(task) => {
                        self.refresh();
                        self.ui.show_toast(format!("Updated task [{}]", task.id));
                    }
                    Err(e) => self.report("edit", e),
                }
            }
        }
    }

    pub fn open_delete_confirm(&mut self) {
        if !self.ensure_not_floating() {
            return;
        }
        match self.view.selected_task() {
            Some(task) => {
                self.dialogs.confirm_dialog = Some(ConfirmType::DeleteTask {
                    task_id: task.id,
                    title: task.title.clone(),
                });
            }
            None => self.ui.show_toast("No task selected"),
        }
    }

    pub fn confirm_dialog_yes(&mut self) {
        let Some(confirm) = self.dialogs.confirm_dialog.take() else {
            return;
        };
        match confirm {
            ConfirmType::DeleteTask { task_id, .. } => match self.store.delete_task(task_id) {
                Ok(task) => {
                    self.refresh();
                    self.ui
                        .show_toast(format!("Deleted task [{}] {}", task.id, task.title));
                }
                Err(e) => self.report("delete", e),
            },
        }
    }

    pub fn confirm_dialog_no(&mut self) {
        self.dialogs.confirm_dialog = None;
    }

    // ========== 导出 ==========

    /// 导出当前列到配置的目录
    pub fn export_current_column(&mut self) {
        if !self.ensure_not_floating() {
            return;
        }
        let Some(column) = self.view.current_column() else {
            return;
        };
        let dir = self.config.export.resolve_dir();
        match export::export_column(column, &dir, Local::now().date_naive()) {
            Ok(result) => self.ui.show_toast(format!(
                "Exported {} tasks to {}",
                result.task_count,
                result.path.display()
            )),
            Err(e) => self.report("export", e),
        }
    }

    // ========== 帮助 / 主题 ==========

    pub fn toggle_help(&mut self) {
        self.dialogs.show_help = !self.dialogs.show_help;
    }

    pub fn open_theme_selector(&mut self) {
        if !self.ui.show_theme_selector {
            self.ui.toggle_theme_selector();
        }
    }

    /// 主题选择器 - 上一个（实时预览）
    pub fn theme_selector_prev(&mut self) {
        self.ui.theme_selector_prev();
        self.ui.colors = get_theme_colors(self.ui.selected_theme());
    }

    /// 主题选择器 - 下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        self.ui.theme_selector_next();
        self.ui.colors = get_theme_colors(self.ui.selected_theme());
    }

    /// 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        let theme = self.ui.selected_theme();
        self.ui.set_theme(theme, get_theme_colors(theme));
        self.ui.show_theme_selector = false;
        self.config.theme.name = theme.label().to_string();

        let saved = match &self.config_path {
            Some(path) => config::save_config_to(path, &self.config),
            None => Ok(()),
        };
        match saved {
            Ok(()) => self.ui.show_toast(format!("Theme: {}", theme.label())),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save theme");
                self.ui.show_error(e.to_string());
            }
        }
    }

    /// 取消选择，恢复原主题颜色
    pub fn close_theme_selector(&mut self) {
        self.ui.show_theme_selector = false;
        self.ui.colors = get_theme_colors(self.ui.theme);
    }
}
