//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态，包括主题、颜色、Toast 和主题选择器。

use std::time::{Duration, Instant};

use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Auto 模式下检测系统主题的最小间隔
const THEME_CHECK_INTERVAL: Duration = Duration::from_secs(2);

/// Toast 类型：普通提示或操作失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            ..Self::new(message, duration)
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 状态栏最近一条消息（Toast 过期后仍保留）
    pub last_message: Option<String>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
    /// 上次检测时间
    last_theme_check: Instant,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme, colors: ThemeColors, last_system_dark: bool) -> Self {
        Self {
            toast: None,
            last_message: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            last_theme_check: Instant::now(),
        }
    }

    /// 显示 Toast 消息，同时记入状态栏
    pub fn show_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.last_message = Some(message.clone());
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 显示错误 Toast（被拒绝或失败的操作）
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.last_message = Some(message.clone());
        self.toast = Some(Toast::error(message, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 切换主题选择器显示状态
    pub fn toggle_theme_selector(&mut self) {
        self.show_theme_selector = !self.show_theme_selector;
        if self.show_theme_selector {
            // 找到当前主题的索引
            let themes = Theme::all();
            self.theme_selector_index = themes.iter().position(|t| t == &self.theme).unwrap_or(0);
        }
    }

    /// 选择器上移（循环）
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + len - 1) % len;
    }

    /// 选择器下移（循环）
    pub fn theme_selector_next(&mut self) {
        self.theme_selector_index = (self.theme_selector_index + 1) % Theme::all().len();
    }

    /// 当前选择器指向的主题
    pub fn selected_theme(&self) -> Theme {
        Theme::all()
            .get(self.theme_selector_index)
            .copied()
            .unwrap_or_default()
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme, colors: ThemeColors) {
        self.theme = theme;
        self.colors = colors;
    }

    /// Auto 模式下跟随系统深浅色切换，返回是否发生了变化
    pub fn sync_system_theme(&mut self) -> bool {
        if self.theme != Theme::Auto || self.last_theme_check.elapsed() < THEME_CHECK_INTERVAL {
            return false;
        }
        self.last_theme_check = Instant::now();
        let dark = detect_system_theme();
        if dark == self.last_system_dark {
            return false;
        }
        self.last_system_dark = dark;
        self.colors = get_theme_colors(Theme::Auto);
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
