mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

use crate::model::Priority;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
        ]
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（详情栏、状态栏）
    pub bg_secondary: Color,
    /// 高亮色（快捷键、选中项等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 光标行前景色（背景使用列强调色）
    pub cursor_fg: Color,
    /// 正在移动的任务
    pub floating: Color,
    /// 信息色 (蓝色)
    pub info: Color,
    /// 警告色 (黄色)
    pub warning: Color,
    /// 错误色 (红色)
    pub error: Color,
    /// 列强调色，按列序号循环使用
    pub column_accents: [Color; 4],
}

impl ThemeColors {
    /// 第 `index` 列的强调色
    pub fn column_accent(&self, index: usize) -> Color {
        self.column_accents[index % self.column_accents.len()]
    }

    /// 优先级对应的文字颜色
    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.muted,
            Priority::Medium => self.text,
            Priority::High => self.error,
        }
    }
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Nord"), Theme::Nord);
        assert_eq!(Theme::from_name("dracula"), Theme::Dracula);
        assert_eq!(Theme::from_name("unknown"), Theme::Auto);
        for theme in Theme::all() {
            assert_eq!(Theme::from_name(theme.label()), *theme);
        }
    }

    #[test]
    fn test_column_accent_wraps() {
        let colors = dark_colors();
        assert_eq!(colors.column_accent(0), colors.column_accent(4));
        assert_ne!(colors.column_accent(0), colors.column_accent(1));
    }

    #[test]
    fn test_priority_colors() {
        let colors = dark_colors();
        assert_eq!(colors.priority(Priority::High), colors.error);
        assert_eq!(colors.priority(Priority::Low), colors.muted);
    }
}
