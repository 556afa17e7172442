//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 详情栏背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        cursor_fg: Color::Black,
        floating: Color::Rgb(255, 121, 198), // 品红（移动中的任务）
        info: Color::Rgb(100, 181, 246),     // 蓝色
        warning: Color::Rgb(255, 213, 79),   // 黄色
        error: Color::Rgb(255, 85, 85),      // 红色
        column_accents: [
            Color::Rgb(110, 198, 215), // cyan - Todo
            Color::Rgb(230, 200, 105), // gold - Doing
            Color::Rgb(130, 205, 145), // mint - Done
            Color::Rgb(185, 148, 225), // lavender
        ],
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 详情栏背景
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        cursor_fg: Color::White,
        floating: Color::Rgb(170, 40, 140),
        info: Color::Rgb(33, 150, 243),   // 蓝色
        warning: Color::Rgb(255, 152, 0), // 橙黄色
        error: Color::Rgb(200, 50, 50),   // 红色
        column_accents: [
            Color::Rgb(0, 131, 143),  // teal
            Color::Rgb(191, 144, 0),  // amber
            Color::Rgb(46, 125, 50),  // green
            Color::Rgb(106, 27, 154), // purple
        ],
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),       // 边框
        cursor_fg: Color::Rgb(40, 42, 54),
        floating: Color::Rgb(189, 147, 249), // 紫色
        info: Color::Rgb(139, 233, 253),     // cyan
        warning: Color::Rgb(241, 250, 140),  // yellow
        error: Color::Rgb(255, 85, 85),      // red
        column_accents: [
            Color::Rgb(139, 233, 253), // cyan
            Color::Rgb(241, 250, 140), // yellow
            Color::Rgb(80, 250, 123),  // green
            Color::Rgb(255, 184, 108), // orange
        ],
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        highlight: Color::Rgb(129, 161, 193), // frost darker
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),       // polar night light
        border: Color::Rgb(59, 66, 82),       // polar night
        cursor_fg: Color::Rgb(46, 52, 64),
        floating: Color::Rgb(180, 142, 173), // aurora purple
        info: Color::Rgb(136, 192, 208),     // frost (蓝色)
        warning: Color::Rgb(235, 203, 139),  // aurora yellow
        error: Color::Rgb(191, 97, 106),     // aurora red
        column_accents: [
            Color::Rgb(136, 192, 208), // frost blue
            Color::Rgb(235, 203, 139), // aurora yellow
            Color::Rgb(163, 190, 140), // aurora green
            Color::Rgb(208, 135, 112), // aurora orange
        ],
    }
}
