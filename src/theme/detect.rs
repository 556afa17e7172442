//! 系统主题检测

use std::process::Command;

/// 检测系统是否处于深色模式
///
/// macOS 通过 `defaults` 读取 AppleInterfaceStyle；其他系统读取
/// `COLORFGBG`（如 "15;0"，背景色号 < 8 视为深色），都读不到时按深色处理。
pub fn detect_system_theme() -> bool {
    if cfg!(target_os = "macos") {
        return Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false);
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| parse_colorfgbg(&v))
        .unwrap_or(true)
}

/// 解析 COLORFGBG，返回背景是否为深色
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 8)
}
