//! 日志初始化
//!
//! TUI 占用了 stdout/stderr，所以日志写入 ~/.todo-board/todo.log。
//! 过滤表达式优先级：`TODO_LOG` 环境变量 > 配置文件 `[log] filter` > "info"。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{BoardError, Result};
use crate::storage;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "TODO_LOG";

/// 默认日志文件路径
pub fn log_path() -> PathBuf {
    storage::data_dir().join("todo.log")
}

/// 选出生效的过滤表达式
pub fn resolve_filter(env_value: Option<&str>, configured: &str) -> String {
    env_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| Some(configured.trim()).filter(|v| !v.is_empty()))
        .unwrap_or("info")
        .to_string()
}

/// 初始化全局 subscriber，日志追加写入 `path`
pub fn init(path: &Path, configured_filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_value = std::env::var(LOG_ENV).ok();
    let filter = resolve_filter(env_value.as_deref(), configured_filter);
    let env_filter = EnvFilter::try_new(&filter)
        .map_err(|e| BoardError::config(format!("invalid log filter '{}': {}", filter, e)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| BoardError::config(format!("failed to init logging: {}", e)))?;

    tracing::debug!(filter = %filter, "logging initialized");
    Ok(())
}
