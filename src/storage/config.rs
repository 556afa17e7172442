//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{data_dir, load_toml, save_toml};
use crate::error::{BoardError, Result};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 数据库文件路径（为空则使用 ~/.todo-board/todo.db）
    #[serde(default)]
    pub path: Option<String>,
    /// 等待写锁的最长时间，超时立即失败
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    2000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    /// 解析数据库路径，`~/` 前缀展开为 home 目录
    pub fn resolve_path(&self) -> PathBuf {
        match self.path.as_deref() {
            Some(p) if !p.trim().is_empty() => expand_home(p.trim()),
            _ => super::default_db_path(),
        }
    }
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// 导出目录（为空则使用当前目录）
    #[serde(default)]
    pub dir: Option<String>,
}

impl ExportConfig {
    pub fn resolve_dir(&self) -> PathBuf {
        match self.dir.as_deref() {
            Some(d) if !d.trim().is_empty() => expand_home(d.trim()),
            _ => PathBuf::from("."),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// tracing 过滤表达式，如 "info" / "todo=debug"
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// 加载配置；出错时回退到默认值，并把错误交给调用方报告
/// （日志此时尚未初始化）
pub fn load_config() -> (Config, Option<BoardError>) {
    or_default(load_config_from(&config_path()))
}

fn or_default(loaded: Result<Config>) -> (Config, Option<BoardError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

/// 从指定路径加载配置；文件缺失时返回默认值，格式错误时返回错误，
/// 由调用方在日志初始化后报告并回退到默认值
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_toml(path).map_err(|e| BoardError::config(format!("{}: {}", path.display(), e)))
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}
