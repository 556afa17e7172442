//! 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! Board Store 只会产生 `Validation` / `NotFound` / `Storage` 三类错误，
//! 其余变体属于外层 CLI / TUI（配置文件、导出文件、终端 I/O）。

use std::io;
use thiserror::Error;

/// 错误类型
#[derive(Debug, Error)]
pub enum BoardError {
    /// 调用方传入的数据不合法（空标题、空列名等）
    #[error("Validation error: {0}")]
    Validation(String),

    /// 引用的 task / column 不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 存储层事务失败（I/O、约束冲突等），事务已整体回滚
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// I/O 错误（导出文件、终端等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BoardError>;

impl BoardError {
    /// 创建 Validation 错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 错误是否发生在存储层
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
