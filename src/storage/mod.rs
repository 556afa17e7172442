pub mod board;
pub mod config;
pub mod schema;

use std::path::{Path, PathBuf};

/// 数据目录的环境变量覆盖
pub const HOME_ENV: &str = "TODO_BOARD_HOME";

/// 获取 ~/.todo-board/ 目录路径
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".todo-board")
}

/// 默认数据库路径: ~/.todo-board/todo.db
pub fn default_db_path() -> PathBuf {
    data_dir().join("todo.db")
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> crate::error::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> crate::error::Result<()> {
    let content = toml::to_string_pretty(data)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
