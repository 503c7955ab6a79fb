use std::io;

use crate::config::ConfigError;

/// 日志库错误类型
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("写入失败: {0}")]
    Io(#[from] io::Error),
    #[error("未知的日志级别: {0}")]
    UnknownLevel(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, LogError>;
