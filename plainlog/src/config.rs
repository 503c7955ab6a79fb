use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::error::Result as LogResult;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::LockedFileSink;

/// 全局配置实例
static CONFIG: OnceLock<Config> = OnceLock::new();

/// 默认查找的配置文件路径
pub const CONFIG_PATHS: [&str; 2] = ["plainlog.toml", "./config/plainlog.toml"];

/// plainlog 配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 记录器配置
    #[serde(default)]
    pub logger: LoggerConfig,
}

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
    File,
}

/// 记录器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// 最低输出级别
    pub level: Level,
    /// 输出目标
    pub output: Output,
    /// `output = "file"` 时写入的文件
    pub file_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Notset,
            output: Output::Stderr,
            file_path: PathBuf::from("./logs/plainlog.log"),
        }
    }
}

impl LoggerConfig {
    /// 按配置打开输出目标并创建记录器
    ///
    /// 打开日志文件失败时返回 [`LogError::Io`](crate::LogError::Io)。
    pub fn build_logger(&self) -> LogResult<Logger<Box<dyn Write + Send>>> {
        let sink: Box<dyn Write + Send> = match self.output {
            Output::Stderr => Box::new(io::stderr()),
            Output::Stdout => Box::new(io::stdout()),
            Output::File => Box::new(LockedFileSink::new(self.file_path.clone())?),
        };

        debug!(level = %self.level, output = ?self.output, "创建记录器");
        Ok(Logger::new(sink).with_level(self.level))
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        // 确保目录存在
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logger.output == Output::File && self.logger.file_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output = \"file\" 时 file_path 不能为空".to_string(),
            ));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
    #[error("配置已经初始化")]
    AlreadyInitialized,
    #[error("配置未初始化，请先调用 init_config()")]
    NotInitialized,
}

/// 初始化全局配置
pub fn init_config() -> Result<(), ConfigError> {
    let config = load_config()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    Ok(())
}

/// 用指定文件初始化全局配置
pub fn init_config_from<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    let config = Config::load_from_file(path)?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    Ok(())
}

/// 从文件或默认值加载配置
pub fn load_config() -> Result<Config, ConfigError> {
    // 尝试从配置文件加载
    for path in &CONFIG_PATHS {
        if Path::new(path).exists() {
            info!("从配置文件加载: {}", path);
            return Config::load_from_file(path);
        }
    }

    // 如果没有找到配置文件，使用默认配置
    info!("未找到配置文件，使用默认配置");
    Ok(Config::default())
}

/// 获取全局配置实例
pub fn get_config() -> Result<&'static Config, ConfigError> {
    CONFIG.get().ok_or(ConfigError::NotInitialized)
}

/// 按全局配置创建记录器
///
/// 配置未初始化时返回 [`LogError::Config`](crate::LogError::Config)。
pub fn configured_logger() -> LogResult<Logger<Box<dyn Write + Send>>> {
    get_config()?.logger.build_logger()
}
