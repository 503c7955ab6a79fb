//! # plainlog
//!
//! 最小的分级日志库：
//! - 固定的级别注册表（`notset` .. `fatal`，数值 0..60）
//! - 按阈值过滤，输出 Ruby `Logger` 风格的带时间戳文本行
//! - 输出目标为任意 `std::io::Write`，默认标准错误
//!
//! ```
//! use plainlog::{create_with_level, Level};
//!
//! let mut logger = create_with_level(Vec::new(), "info", None)?;
//! logger.debug(&[&"dropped"])?;
//! logger.info(&[&"a", &"b", &3])?;
//!
//! let out = String::from_utf8(logger.into_sink()).unwrap();
//! assert!(out.ends_with("    INFO -- : a,b,3\n"));
//! assert_eq!(Level::Info.value(), 20);
//! # Ok::<(), plainlog::LogError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logger;
pub mod sink;

pub use config::{
    configured_logger, get_config, init_config, init_config_from, Config, ConfigError, LoggerConfig,
    Output,
};
pub use error::{LogError, Result};
pub use format::{default_formatter, format_log, pad, pad_default, Formatter};
pub use global::default_logger;
pub use level::{name_of, value_of, Level};
pub use logger::{create, create_with_formatter, create_with_level, join_args, Logger};
pub use sink::LockedFileSink;
