use chrono::{DateTime, Local};
use std::fmt::{self, Display};
use std::io::{self, Stderr, Write};

use crate::error::{LogError, Result};
use crate::format::{default_formatter, Formatter};
use crate::level::{self, Level};

/// 数值不在级别注册表中时传给格式化器的级别名称
pub const UNDEFINED_LEVEL: &str = "undefined";

/// 参数之间的分隔符
pub const ARG_SEPARATOR: &str = ",";

/// 把参数按 `,` 拼接成消息文本，每个参数使用 `Display` 转换，不额外加空格
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut text = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            text.push_str(ARG_SEPARATOR);
        }
        text.push_str(&arg.to_string());
    }
    text
}

/// 分级日志记录器
///
/// 持有输出目标、最低级别阈值和格式化函数。低于阈值的记录直接丢弃，
/// 不调用格式化器也不写入。
pub struct Logger<W: Write = Stderr> {
    sink: W,
    level: u32,
    formatter: Formatter,
}

impl<W: Write> Logger<W> {
    /// 使用默认阈值 `notset` 和默认格式化器创建
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            level: Level::Notset.value(),
            formatter: default_formatter(),
        }
    }

    /// 设置阈值
    pub fn with_level(mut self, level: impl Into<u32>) -> Self {
        self.level = level.into();
        self
    }

    /// 设置格式化器
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&DateTime<Local>, &str, &str) -> String + Send + Sync + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    /// 当前阈值
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: impl Into<u32>) {
        self.level = level.into();
    }

    pub fn set_formatter(&mut self, formatter: Formatter) {
        self.formatter = formatter;
    }

    /// 指定级别的记录是否会被输出
    pub fn is_enabled(&self, level: impl Into<u32>) -> bool {
        level.into() >= self.level
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// 通用日志方法
    ///
    /// `level >= 阈值` 时拼接参数、取当前时间、解析级别名称、格式化并写入输出目标。
    /// 写入失败原样返回给调用方。
    pub fn log(&mut self, level: u32, args: &[&dyn Display]) -> io::Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let text = join_args(args);
        let name = level::name_of(level).unwrap_or(UNDEFINED_LEVEL);
        let output = (self.formatter)(&Local::now(), name, &text);
        self.sink.write_all(output.as_bytes())
    }

    pub fn debug(&mut self, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Level::Debug.value(), args)
    }

    pub fn info(&mut self, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Level::Info.value(), args)
    }

    pub fn warning(&mut self, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Level::Warning.value(), args)
    }

    pub fn error(&mut self, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Level::Error.value(), args)
    }

    pub fn critical(&mut self, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Level::Critical.value(), args)
    }

    pub fn fatal(&mut self, args: &[&dyn Display]) -> io::Result<()> {
        self.log(Level::Fatal.value(), args)
    }
}

impl Default for Logger<Stderr> {
    /// 写入标准错误，阈值 `notset`
    fn default() -> Self {
        Logger::new(io::stderr())
    }
}

impl<W: Write> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// 创建阈值为 `notset`、使用默认格式化器的记录器
pub fn create<W: Write>(sink: W) -> Logger<W> {
    Logger::new(sink)
}

/// 创建阈值为 `notset`、使用指定格式化器的记录器
pub fn create_with_formatter<W, F>(sink: W, formatter: F) -> Logger<W>
where
    W: Write,
    F: Fn(&DateTime<Local>, &str, &str) -> String + Send + Sync + 'static,
{
    Logger::new(sink).with_formatter(formatter)
}

/// 按级别名称创建记录器
///
/// 名称通过级别注册表解析，空名称视为 `notset`，其他未知名称返回 [`LogError::UnknownLevel`]。
/// `formatter` 为 `None` 时使用默认格式化器。
pub fn create_with_level<W: Write>(
    sink: W,
    level: &str,
    formatter: Option<Formatter>,
) -> Result<Logger<W>> {
    let name = if level.is_empty() { Level::Notset.name() } else { level };
    let value = level::value_of(name).ok_or_else(|| LogError::UnknownLevel(level.to_string()))?;

    let mut logger = Logger::new(sink).with_level(value);
    if let Some(formatter) = formatter {
        logger.set_formatter(formatter);
    }
    Ok(logger)
}
