//! 默认格式化器
//!
//! 输出与 Ruby `Logger` 相同布局的单行文本：
//!
//! ```text
//! I, [2024-01-05 07:08:09.004]     INFO -- : hello
//! ```

use chrono::{DateTime, Datelike, Local, Timelike};
use std::fmt::Display;

/// 格式化函数：(时间, 级别名称, 消息) -> 输出行
pub type Formatter = Box<dyn Fn(&DateTime<Local>, &str, &str) -> String + Send + Sync>;

/// 左侧填充
///
/// 文本长度（按字符计）不小于 `width` 时原样返回，否则在左侧补 `pad_char` 直到恰好 `width` 个字符。
/// 时间字段的补零和级别字段的补空格共用这一个函数。
pub fn pad(value: impl Display, width: usize, pad_char: char) -> String {
    let text = value.to_string();
    let len = text.chars().count();
    if len >= width {
        return text;
    }

    let mut padded = String::with_capacity(text.len() + (width - len) * pad_char.len_utf8());
    padded.extend(std::iter::repeat(pad_char).take(width - len));
    padded.push_str(&text);
    padded
}

/// 使用默认参数（宽度 2，补 `'0'`）填充
pub fn pad_default(value: impl Display) -> String {
    pad(value, 2, '0')
}

/// 按默认布局格式化一条日志
///
/// `level` 以小写名称传入；首字母字段与 8 位对齐的级别字段都转为大写。
pub fn format_log<D: Datelike + Timelike>(date: &D, level: &str, msg: &str) -> String {
    let initial: String = level.chars().take(1).flat_map(char::to_uppercase).collect();

    let timestamp = format!(
        "{}-{}-{} {}:{}:{}.{}",
        date.year(),
        pad(date.month(), 2, '0'),
        pad(date.day(), 2, '0'),
        pad(date.hour(), 2, '0'),
        pad(date.minute(), 2, '0'),
        pad(date.second(), 2, '0'),
        // 闰秒时 nanosecond() >= 1_000_000_000
        pad((date.nanosecond() % 1_000_000_000) / 1_000_000, 3, '0'),
    );

    format!(
        "{}, [{}] {} -- : {}\n",
        initial,
        timestamp,
        pad(level.to_uppercase(), 8, ' '),
        msg
    )
}

/// 默认格式化器
pub fn default_formatter() -> Formatter {
    Box::new(|date, level, msg| format_log(date, level, msg))
}
