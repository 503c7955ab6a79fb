use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// 日志级别
///
/// 名称与数值一一对应，数值严格递增。`Notset` 只作为阈值使用，表示不过滤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum Level {
    #[default]
    Notset = 0,
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
    Fatal = 60,
}

impl Level {
    /// 全部级别，按数值升序排列
    pub const ALL: [Level; 7] = [
        Level::Notset,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Fatal,
    ];

    /// 级别对应的数值
    pub fn value(self) -> u32 {
        self as u32
    }

    /// 级别对应的小写名称
    pub fn name(self) -> &'static str {
        match self {
            Level::Notset => "notset",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::Fatal => "fatal",
        }
    }

    /// 按数值反查级别，不在注册表中的数值返回 `None`
    pub fn from_value(value: u32) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.value() == value)
    }

    /// 按名称反查级别（区分大小写），未知名称返回 `None`
    pub fn from_name(name: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.name() == name)
    }
}

/// 数值 → 名称
pub fn name_of(value: u32) -> Option<&'static str> {
    Level::from_value(value).map(Level::name)
}

/// 名称 → 数值
pub fn value_of(name: &str) -> Option<u32> {
    Level::from_name(name).map(Level::value)
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s).ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_values() {
        let values: Vec<u32> = Level::ALL.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![0, 10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_ranks_strictly_ascending() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_name_value_round_trip() {
        for level in Level::ALL {
            let value = value_of(level.name()).unwrap();
            assert_eq!(name_of(value), Some(level.name()));
        }
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(name_of(15), None);
        assert_eq!(name_of(70), None);
        assert_eq!(value_of("warn"), None);
        assert_eq!(value_of("INFO"), None);
    }

    #[test]
    fn test_parse_and_display() {
        let level: Level = "critical".parse().unwrap();
        assert_eq!(level, Level::Critical);
        assert_eq!(level.to_string(), "critical");
        assert!("verbose".parse::<Level>().is_err());
    }
}
