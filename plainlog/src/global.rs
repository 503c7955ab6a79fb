//! 进程级默认记录器
//!
//! 第一次访问时创建，写入标准错误，阈值 `notset`，进程结束前不会销毁。
//! 需要隔离的调用方应自行构造 [`Logger`]。

use std::fmt::Display;
use std::io::{self, Stderr};
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::logger::Logger;

static DEFAULT_LOGGER: OnceLock<Mutex<Logger<Stderr>>> = OnceLock::new();

/// 获取默认记录器
///
/// 持有返回的锁期间，其他线程对默认记录器的调用会等待。
pub fn default_logger() -> MutexGuard<'static, Logger<Stderr>> {
    let logger = DEFAULT_LOGGER.get_or_init(|| Mutex::new(Logger::default()));
    // 其他线程在持锁时 panic 不影响记录器本身的状态
    logger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn log(level: u32, args: &[&dyn Display]) -> io::Result<()> {
    default_logger().log(level, args)
}

pub fn debug(args: &[&dyn Display]) -> io::Result<()> {
    default_logger().debug(args)
}

pub fn info(args: &[&dyn Display]) -> io::Result<()> {
    default_logger().info(args)
}

pub fn warning(args: &[&dyn Display]) -> io::Result<()> {
    default_logger().warning(args)
}

pub fn error(args: &[&dyn Display]) -> io::Result<()> {
    default_logger().error(args)
}

pub fn critical(args: &[&dyn Display]) -> io::Result<()> {
    default_logger().critical(args)
}

pub fn fatal(args: &[&dyn Display]) -> io::Result<()> {
    default_logger().fatal(args)
}
