use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Display;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, info};

use plainlog::{config, diagnostics::init_diagnostics, Level};

#[derive(Parser)]
#[command(name = "plog")]
#[command(about = "把参数或标准输入逐行写成分级日志")]
struct Args {
    /// 配置文件路径，不指定时按默认路径查找
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 每条记录使用的级别
    #[arg(short, long, default_value = "info")]
    level: Level,

    /// 覆盖配置中的阈值
    #[arg(short, long)]
    threshold: Option<Level>,

    /// 要记录的内容，多个参数以逗号拼接为一条记录；为空时读取标准输入
    messages: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化诊断日志
    init_diagnostics("warn").map_err(|e| anyhow::anyhow!(e))?;

    // 初始化配置系统
    match &args.config {
        Some(path) => config::init_config_from(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => config::init_config()?,
    }

    let mut logger = config::configured_logger()?;
    if let Some(threshold) = args.threshold {
        logger.set_level(threshold);
    }
    info!(level = %args.level, threshold = logger.level(), "plog 启动");

    let level = args.level.value();
    if !args.messages.is_empty() {
        let values: Vec<&dyn Display> = args.messages.iter().map(|m| m as &dyn Display).collect();
        logger.log(level, &values)?;
        return Ok(());
    }

    let mut count = 0usize;
    for line in io::stdin().lock().lines() {
        let line = line.context("读取标准输入失败")?;
        logger.log(level, &[&line])?;
        count += 1;
    }

    debug!("共处理 {} 行", count);
    Ok(())
}
