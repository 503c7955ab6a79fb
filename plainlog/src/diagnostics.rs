use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 覆盖诊断过滤规则的环境变量
pub const DIAG_ENV: &str = "PLAINLOG_DIAG";

/// 初始化诊断日志
///
/// plainlog 自身的活动（加载配置、打开日志文件等）通过 `tracing` 报告，
/// 这里安装一个输出到标准输出的 fmt 层，避免和写入标准错误的日志行混在一起。
///
/// 过滤规则优先取环境变量 `PLAINLOG_DIAG`，否则使用 `default_filter`。
///
/// # 示例
/// ```no_run
/// use plainlog::diagnostics::init_diagnostics;
///
/// init_diagnostics("warn")?;
/// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
/// ```
pub fn init_diagnostics(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(DIAG_ENV).or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
