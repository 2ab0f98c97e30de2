//! 日誌初始化

use crate::config::LogConfig;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// 將配置中的日誌級別轉換為 tracing 級別
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // 默認為INFO
    }
}

/// 初始化全局日誌系統
///
/// 配置級別作為預設過濾條件，`RUST_LOG` 存在時以其為準。
/// 已經設置過全局訂閱者時返回錯誤。
pub fn init_logging(log_config: &LogConfig) -> Result<(), SetGlobalDefaultError> {
    let level = parse_level(&log_config.level);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let builder = FmtSubscriber::builder().with_env_filter(filter);
    if log_config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    }
}
