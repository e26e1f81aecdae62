use super::level::LogLevel;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 单行可读文本
    #[default]
    Text,
    /// 每行一个 JSON 对象
    Json,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// 日志级别: "trace", "debug", "info", "warn", "error"
    ///
    /// 设置了 RUST_LOG 环境变量时以 RUST_LOG 为准
    #[default = "info"]
    pub level: String,

    pub format: LogFormat,

    /// 是否输出 target（模块路径）
    #[default = true]
    pub with_target: bool,
}

impl LogConfig {
    pub fn level(&self) -> Result<LogLevel> {
        self.level.parse::<LogLevel>().map_err(|e| anyhow!(e))
    }
}

/// 保证全局 subscriber 只被初始化一次
static INIT_ONCE: OnceLock<Result<()>> = OnceLock::new();

/// 初始化全局 tracing subscriber，日志输出到 stderr
///
/// 多次调用只会初始化一次，后续调用返回第一次初始化的结果
pub fn init(config: &LogConfig) -> Result<()> {
    INIT_ONCE
        .get_or_init(|| init_inner(config))
        .as_ref()
        .map_err(|e| anyhow!("{}", e))
        .copied()
}

fn init_inner(config: &LogConfig) -> Result<()> {
    let level = tracing::Level::from(config.level()?);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    match config.format {
        LogFormat::Text => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("初始化日志失败: {}", e))
}
