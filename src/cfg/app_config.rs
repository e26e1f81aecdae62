use anyhow::{Context, Result};
use serde::Deserialize;

use super::source::ConfigSource;
use crate::log::LogConfig;
use crate::server::EndpointConfig;

/// 服务进程的完整配置
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 50051
///   drain_timeout: 30s
/// log:
///   level: info
///   format: text
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: EndpointConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// 从配置源加载，缺省字段使用默认值
    pub fn load(source: &dyn ConfigSource, key: &str) -> Result<Self> {
        source
            .load(key)?
            .into_type()
            .with_context(|| format!("配置格式错误: {}", key))
    }
}
