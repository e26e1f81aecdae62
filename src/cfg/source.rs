//! 配置源抽象

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// 配置值包装，提供类型转换能力
///
/// # 示例
/// ```no_run
/// use namechanger::cfg::{AppConfig, ConfigSource, FileSource, FileSourceConfig};
///
/// let source = FileSource::new(FileSourceConfig {
///     base_path: "configs".to_string(),
/// });
///
/// let config: AppConfig = source.load("namechanger").unwrap().into_type().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigValue(pub JsonValue);

impl ConfigValue {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// 转换为指定类型（消费 self）
    pub fn into_type<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.0)?)
    }

    /// 获取内部的 JsonValue 引用
    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }
}

/// 配置来源抽象
pub trait ConfigSource: Send + Sync {
    /// 按 key 加载配置
    fn load(&self, key: &str) -> Result<ConfigValue>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Listen {
        host: String,
        port: u16,
    }

    #[test]
    fn test_config_value_into_type() {
        let value = ConfigValue::new(serde_json::json!({"host": "127.0.0.1", "port": 50051}));
        assert_eq!(value.as_value()["port"], 50051);

        let listen: Listen = value.into_type().unwrap();
        assert_eq!(
            listen,
            Listen {
                host: "127.0.0.1".to_string(),
                port: 50051
            }
        );
    }

    #[test]
    fn test_config_value_into_type_mismatch() {
        let value = ConfigValue::new(serde_json::json!({"host": "127.0.0.1", "port": "abc"}));
        assert!(value.into_type::<Listen>().is_err());
    }
}
