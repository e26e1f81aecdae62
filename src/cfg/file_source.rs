//! 文件配置源
//!
//! 支持从本地文件系统加载配置，支持 JSON/YAML/TOML 格式

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::PathBuf;

use super::source::{ConfigSource, ConfigValue};

/// 文件配置源的配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileSourceConfig {
    /// 配置文件所在目录
    pub base_path: String,
}

/// 文件配置源
///
/// 按 `<base_path>/<key>.<ext>` 查找配置文件，根据扩展名选择解析器
pub struct FileSource {
    base_path: PathBuf,
}

impl FileSource {
    pub fn new(config: FileSourceConfig) -> Self {
        Self {
            base_path: config.base_path.into(),
        }
    }

    /// 查找存在的配置文件，按 json、yaml、yml、toml 的顺序
    fn find_config_file(&self, key: &str) -> Result<(PathBuf, &'static str)> {
        ["json", "yaml", "yml", "toml"]
            .into_iter()
            .map(|ext| (self.base_path.join(format!("{}.{}", key, ext)), ext))
            .find(|(path, _)| path.exists())
            .ok_or_else(|| {
                anyhow!(
                    "配置文件不存在: {}/{}.{{json,yaml,yml,toml}}",
                    self.base_path.display(),
                    key
                )
            })
    }

    fn parse_config(content: &str, ext: &str) -> Result<JsonValue> {
        match ext {
            "json" => Ok(serde_json::from_str(content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
            "toml" => Ok(toml::from_str(content)?),
            _ => Err(anyhow!("不支持的文件格式: {}", ext)),
        }
    }
}

impl From<FileSourceConfig> for FileSource {
    fn from(config: FileSourceConfig) -> Self {
        FileSource::new(config)
    }
}

impl ConfigSource for FileSource {
    fn load(&self, key: &str) -> Result<ConfigValue> {
        let (path, ext) = self.find_config_file(key)?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let value = Self::parse_config(&content, ext)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(ConfigValue::new(value))
    }
}
