//! cfg 模块 - 配置管理
//!
//! 从文件加载配置（JSON/YAML/TOML），并反序列化为带默认值的配置结构

pub mod app_config;
pub mod file_source;
pub mod serde_duration;
pub mod source;

pub use app_config::AppConfig;
pub use file_source::{FileSource, FileSourceConfig};
pub use source::{ConfigSource, ConfigValue};
