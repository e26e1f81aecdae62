//! 日志模块
//!
//! 基于 tracing / tracing-subscriber，支持文本和 JSON 两种格式，日志统一输出到 stderr
//!
//! ```rust,no_run
//! use namechanger::log::{self, LogConfig};
//!
//! log::init(&LogConfig::default()).unwrap();
//! tracing::info!("Server started");
//! ```

pub mod level;
pub mod subscriber;

pub use level::LogLevel;
pub use subscriber::{init, LogConfig, LogFormat};
