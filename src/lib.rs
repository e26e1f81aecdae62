//! NameChanger - 一个最小的 gRPC 示例服务
//!
//! 提供两个一元调用：
//!
//! - **Reverse**: 反转 name
//! - **CharReplace**: 把 name 中的每个 `'i'` 替换为 chara 的第一个字符
//!
//! ## 模块
//!
//! - **proto**: tonic-prost-build 生成的消息、客户端和服务端代码
//! - **service**: 变换函数和 `NameChanger` trait 的实现
//! - **server**: 服务端点生命周期（启动、优雅停机、等待终止）和信号处理
//! - **cfg**: 配置加载（JSON/YAML/TOML）
//! - **log**: 基于 tracing 的日志初始化
//! - **error**: 错误类型
//!
//! ## 示例
//!
//! ```rust,no_run
//! use namechanger::server::{install_shutdown_hook, Endpoint, EndpointConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let endpoint = Arc::new(Endpoint::start(EndpointConfig::default()).await?);
//!     install_shutdown_hook(Arc::clone(&endpoint));
//!     endpoint.await_termination().await;
//!     Ok(())
//! }
//! ```

pub mod cfg;
pub mod error;
pub mod log;
pub mod proto;
pub mod server;
pub mod service;

pub use error::{EndpointError, ServiceError};
pub use server::{Endpoint, EndpointConfig, EndpointState};
pub use service::NameChangerService;
