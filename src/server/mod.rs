//! server 模块 - 服务端点生命周期和停机信号处理

pub mod endpoint;
pub mod signal;

pub use endpoint::{Endpoint, EndpointConfig, EndpointState, DEFAULT_PORT};
pub use signal::{install_shutdown_hook, install_shutdown_hook_with, shutdown_signal};
