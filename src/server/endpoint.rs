//! 服务端点
//!
//! 绑定端口、注册 NameChanger 服务、接收请求，并支持优雅停机：
//!
//! ```text
//! Stopped --start--> Listening --stop--> Draining --> Stopped
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tonic::transport::server::TcpIncoming;
use tonic::transport::Server;
use tower_http::trace::TraceLayer;

use crate::cfg::serde_duration::{serde_as, HumanDur};
use crate::error::EndpointError;
use crate::proto::{NameChanger, NameChangerServer};
use crate::service::NameChangerService;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 50051;

/// 服务端点配置
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, SmartDefault, Validate, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// 监听地址
    #[default = "0.0.0.0"]
    #[garde(length(min = 1))]
    pub host: String,

    /// 监听端口，范围 1-65535
    #[default(DEFAULT_PORT)]
    #[garde(range(min = 1))]
    pub port: u16,

    /// 停机时等待进行中请求完成的最长时间，None 表示一直等待
    #[serde_as(as = "Option<HumanDur>", no_default)]
    #[default(Some(Duration::from_secs(30)))]
    #[garde(skip)]
    pub drain_timeout: Option<Duration>,
}

/// 端点生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointState {
    Stopped,
    Listening,
    Draining,
}

/// gRPC 服务端点
///
/// `start` 返回时端口已经绑定，服务在后台任务中运行。
/// Endpoint 被 drop 时停机信号随之触发，后台服务会优雅退出并释放端口
pub struct Endpoint {
    local_addr: SocketAddr,
    drain_timeout: Option<Duration>,
    state: Arc<watch::Sender<EndpointState>>,
    shutdown: Mutex<Option<oneshot::Sender<()>>>,
    server: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

impl Endpoint {
    /// 使用默认的 NameChangerService 启动端点
    pub async fn start(config: EndpointConfig) -> Result<Self, EndpointError> {
        Self::start_with(config, NameChangerService::new()).await
    }

    /// 使用指定的 NameChanger 实现启动端点
    ///
    /// 端口无效或绑定失败时返回绑定错误，不会留下已绑定的 socket
    pub async fn start_with<T: NameChanger>(
        config: EndpointConfig,
        service: T,
    ) -> Result<Self, EndpointError> {
        if config.port == 0 {
            return Err(EndpointError::InvalidPort { port: config.port });
        }
        config
            .validate()
            .map_err(|e| EndpointError::InvalidConfig(e.to_string()))?;

        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .map_err(|e| EndpointError::bind(&addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| EndpointError::bind(&addr, e))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (state, _) = watch::channel(EndpointState::Listening);
        let state = Arc::new(state);

        let router = Server::builder()
            .layer(TraceLayer::new_for_grpc())
            .add_service(NameChangerServer::new(service));

        let server_state = Arc::clone(&state);
        let server = tokio::spawn(async move {
            // 停机信号或 Endpoint 被 drop 都会触发优雅退出
            let signal = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = router
                .serve_with_incoming_shutdown(TcpIncoming::from(listener), signal)
                .await
            {
                tracing::error!(addr = %local_addr, error = %e, "gRPC 服务异常退出");
            }
            server_state.send_replace(EndpointState::Stopped);
        });

        tracing::info!("Server started, listening on {}", local_addr);

        Ok(Self {
            local_addr,
            drain_timeout: config.drain_timeout,
            state,
            shutdown: Mutex::new(Some(shutdown_tx)),
            server: tokio::sync::Mutex::new(Some(server)),
        })
    }

    /// 实际绑定的地址
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> EndpointState {
        *self.state.borrow()
    }

    /// 停止接收新请求，等待进行中的请求完成后释放端口
    ///
    /// 可重复调用，已停止时直接返回；并发调用时后来者等待第一次 stop 完成
    pub async fn stop(&self) {
        let trigger = match self.shutdown.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(trigger) = trigger else {
            self.await_termination().await;
            return;
        };

        self.state.send_if_modified(|state| {
            if *state == EndpointState::Listening {
                *state = EndpointState::Draining;
                true
            } else {
                false
            }
        });
        tracing::info!(addr = %self.local_addr, "停止接收新请求，等待进行中的请求完成");
        let _ = trigger.send(());

        let server = self.server.lock().await.take();
        if let Some(mut server) = server {
            match self.drain_timeout {
                Some(timeout) => {
                    if tokio::time::timeout(timeout, &mut server).await.is_err() {
                        tracing::warn!(?timeout, "等待进行中的请求超时，强制关闭服务");
                        server.abort();
                        let _ = server.await;
                    }
                }
                None => {
                    let _ = server.await;
                }
            }
        }

        self.state.send_replace(EndpointState::Stopped);
        tracing::info!(addr = %self.local_addr, "服务已停止");
    }

    /// 阻塞直到端点完全停止
    pub async fn await_termination(&self) {
        let mut state = self.state.subscribe();
        let _ = state
            .wait_for(|state| *state == EndpointState::Stopped)
            .await;
    }
}
