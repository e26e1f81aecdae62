//! 进程终止信号处理

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::endpoint::Endpoint;

/// 等待终止信号：Ctrl-C，Unix 下还包括 SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "监听 Ctrl-C 失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "监听 SIGTERM 失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// 注册停机钩子：收到终止信号后停止端点
pub fn install_shutdown_hook(endpoint: Arc<Endpoint>) -> JoinHandle<()> {
    install_shutdown_hook_with(endpoint, shutdown_signal())
}

/// 注册停机钩子，由 `signal` 完成时触发
///
/// 停机过程中 tracing subscriber 的状态不可靠，所以直接写 stderr
pub fn install_shutdown_hook_with<F>(endpoint: Arc<Endpoint>, signal: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        signal.await;
        eprintln!("*** shutting down gRPC server since process is shutting down");
        endpoint.stop().await;
        eprintln!("*** server shut down");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{EndpointConfig, EndpointState};
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_shutdown_hook_stops_endpoint() {
        let config = EndpointConfig {
            host: "127.0.0.1".to_string(),
            port: std::net::TcpListener::bind("127.0.0.1:0")
                .unwrap()
                .local_addr()
                .unwrap()
                .port(),
            drain_timeout: Some(Duration::from_secs(5)),
        };
        let endpoint = Arc::new(Endpoint::start(config).await.unwrap());

        let (tx, rx) = oneshot::channel::<()>();
        let hook = install_shutdown_hook_with(Arc::clone(&endpoint), async {
            let _ = rx.await;
        });
        assert_eq!(endpoint.state(), EndpointState::Listening);

        tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), endpoint.await_termination())
            .await
            .expect("停机钩子没有停止端点");
        hook.await.unwrap();
        assert_eq!(endpoint.state(), EndpointState::Stopped);
    }
}
