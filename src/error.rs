use thiserror::Error;
use tonic::{Code, Status};

/// 服务端点错误
///
/// `InvalidPort` 和 `Bind` 属于启动期的绑定错误，会终止启动流程
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("无效端口: {port}，端口范围为 1-65535")]
    InvalidPort { port: u16 },

    #[error("绑定地址失败: {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置错误: {0}")]
    InvalidConfig(String),
}

impl EndpointError {
    /// 是否为绑定错误（端口无效或端口不可用）
    pub fn is_bind_error(&self) -> bool {
        matches!(
            self,
            EndpointError::InvalidPort { .. } | EndpointError::Bind { .. }
        )
    }

    pub(crate) fn bind(addr: impl Into<String>, source: std::io::Error) -> Self {
        EndpointError::Bind {
            addr: addr.into(),
            source,
        }
    }
}

/// 单次调用的处理错误
///
/// 只影响当前调用，会转换为 gRPC Status 返回给调用方
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(msg) => Status::new(Code::InvalidArgument, msg),
            ServiceError::Internal(msg) => Status::new(Code::Internal, msg),
        }
    }
}
