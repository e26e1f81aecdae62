use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tonic::{Request, Response, Status};

use super::transform::{replace_char, reverse_name};
use crate::error::ServiceError;
use crate::proto::{NameChanger, TransformRequest, TransformResponse};

/// NameChanger 服务
///
/// 无状态，处理函数都是纯函数，可以被任意多个连接并发调用
#[derive(Debug, Default, Clone)]
pub struct NameChangerService {}

impl NameChangerService {
    pub fn new() -> Self {
        Self {}
    }

    /// 单次调用的分发边界
    ///
    /// 处理函数的错误和 panic 都只影响当前调用，转换为 Status 返回给调用方
    pub(crate) fn dispatch<F>(
        operation: &'static str,
        handler: F,
    ) -> Result<Response<TransformResponse>, Status>
    where
        F: FnOnce() -> Result<String, ServiceError>,
    {
        let result = panic::catch_unwind(AssertUnwindSafe(handler)).unwrap_or_else(|payload| {
            Err(ServiceError::Internal(format!(
                "{} 处理失败: {}",
                operation,
                panic_message(payload.as_ref())
            )))
        });

        match result {
            Ok(message) => {
                tracing::debug!(operation, "调用成功");
                Ok(Response::new(TransformResponse { message }))
            }
            Err(err) => {
                match &err {
                    ServiceError::InvalidArgument(_) => {
                        tracing::warn!(operation, error = %err, "请求参数无效")
                    }
                    ServiceError::Internal(_) => {
                        tracing::error!(operation, error = %err, "处理请求时发生内部错误")
                    }
                }
                Err(err.into())
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "未知 panic".to_string()
    }
}

#[tonic::async_trait]
impl NameChanger for NameChangerService {
    async fn reverse(
        &self,
        request: Request<TransformRequest>,
    ) -> Result<Response<TransformResponse>, Status> {
        let req = request.into_inner();
        Self::dispatch("Reverse", || Ok(reverse_name(&req.name)))
    }

    async fn char_replace(
        &self,
        request: Request<TransformRequest>,
    ) -> Result<Response<TransformResponse>, Status> {
        let req = request.into_inner();
        Self::dispatch("CharReplace", || replace_char(&req.name, &req.chara))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    fn request(name: &str, chara: &str) -> Request<TransformRequest> {
        Request::new(TransformRequest {
            name: name.to_string(),
            chara: chara.to_string(),
        })
    }

    #[tokio::test]
    async fn test_reverse() {
        let service = NameChangerService::new();
        let response = service.reverse(request("abc", "")).await.unwrap();
        assert_eq!(response.into_inner().message, "the name reversed is: cba");
    }

    #[tokio::test]
    async fn test_char_replace() {
        let service = NameChangerService::new();
        let response = service.char_replace(request("civic", "x")).await.unwrap();
        assert_eq!(
            response.into_inner().message,
            "the character changed to *: cxvxc"
        );
    }

    #[tokio::test]
    async fn test_char_replace_empty_chara() {
        let service = NameChangerService::new();
        let status = service.char_replace(request("hi", "")).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_dispatch_contains_panic() {
        let status = NameChangerService::dispatch("Reverse", || panic!("handler exploded"))
            .unwrap_err();
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("handler exploded"));
    }

    #[test]
    fn test_dispatch_contains_formatted_panic() {
        let status = NameChangerService::dispatch("CharReplace", || {
            panic!("bad index {}", 3)
        })
        .unwrap_err();
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("bad index 3"));
    }
}
