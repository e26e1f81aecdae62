//! 由 proto/namechanger.proto 生成的消息类型、客户端和服务端代码

// 生成的 proto 代码位于 namechanger 模块
pub mod namechanger {
    include!(concat!(env!("OUT_DIR"), "/namechanger.rs"));
}

pub use namechanger::name_changer_client::NameChangerClient;
pub use namechanger::name_changer_server::{NameChanger, NameChangerServer};
pub use namechanger::{TransformRequest, TransformResponse};
