//! service 模块 - NameChanger 服务实现
//!
//! - `transform`: 两个纯函数形式的字符串变换
//! - `name_changer_service`: 实现生成的 `NameChanger` trait，负责单次调用的错误隔离

pub mod name_changer_service;
pub mod transform;

pub use name_changer_service::NameChangerService;
pub use transform::{replace_char, reverse_name, REPLACE_PREFIX, REVERSE_PREFIX};
