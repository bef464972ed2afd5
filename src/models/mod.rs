//! 数据模型定义
//!
//! 与 entity 模块中的数据库实体分离，对外序列化统一使用 camelCase。

pub mod academic;
pub mod assignments;
pub mod common;
pub mod files;
pub mod profiles;
pub mod submissions;
pub mod users;

pub use common::response::ErrorResponse;
