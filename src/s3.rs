//! S3模块
//!
//! 该模块负责处理与S3存储桶的交互，包括客户端配置和服务端复制。

// 声明子模块
pub mod config;
pub mod copy;

// 重新导出常用的类型
pub use config::S3Settings;
pub use copy::{CopyOutcome, CopyRequest, ObjectCopier, S3Copier};
