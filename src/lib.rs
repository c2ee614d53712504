//! 对象重定位库
//!
//! 每次调用把 S3 存储桶中的一个对象复制到 `processed/<event_time>_<basename>`，
//! 以此标记该对象已被处理：
//! - 从环境变量读取存储桶、对象键和事件时间
//! - 发出一次服务端复制请求，源对象保持不变
//! - 通过返回值报告成功或失败，由二进制入口转换为退出状态

pub mod config;
pub mod error;
pub mod relocate;
pub mod s3;
pub mod utils;

use config::RelocatorConfig;
use error::RelocateError;
use s3::{CopyOutcome, S3Copier, S3Settings};

/// 从进程环境执行一次完整的重定位。
///
/// 必需的环境变量缺失时立即返回错误，此时不会构建 S3 客户端，也不会发出任何远程请求。
///
/// # Returns
///
/// 复制结果，或配置错误/复制错误
pub async fn run() -> Result<CopyOutcome, RelocateError> {
    let config = RelocatorConfig::from_env()?;

    let settings = S3Settings::from_env();
    tracing::debug!(?settings, "loading S3 client configuration");
    let sdk_config = settings.load_sdk_config().await;
    let copier = S3Copier::new(settings.create_client(&sdk_config));

    relocate::relocate(&copier, &config).await
}
