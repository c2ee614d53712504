//! 重定位模块
//!
//! 把源对象复制到 `processed/<event_time>_<basename>`，以此标记对象已处理。
//! 流程是线性的：校验配置 → 发出一次复制请求 → 返回结果，由调用方决定退出状态。

use crate::config::RelocatorConfig;
use crate::error::RelocateError;
use crate::s3::{CopyOutcome, CopyRequest, ObjectCopier};
use crate::utils::path::basename;

/// 目标键前缀
pub const PROCESSED_PREFIX: &str = "processed/";

/// 计算目标键。
///
/// 事件时间不做校验或格式化，原样拼接；为空时下划线前为空字符串。
///
/// # 示例
///
/// ```
/// use s3_relocator::relocate::destination_key;
///
/// assert_eq!(
///     destination_key("2024-01-01T00:00:00Z", "input/data.csv"),
///     "processed/2024-01-01T00:00:00Z_data.csv"
/// );
/// assert_eq!(destination_key("", "input/data.csv"), "processed/_data.csv");
/// ```
pub fn destination_key(event_time: &str, object_key: &str) -> String {
    format!("{}{}_{}", PROCESSED_PREFIX, event_time, basename(object_key))
}

impl RelocatorConfig {
    /// 根据配置构建复制请求，源和目标位于同一存储桶。
    pub fn copy_request(&self) -> CopyRequest {
        CopyRequest {
            source_bucket: self.bucket.clone(),
            source_key: self.object_key.clone(),
            destination_bucket: self.bucket.clone(),
            destination_key: destination_key(&self.event_time, &self.object_key),
        }
    }
}

/// 执行一次重定位。
///
/// # 参数
///
/// * `copier` - 对象存储复制实现
/// * `config` - 已校验的配置
///
/// # Errors
///
/// 复制请求失败时返回 [`RelocateError::Copy`]，不做重试。
pub async fn relocate<C>(copier: &C, config: &RelocatorConfig) -> Result<CopyOutcome, RelocateError>
where
    C: ObjectCopier + ?Sized,
{
    let request = config.copy_request();

    tracing::info!(
        bucket = %request.source_bucket,
        source_key = %request.source_key,
        destination_key = %request.destination_key,
        "copying object"
    );

    match copier.copy_object(&request).await {
        Ok(outcome) => {
            tracing::info!(
                destination_key = %outcome.destination_key,
                e_tag = outcome.e_tag.as_deref().unwrap_or("-"),
                "object copied"
            );
            Ok(outcome)
        }
        Err(source) => Err(RelocateError::Copy {
            source_key: request.source_key,
            destination_key: request.destination_key,
            source,
        }),
    }
}
