//! S3 复制操作模块
//!
//! 该模块定义服务端复制的抽象接口以及基于 `aws_sdk_s3::Client` 的实现。

use crate::error::CopyError;
use crate::utils::path::encode_key;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::fmt::Debug;

/// 一次服务端复制请求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source_bucket: String,
    pub source_key: String,
    pub destination_bucket: String,
    pub destination_key: String,
}

impl CopyRequest {
    /// `x-amz-copy-source` 请求头的值：`bucket/key`，键按段进行 URL 编码。
    ///
    /// ```
    /// use s3_relocator::s3::copy::CopyRequest;
    ///
    /// let request = CopyRequest {
    ///     source_bucket: "uploads".to_string(),
    ///     source_key: "input/my data.csv".to_string(),
    ///     destination_bucket: "uploads".to_string(),
    ///     destination_key: "processed/_my data.csv".to_string(),
    /// };
    /// assert_eq!(request.copy_source(), "uploads/input/my%20data.csv");
    /// ```
    pub fn copy_source(&self) -> String {
        format!("{}/{}", self.source_bucket, encode_key(&self.source_key))
    }
}

/// 复制成功后的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub destination_key: String,
    /// 目标对象的 ETag，服务未返回时为 `None`
    pub e_tag: Option<String>,
}

/// 对象存储的服务端复制接口。
///
/// 实现只负责发出一次复制请求，不做重试，源对象保持不变。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectCopier: Send + Sync {
    async fn copy_object(&self, request: &CopyRequest) -> Result<CopyOutcome, CopyError>;
}

/// 基于 AWS S3 的 [`ObjectCopier`] 实现。
#[derive(Debug, Clone)]
pub struct S3Copier {
    client: Client,
}

impl S3Copier {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectCopier for S3Copier {
    #[tracing::instrument(skip(self), fields(copy_source = %request.copy_source()))]
    async fn copy_object(&self, request: &CopyRequest) -> Result<CopyOutcome, CopyError> {
        let output = self
            .client
            .copy_object()
            .copy_source(request.copy_source())
            .bucket(&request.destination_bucket)
            .key(&request.destination_key)
            .send()
            .await
            .map_err(to_copy_error)?;

        let e_tag = output
            .copy_object_result()
            .and_then(|result| result.e_tag())
            .map(str::to_string);

        Ok(CopyOutcome {
            destination_key: request.destination_key.clone(),
            e_tag,
        })
    }
}

/// 把 SDK 错误转换为 [`CopyError`]。
///
/// 优先使用服务返回的错误消息；没有消息时（例如网络错误）使用完整的错误链描述。
fn to_copy_error<E, R>(err: SdkError<E, R>) -> CopyError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    let code = err.code().map(str::to_string);
    match err.message() {
        Some(message) => CopyError::new(code, message),
        None => CopyError::new(code, DisplayErrorContext(&err).to_string()),
    }
}
