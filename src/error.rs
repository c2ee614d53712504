//! 错误类型模块
//!
//! 只区分两类错误：缺少必需的环境变量的配置错误，以及复制请求失败的远程错误。
//! 两者都会导致进程以失败状态退出，不做重试。

use thiserror::Error;

/// 配置错误：必需的环境变量缺失或为空。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 缺失的变量名按声明顺序列出
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// 对象存储复制请求失败。
///
/// 认证、权限、对象不存在、限流、网络和服务端错误一律归为此类，
/// 只保留服务返回的错误码（如果有）和错误消息。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CopyError {
    /// 服务返回的错误码，例如 `NoSuchKey`、`AccessDenied`
    pub code: Option<String>,
    /// 人类可读的错误消息
    pub message: String,
}

impl CopyError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// 一次重定位调用的所有失败情况。
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{source}")]
    Copy {
        source_key: String,
        destination_key: String,
        #[source]
        source: CopyError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variables_message() {
        let err = ConfigError::MissingVariables(vec!["s3_bucket", "s3_object_key"]);
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: s3_bucket, s3_object_key"
        );
    }

    #[test]
    fn test_copy_error_displays_message_only() {
        let err = RelocateError::Copy {
            source_key: "input/data.csv".to_string(),
            destination_key: "processed/_data.csv".to_string(),
            source: CopyError::new(Some("AccessDenied".to_string()), "Access Denied"),
        };
        assert_eq!(err.to_string(), "Access Denied");
    }
}
