//! 重定位程序的配置模块。
//!
//! 该模块负责从环境变量加载一次调用所需的三个值：存储桶、对象键和事件时间。

use crate::error::ConfigError;
use std::env;

/// 存储桶名称，同时作为源和目标存储桶
pub const BUCKET_VAR: &str = "s3_bucket";

/// 源对象的完整键
pub const OBJECT_KEY_VAR: &str = "s3_object_key";

/// 嵌入目标键的事件时间
pub const EVENT_TIME_VAR: &str = "event_time";

/// 旧版调度器设置的事件时间变量名
pub const LEGACY_EVENT_TIME_VAR: &str = "eventTime";

/// 一次调用的配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocatorConfig {
    pub bucket: String,
    pub object_key: String,
    /// 未设置时为空字符串，原样拼接进目标键
    pub event_time: String,
}

impl RelocatorConfig {
    /// 从进程环境变量加载配置。
    ///
    /// # Errors
    ///
    /// 当 `s3_bucket` 或 `s3_object_key` 缺失或为空时返回 [`ConfigError::MissingVariables`]。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 通过任意查找函数加载配置。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值的函数，未设置时返回 `None`。
    ///
    /// # 返回值
    ///
    /// 配置，或列出所有缺失变量的错误。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let bucket = required(BUCKET_VAR);
        let object_key = required(OBJECT_KEY_VAR);

        let (bucket, object_key) = match (bucket, object_key) {
            (Some(bucket), Some(object_key)) => (bucket, object_key),
            (bucket, object_key) => {
                let mut missing = Vec::new();
                if bucket.is_none() {
                    missing.push(BUCKET_VAR);
                }
                if object_key.is_none() {
                    missing.push(OBJECT_KEY_VAR);
                }
                return Err(ConfigError::MissingVariables(missing));
            }
        };

        let event_time = lookup(EVENT_TIME_VAR)
            .or_else(|| lookup(LEGACY_EVENT_TIME_VAR))
            .unwrap_or_default();

        Ok(Self {
            bucket,
            object_key,
            event_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_loads_all_values() {
        let config = RelocatorConfig::from_lookup(lookup_from(&[
            ("s3_bucket", "uploads"),
            ("s3_object_key", "input/data.csv"),
            ("event_time", "2024-01-01T00:00:00Z"),
        ]))
        .unwrap();

        assert_eq!(config.bucket, "uploads");
        assert_eq!(config.object_key, "input/data.csv");
        assert_eq!(config.event_time, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_missing_bucket() {
        let err = RelocatorConfig::from_lookup(lookup_from(&[("s3_object_key", "a.txt")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingVariables(vec!["s3_bucket"]));
    }

    #[test]
    fn test_missing_object_key() {
        let err =
            RelocatorConfig::from_lookup(lookup_from(&[("s3_bucket", "uploads")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVariables(vec!["s3_object_key"]));
    }

    #[test]
    fn test_missing_both() {
        let err = RelocatorConfig::from_lookup(lookup_from(&[("event_time", "1")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariables(vec!["s3_bucket", "s3_object_key"])
        );
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err = RelocatorConfig::from_lookup(lookup_from(&[
            ("s3_bucket", ""),
            ("s3_object_key", "input/data.csv"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingVariables(vec!["s3_bucket"]));
    }

    #[test]
    fn test_event_time_defaults_to_empty() {
        let config = RelocatorConfig::from_lookup(lookup_from(&[
            ("s3_bucket", "uploads"),
            ("s3_object_key", "input/data.csv"),
        ]))
        .unwrap();
        assert_eq!(config.event_time, "");
    }

    #[test]
    fn test_legacy_event_time_fallback() {
        let config = RelocatorConfig::from_lookup(lookup_from(&[
            ("s3_bucket", "uploads"),
            ("s3_object_key", "input/data.csv"),
            ("eventTime", "1704067200.0"),
        ]))
        .unwrap();
        assert_eq!(config.event_time, "1704067200.0");

        // 两者同时存在时以 event_time 为准
        let config = RelocatorConfig::from_lookup(lookup_from(&[
            ("s3_bucket", "uploads"),
            ("s3_object_key", "input/data.csv"),
            ("event_time", "new"),
            ("eventTime", "old"),
        ]))
        .unwrap();
        assert_eq!(config.event_time, "new");
    }
}
