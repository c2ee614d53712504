//! S3配置模块
//!
//! 该模块负责把客户端所需的区域、端点等设置显式地收集起来，再据此构建 S3 客户端。
//! 凭证仍由标准 AWS 提供链解析，但解析结果通过 [`SdkConfig`] 显式传入客户端构造函数。

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::Client;
use std::env;

/// S3 客户端设置。
///
/// # 环境变量
///
/// * `S3_REGION` - 区域，未设置时使用标准 AWS 区域提供链
/// * `S3_ENDPOINT` - S3 兼容服务的端点 URL
/// * `S3_FORCE_PATH_STYLE` - 是否使用路径风格寻址（`true`/`1`/`yes`）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Settings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

impl S3Settings {
    /// 从进程环境变量读取设置。
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 通过任意查找函数读取设置，空值视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            region: non_empty("S3_REGION"),
            endpoint_url: non_empty("S3_ENDPOINT"),
            force_path_style: non_empty("S3_FORCE_PATH_STYLE")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }

    /// 加载 AWS SDK 配置。
    ///
    /// 显式设置的区域和端点优先，其余沿用默认提供链。
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let region_provider =
            RegionProviderChain::first_try(self.region.clone().map(Region::new)).or_default_provider();

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }

    /// 使用给定的 SDK 配置创建 S3 客户端。
    ///
    /// # 参数
    ///
    /// * `sdk_config` - 已加载的 AWS SDK 配置
    ///
    /// # 返回值
    ///
    /// 配置好的 `aws_sdk_s3::Client`。
    pub fn create_client(&self, sdk_config: &SdkConfig) -> Client {
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(self.force_path_style)
            .build();
        Client::from_conf(s3_config)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
