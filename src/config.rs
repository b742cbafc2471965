//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::services::stock::{FormatOptions, SINA_QUOTE_API, TENCENT_QUOTE_API};
use crate::services::stock_service::Endpoints;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// API 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API Key（为空则不启用认证）
    #[serde(default)]
    pub api_key: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 上游行情接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// 新浪行情地址
    #[serde(default = "default_sina_base")]
    pub sina_base: String,
    /// 腾讯行情地址
    #[serde(default = "default_tencent_base")]
    pub tencent_base: String,
}

/// 两种调用入口的格式化选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    /// 函数调用入口
    #[serde(default = "FormatOptions::function_profile")]
    pub functions: FormatOptions,
    /// 工具注册入口
    #[serde(default = "FormatOptions::tool_profile")]
    pub tools: FormatOptions,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// API 配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 上游接口配置
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// 格式化选项
    #[serde(default)]
    pub profiles: ProfilesConfig,
}

/// 配置加载结果
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: AppConfig,
    /// 成功加载的文件，None 表示使用默认配置
    pub source: Option<String>,
    /// 存在但加载失败的文件及原因
    pub failures: Vec<String>,
}

impl ConfigLoad {
    /// 输出加载过程，需在日志系统初始化之后调用
    pub fn log(&self) {
        for failure in &self.failures {
            log::error!("{}", failure);
        }
        match &self.source {
            Some(path) => log::info!("从 {} 加载配置成功", path),
            None => log::info!("使用默认配置"),
        }
    }
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_log_level() -> String { "info".to_string() }
fn default_sina_base() -> String { SINA_QUOTE_API.to_string() }
fn default_tencent_base() -> String { TENCENT_QUOTE_API.to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            sina_base: default_sina_base(),
            tencent_base: default_tencent_base(),
        }
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            functions: FormatOptions::function_profile(),
            tools: FormatOptions::tool_profile(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 从 JSON 文本解析配置并校验
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验上游地址
    pub fn validate(&self) -> anyhow::Result<()> {
        for base in [&self.upstream.sina_base, &self.upstream.tencent_base] {
            let url = url::Url::parse(base)
                .map_err(|e| anyhow::anyhow!("上游地址 {} 无效: {}", base, e))?;
            if !matches!(url.scheme(), "http" | "https") {
                anyhow::bail!("上游地址 {} 必须为 http/https", base);
            }
        }
        Ok(())
    }

    /// 加载配置，优先从文件，失败则使用默认值
    ///
    /// 日志系统此时尚未初始化，加载过程记录在 `ConfigLoad` 中，由调用方输出。
    pub fn load() -> ConfigLoad {
        Self::load_from(&["config.json", "config/config.json"])
    }

    /// 按顺序尝试候选路径，取第一个成功加载的文件
    pub fn load_from<P: AsRef<Path>>(paths: &[P]) -> ConfigLoad {
        let mut failures = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        source: Some(path.display().to_string()),
                        failures,
                    };
                }
                Err(e) => failures.push(format!("加载配置文件 {} 失败: {}", path.display(), e)),
            }
        }

        ConfigLoad {
            config: Self::default(),
            source: None,
            failures,
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 上游接口地址
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            sina_base: self.upstream.sina_base.clone(),
            tencent_base: self.upstream.tencent_base.clone(),
        }
    }
}
