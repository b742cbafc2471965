//! 行情请求
//!
//! 每次调用只发起一次 GET 请求，5 秒超时，不重试。
//! 新浪与腾讯接口均返回 GBK 编码文本。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::common::{REQUEST_TIMEOUT_SECS, SINA_REFERER};
use super::error::QuoteError;

/// 一次上游请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// 完整请求地址
    pub url: String,
    /// Referer 头（新浪必需，腾讯不带）
    pub referer: Option<&'static str>,
}

impl QuoteRequest {
    /// 新浪行情请求：http://hq.sinajs.cn/list=<codes>
    pub fn sina(base: &str, codes: &str) -> Self {
        Self {
            url: format!("{}/list={}", base.trim_end_matches('/'), codes),
            referer: Some(SINA_REFERER),
        }
    }

    /// 腾讯行情请求：http://qt.gtimg.cn/q=<code>
    pub fn tencent(base: &str, code: &str) -> Self {
        Self {
            url: format!("{}/q={}", base.trim_end_matches('/'), code),
            referer: None,
        }
    }
}

/// 行情数据源
///
/// 返回原始响应文本；任何网络层面的失败都归为 `QuoteError::Transport`。
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, request: &QuoteRequest) -> Result<String, QuoteError>;
}

/// 基于 reqwest 的 HTTP 数据源
pub struct HttpQuoteSource {
    client: Client,
}

impl HttpQuoteSource {
    /// 创建带固定超时的数据源
    pub fn new() -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| QuoteError::Unexpected(format!("HTTP 客户端初始化失败: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self, request: &QuoteRequest) -> Result<String, QuoteError> {
        log::debug!("📡 请求行情数据 URL: {}", request.url);

        let mut builder = self.client.get(&request.url);
        if let Some(referer) = request.referer {
            builder = builder.header("Referer", referer);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(QuoteError::Transport(format!(
                "上游返回状态码 {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        decode_gbk(&bytes)
    }
}

/// 解码 GBK 响应，出现无法解码的字节时视为传输失败
pub fn decode_gbk(bytes: &[u8]) -> Result<String, QuoteError> {
    let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
    if had_errors {
        return Err(QuoteError::Transport("响应内容无法按 GBK 解码".to_string()));
    }
    Ok(text.into_owned())
}
