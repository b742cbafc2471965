//! 股票行情服务
//!
//! 两种调用入口共用的能力接口：结构化记录方法返回 `Result`，
//! 报告方法把任何错误都转换为提示文本，永不失败。

use std::sync::Arc;

use crate::models::{DepthSnapshot, FundamentalsSnapshot, IndexQuote, StockQuote};
use crate::services::stock::{
    failure, get_beijing_clock, market_index_codes, normalize_code, parse_fundamentals,
    parse_market_overview, parse_stock_quote, parse_trading_depth, render_fundamentals,
    render_market_overview, render_stock_quote, render_trading_depth, FormatOptions, QuoteError,
    QuoteRequest, QuoteSource, DEPTH_FAILED, DEPTH_FETCH_FAILED, DEPTH_UNAVAILABLE,
    FUNDAMENTALS_FAILED, FUNDAMENTALS_UNAVAILABLE, OVERVIEW_FAILED, QUOTE_FAILED, QUOTE_NOT_FOUND,
    SINA_QUOTE_API, TENCENT_QUOTE_API,
};

/// 上游接口地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sina_base: String,
    pub tencent_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sina_base: SINA_QUOTE_API.to_string(),
            tencent_base: TENCENT_QUOTE_API.to_string(),
        }
    }
}

/// 股票行情服务
///
/// 不持有任何可变状态，可在多个 worker 之间共享。
pub struct StockService {
    source: Arc<dyn QuoteSource>,
    endpoints: Endpoints,
    options: FormatOptions,
}

impl StockService {
    pub fn new(source: Arc<dyn QuoteSource>, endpoints: Endpoints, options: FormatOptions) -> Self {
        Self {
            source,
            endpoints,
            options,
        }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// 标准化代码；空代码不发起请求
    pub fn normalize(&self, symbol: &str) -> Result<String, QuoteError> {
        if symbol.trim().is_empty() {
            return Err(QuoteError::MissingSymbol);
        }
        Ok(normalize_code(symbol, self.options.normalize))
    }

    // ==================== 结构化记录 ====================

    /// 获取三大指数行情
    pub async fn market_overview(&self) -> Result<Vec<IndexQuote>, QuoteError> {
        let request = QuoteRequest::sina(&self.endpoints.sina_base, &market_index_codes());
        let body = self.source.fetch(&request).await?;
        Ok(parse_market_overview(&body))
    }

    /// 获取个股实时行情
    pub async fn stock_quote(&self, symbol: &str) -> Result<StockQuote, QuoteError> {
        let code = self.normalize(symbol)?;
        let request = QuoteRequest::tencent(&self.endpoints.tencent_base, &code);
        let body = self.source.fetch(&request).await?;
        parse_stock_quote(&body, &code, get_beijing_clock())
    }

    /// 获取个股估值指标
    pub async fn fundamentals(&self, symbol: &str) -> Result<FundamentalsSnapshot, QuoteError> {
        let code = self.normalize(symbol)?;
        let request = QuoteRequest::tencent(&self.endpoints.tencent_base, &code);
        let body = self.source.fetch(&request).await?;
        parse_fundamentals(&body)
    }

    /// 获取买卖五档盘口
    pub async fn trading_depth(&self, symbol: &str) -> Result<DepthSnapshot, QuoteError> {
        let code = self.normalize(symbol)?;
        let request = QuoteRequest::sina(&self.endpoints.sina_base, &code);
        let body = self.source.fetch(&request).await?;
        parse_trading_depth(&body)
    }

    // ==================== 文本报告 ====================

    pub async fn market_overview_report(&self) -> String {
        match self.market_overview().await {
            Ok(quotes) => render_market_overview(&quotes, self.options.zero_change),
            Err(e) => {
                log::warn!("大盘数据获取失败: {}", e);
                failure(OVERVIEW_FAILED, e)
            }
        }
    }

    pub async fn stock_price_report(&self, symbol: &str) -> String {
        match self.stock_quote(symbol).await {
            Ok(quote) => render_stock_quote(&quote),
            Err(QuoteError::MissingSymbol) => QuoteError::MissingSymbol.to_string(),
            Err(e) if e.is_data_error() => {
                log::info!("未找到股票 {}: {}", symbol, e);
                QUOTE_NOT_FOUND.to_string()
            }
            Err(e) => {
                log::warn!("个股行情查询失败 {}: {}", symbol, e);
                failure(QUOTE_FAILED, e)
            }
        }
    }

    pub async fn fundamentals_report(&self, symbol: &str) -> String {
        match self.fundamentals(symbol).await {
            Ok(snapshot) => render_fundamentals(&snapshot),
            Err(QuoteError::MissingSymbol) => QuoteError::MissingSymbol.to_string(),
            Err(e) if e.is_data_error() => {
                log::info!("基本面数据不可用 {}: {}", symbol, e);
                FUNDAMENTALS_UNAVAILABLE.to_string()
            }
            Err(e) => {
                log::warn!("基本面数据获取失败 {}: {}", symbol, e);
                failure(FUNDAMENTALS_FAILED, e)
            }
        }
    }

    pub async fn trading_depth_report(&self, symbol: &str) -> String {
        match self.trading_depth(symbol).await {
            Ok(snapshot) => render_trading_depth(&snapshot),
            Err(QuoteError::MissingSymbol) => QuoteError::MissingSymbol.to_string(),
            Err(QuoteError::NoData) => DEPTH_FETCH_FAILED.to_string(),
            Err(e @ QuoteError::Transport(_)) => {
                log::warn!("盘口数据获取失败 {}: {}", symbol, e);
                failure(DEPTH_FAILED, e)
            }
            Err(e) => {
                log::info!("盘口数据不可用 {}: {}", symbol, e);
                DEPTH_UNAVAILABLE.to_string()
            }
        }
    }
}
