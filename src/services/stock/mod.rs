//! A 股行情数据模块
//!
//! ## 数据来源
//! - 新浪财经：大盘指数、买卖五档（逗号分隔）
//! - 腾讯财经：个股价格、估值指标（波浪号分隔）

mod common;
mod error;
mod fetcher;
mod parser;
mod report;
mod schema;
mod sina;
mod tencent;

pub use common::{
    get_beijing_clock, normalize_code, NormalizeMode, SINA_QUOTE_API, TENCENT_QUOTE_API,
};
pub use error::QuoteError;
pub use fetcher::{HttpQuoteSource, QuoteRequest, QuoteSource};
pub use report::{
    failure, render_fundamentals, render_market_overview, render_stock_quote,
    render_trading_depth, FormatOptions, ZeroChangeStyle, DEPTH_FAILED, DEPTH_FETCH_FAILED, DEPTH_UNAVAILABLE,
    FUNDAMENTALS_FAILED, FUNDAMENTALS_UNAVAILABLE, OVERVIEW_FAILED, QUOTE_FAILED, QUOTE_NOT_FOUND,
};
pub use sina::{market_index_codes, parse_market_overview, parse_trading_depth};
pub use tencent::{parse_fundamentals, parse_stock_quote};

#[cfg(test)]
pub(crate) use sina::tests::mock_depth_body;
#[cfg(test)]
pub(crate) use tencent::tests::mock_tencent_body;
