//! 腾讯行情解析：个股价格、基本面
//!
//! 对接 http://qt.gtimg.cn/q=<code>，字段以 `~` 分隔

use crate::models::{FundamentalsSnapshot, StockQuote};

use super::error::QuoteError;
use super::parser::{field, parse_tencent, require_fields};
use super::schema::tencent;

/// 解析个股实时行情
///
/// `code` 为标准化后的代码，`update_time` 由调用方在格式化时生成。
pub fn parse_stock_quote(body: &str, code: &str, update_time: String) -> Result<StockQuote, QuoteError> {
    let fields = parse_tencent(body)?;
    require_fields(&fields, tencent::MIN_QUOTE_FIELDS)?;

    Ok(StockQuote {
        name: field(&fields, tencent::NAME)?.to_string(),
        symbol: code.to_string(),
        price: field(&fields, tencent::PRICE)?.to_string(),
        change_percent: field(&fields, tencent::CHANGE_PERCENT)?.to_string(),
        change_amount: field(&fields, tencent::CHANGE_AMOUNT)?.to_string(),
        update_time,
    })
}

/// 解析个股基本面指标
pub fn parse_fundamentals(body: &str) -> Result<FundamentalsSnapshot, QuoteError> {
    let fields = parse_tencent(body)?;
    require_fields(&fields, tencent::MIN_FUNDAMENTAL_FIELDS)?;

    let pe = field(&fields, tencent::PE_TTM)?;
    let pb = if fields.len() > tencent::PB {
        field(&fields, tencent::PB)?
    } else {
        field(&fields, tencent::PB_FALLBACK)?
    };

    Ok(FundamentalsSnapshot {
        name: field(&fields, tencent::NAME)?.to_string(),
        pe: (!pe.is_empty()).then(|| pe.to_string()),
        pb: pb.to_string(),
        market_cap: fields.get(tencent::MARKET_CAP).map(|cap| cap.to_string()),
    })
}
