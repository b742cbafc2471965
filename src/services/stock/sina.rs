//! 新浪行情解析：大盘指数、买卖五档
//!
//! 对接 http://hq.sinajs.cn/list=<codes>

use crate::models::{DepthLevel, DepthSnapshot, IndexQuote};

use super::error::QuoteError;
use super::parser::{field, parse_sina_lines, parse_sina_single, require_fields, LineOutcome};
use super::schema::{sina_depth, sina_index};

/// 大盘概览请求的代码串
pub fn market_index_codes() -> String {
    sina_index::MARKET_INDICES
        .iter()
        .map(|(code, _)| *code)
        .collect::<Vec<_>>()
        .join(",")
}

/// 解析大盘指数响应
///
/// 逐行处理：未知代码、缺字段、涨跌幅非数字的行均跳过，不影响其他行。
pub fn parse_market_overview(body: &str) -> Vec<IndexQuote> {
    let mut quotes = Vec::new();

    for outcome in parse_sina_lines(body) {
        let line = match outcome {
            LineOutcome::Parsed(line) => line,
            LineOutcome::Skipped(reason) => {
                log::debug!("跳过指数行: {:?}", reason);
                continue;
            }
        };

        let Some(name) = sina_index::display_name(line.code) else {
            log::debug!("跳过未知指数代码: {}", line.code);
            continue;
        };

        let price = line.fields.get(sina_index::PRICE);
        let change_percent = line.fields.get(sina_index::CHANGE_PERCENT);
        let (Some(price), Some(change_percent)) = (price, change_percent) else {
            log::debug!("指数 {} 字段不足", line.code);
            continue;
        };

        let Ok(change_value) = change_percent.trim().parse::<f64>() else {
            log::debug!("指数 {} 涨跌幅无法解析: {}", line.code, change_percent);
            continue;
        };

        quotes.push(IndexQuote {
            code: line.code.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            change_percent: change_percent.to_string(),
            change_value,
        });
    }

    quotes
}

/// 解析个股五档盘口
pub fn parse_trading_depth(body: &str) -> Result<DepthSnapshot, QuoteError> {
    let fields = parse_sina_single(body)?;
    require_fields(&fields, sina_depth::MIN_FIELDS)?;

    let name = field(&fields, sina_depth::NAME)?.to_string();
    let asks = parse_levels(&fields, &sina_depth::ASK_LEVELS)?;
    let bids = parse_levels(&fields, &sina_depth::BID_LEVELS)?;

    Ok(DepthSnapshot { name, asks, bids })
}

fn parse_levels(fields: &[&str], positions: &[(usize, usize)]) -> Result<Vec<DepthLevel>, QuoteError> {
    positions
        .iter()
        .map(|&(volume_idx, price_idx)| {
            let volume = field(fields, volume_idx)?;
            let shares = volume.trim().parse::<u64>().map_err(|_| {
                QuoteError::Malformed(format!("挂单量无法解析: {}", volume))
            })?;
            Ok(DepthLevel {
                price: field(fields, price_idx)?.to_string(),
                lots: shares / sina_depth::SHARES_PER_LOT,
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 构造新浪个股完整行情，买卖量为 100 的整数倍加零头
    pub(crate) fn mock_depth_body() -> String {
        let mut fields: Vec<String> = vec!["贵州茅台".to_string()];
        fields.extend((1..10).map(|i| format!("{}.00", 1700 + i)));
        // 买一到买五
        for i in 0..5 {
            fields.push(format!("{}", (i + 1) * 1000 + 55));
            fields.push(format!("{:.2}", 1699.0 - i as f64));
        }
        // 卖一到卖五
        for i in 0..5 {
            fields.push(format!("{}", (i + 1) * 200 + 99));
            fields.push(format!("{:.2}", 1700.0 + i as f64));
        }
        fields.push("2024-01-02".to_string());
        fields.push("15:00:00".to_string());
        fields.push("00".to_string());
        format!("var hq_str_sh600519=\"{}\";\n", fields.join(","))
    }

    #[test]
    fn test_market_index_codes() {
        assert_eq!(market_index_codes(), "s_sh000001,s_sz399001,s_sz399006");
    }

    /// 测试解析大盘指数
    #[test]
    fn test_parse_market_overview() {
        let body = concat!(
            "var hq_str_s_sh000001=\"上证指数,3000.00,-10.00,-0.33,100,200\";\n",
            "var hq_str_s_sz399001=\"深证成指,9500.12,20.10,0.21,100,200\";\n",
            "var hq_str_s_sz399006=\"创业板指,1900.00,0.00,0.00,100,200\";\n",
        );

        let quotes = parse_market_overview(body);
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].name, "上证指数");
        assert_eq!(quotes[0].price, "3000.00");
        assert_eq!(quotes[0].change_percent, "-0.33");
        assert!(quotes[0].change_value < 0.0);
        assert_eq!(quotes[2].change_value, 0.0);
    }

    /// 上游名称被忽略，使用固定名称
    #[test]
    fn test_overview_uses_fixed_names() {
        let body = "var hq_str_s_sz399001=\"SZ COMPONENT,9500.12,20.10,0.21\";";
        let quotes = parse_market_overview(body);
        assert_eq!(quotes[0].name, "深证成指");
    }

    /// 异常行被跳过，不影响其他行
    #[test]
    fn test_overview_skips_bad_lines() {
        let body = concat!(
            "var hq_str_s_sh000001=\"上证指数,3000.00,-10.00,abc\";\n",
            "var hq_str_s_sh000300=\"沪深300,3500.00,1.00,0.03\";\n",
            "var hq_str_s_sz399001=\"深证成指,9500\";\n",
            "garbage line without anything\n",
            "var hq_str_s_sz399006=\"创业板指,1900.00,5.00,0.26\";\n",
        );
        let quotes = parse_market_overview(body);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].code, "s_sz399006");
    }

    #[test]
    fn test_overview_empty_body() {
        assert!(parse_market_overview("").is_empty());
    }

    /// 测试解析五档盘口
    #[test]
    fn test_parse_trading_depth() {
        let depth = parse_trading_depth(&mock_depth_body()).unwrap();
        assert_eq!(depth.name, "贵州茅台");
        assert_eq!(depth.bids.len(), 5);
        assert_eq!(depth.asks.len(), 5);

        // 买一: 1055 股 -> 10 手
        assert_eq!(depth.bids[0], DepthLevel { price: "1699.00".to_string(), lots: 10 });
        assert_eq!(depth.bids[4].lots, 50);
        // 卖一: 299 股 -> 2 手，卖五: 1099 股 -> 10 手
        assert_eq!(depth.asks[0], DepthLevel { price: "1700.00".to_string(), lots: 2 });
        assert_eq!(depth.asks[4], DepthLevel { price: "1704.00".to_string(), lots: 10 });
    }

    #[test]
    fn test_parse_trading_depth_failures() {
        assert_eq!(parse_trading_depth("FAILED"), Err(QuoteError::NoData));
        assert!(matches!(
            parse_trading_depth("var hq_str_sh999999=\"\";"),
            Err(QuoteError::InsufficientFields { .. })
        ));

        let bad_volume = mock_depth_body().replacen("1055", "n/a", 1);
        assert!(matches!(parse_trading_depth(&bad_volume), Err(QuoteError::Malformed(_))));
    }
}
