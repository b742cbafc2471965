//! 文本报告格式化

use serde::{Deserialize, Serialize};

use crate::models::{DepthLevel, DepthSnapshot, FundamentalsSnapshot, IndexQuote, StockQuote};

use super::common::NormalizeMode;

// ==================== 固定提示语 ====================

pub const OVERVIEW_HEADER: &str = "【A股大盘实时概览】\n";
pub const OVERVIEW_FAILED: &str = "大盘数据获取失败";
pub const QUOTE_NOT_FOUND: &str = "未找到该股票信息，请检查代码。";
pub const QUOTE_FAILED: &str = "查询失败";
pub const FUNDAMENTALS_UNAVAILABLE: &str = "财务数据暂不可用。";
pub const FUNDAMENTALS_FAILED: &str = "基本面数据获取失败";
pub const DEPTH_FETCH_FAILED: &str = "盘口数据获取失败。";
pub const DEPTH_UNAVAILABLE: &str = "盘口数据不可用。";
pub const DEPTH_FAILED: &str = "盘口数据不可用";

const RISING_ICON: &str = "🔴";
const FALLING_ICON: &str = "🟢";
/// 中性策略下涨跌幅恰为 0 时的图标；旧版工具接口在此处输出占位文本 "zz"，现统一为图标
const FLAT_ICON: &str = "⚪";

/// 涨跌幅为 0 时的图标策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroChangeStyle {
    /// 0 视为上涨（>= 0 红色）
    ZeroRising,
    /// 0 使用中性图标（> 0 红色，< 0 绿色）
    ZeroNeutral,
}

/// 调用方相关的格式化选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub normalize: NormalizeMode,
    pub zero_change: ZeroChangeStyle,
}

impl FormatOptions {
    /// 函数调用入口的默认选项
    pub fn function_profile() -> Self {
        Self {
            normalize: NormalizeMode::Canonical,
            zero_change: ZeroChangeStyle::ZeroRising,
        }
    }

    /// 工具注册入口的默认选项
    pub fn tool_profile() -> Self {
        Self {
            normalize: NormalizeMode::Verbatim,
            zero_change: ZeroChangeStyle::ZeroNeutral,
        }
    }
}

/// 按策略选择涨跌图标
pub fn change_icon(change: f64, style: ZeroChangeStyle) -> &'static str {
    match style {
        ZeroChangeStyle::ZeroRising if change >= 0.0 => RISING_ICON,
        ZeroChangeStyle::ZeroRising => FALLING_ICON,
        ZeroChangeStyle::ZeroNeutral if change > 0.0 => RISING_ICON,
        ZeroChangeStyle::ZeroNeutral if change < 0.0 => FALLING_ICON,
        ZeroChangeStyle::ZeroNeutral => FLAT_ICON,
    }
}

/// 大盘概览报告；没有任何指数时只有标题行
pub fn render_market_overview(quotes: &[IndexQuote], style: ZeroChangeStyle) -> String {
    let mut result = String::from(OVERVIEW_HEADER);
    for quote in quotes {
        result.push_str(&format!(
            "{} {}: {} ({}%)\n",
            change_icon(quote.change_value, style),
            quote.name,
            quote.price,
            quote.change_percent
        ));
    }
    result
}

pub fn render_stock_quote(quote: &StockQuote) -> String {
    format!(
        "【💰 个股行情: {} ({})】\n当前价格: {}\n今日涨跌: {}% ({})\n更新时间: {}",
        quote.name,
        quote.symbol,
        quote.price,
        quote.change_percent,
        quote.change_amount,
        quote.update_time
    )
}

pub fn render_fundamentals(snapshot: &FundamentalsSnapshot) -> String {
    format!(
        "【📉 基本面/估值分析: {}】\n\
         市盈率 (PE-TTM): {} (衡量回本年限)\n\
         市净率 (PB): {} (衡量资产溢价)\n\
         总市值: {} 亿\n\
         ------------------\n\
         小贴士: PE越低通常代表越便宜，但也可能意味着增长停滞。",
        snapshot.name,
        snapshot.pe.as_deref().unwrap_or("N/A"),
        snapshot.pb,
        snapshot.market_cap.as_deref().unwrap_or("N/A")
    )
}

const ASK_LABELS: [&str; 5] = ["卖一", "卖二", "卖三", "卖四", "卖五"];
const BID_LABELS: [&str; 5] = ["买一", "买二", "买三", "买四", "买五"];

/// 五档盘口报告：卖五在上，买一在下方首行
pub fn render_trading_depth(snapshot: &DepthSnapshot) -> String {
    let mut result = format!("【⚡ 交易五档盘口: {}】\n", snapshot.name);

    result.push_str("--------卖盘 (阻力)--------\n");
    for (label, level) in ASK_LABELS.iter().zip(&snapshot.asks).rev() {
        result.push_str(&render_level(label, level));
    }

    result.push_str("--------买盘 (支撑)--------\n");
    for (label, level) in BID_LABELS.iter().zip(&snapshot.bids) {
        result.push_str(&render_level(label, level));
    }

    result
}

fn render_level(label: &str, level: &DepthLevel) -> String {
    format!("{}: {} | {}手\n", label, level.price, level.lots)
}

/// 失败提示，附带原始错误描述
pub fn failure(prefix: &str, error: impl std::fmt::Display) -> String {
    format!("{}: {}", prefix, error)
}
