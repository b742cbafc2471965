//! 股票数据模型
//!
//! 定义行情工具返回的数据结构，所有数值保持上游原始文本

use serde::{Deserialize, Serialize};

/// 大盘指数行情
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndexQuote {
    /// 指数代码（如 s_sh000001）
    pub code: String,
    /// 展示名称（固定映射，不取上游名称）
    pub name: String,
    /// 当前点位
    pub price: String,
    /// 涨跌幅（百分比）
    pub change_percent: String,
    /// 涨跌幅数值，用于决定涨跌图标
    #[serde(skip)]
    pub change_value: f64,
}

/// 个股实时行情
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StockQuote {
    /// 股票名称
    pub name: String,
    /// 标准化后的代码（如 sh600519）
    pub symbol: String,
    /// 当前价格
    pub price: String,
    /// 涨跌幅（百分比）
    pub change_percent: String,
    /// 涨跌额
    pub change_amount: String,
    /// 更新时间（北京时间 HH:MM:SS，格式化时生成）
    pub update_time: String,
}

/// 个股基本面/估值指标
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FundamentalsSnapshot {
    /// 股票名称
    pub name: String,
    /// 市盈率（TTM），上游为空时为 None
    pub pe: Option<String>,
    /// 市净率
    pub pb: String,
    /// 总市值（亿）
    pub market_cap: Option<String>,
}

/// 盘口单档
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DepthLevel {
    /// 价格
    pub price: String,
    /// 挂单量（手）
    pub lots: u64,
}

/// 买卖五档盘口
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DepthSnapshot {
    /// 证券名称
    pub name: String,
    /// 卖一到卖五
    pub asks: Vec<DepthLevel>,
    /// 买一到买五
    pub bids: Vec<DepthLevel>,
}

/// 函数调用参数
///
/// `symbol` 可以在顶层，也可以嵌套在 `param` 中；
/// `param` 不是对象时忽略，不影响顶层参数
#[derive(Debug, Default, Deserialize)]
pub struct FunctionParams {
    #[serde(default)]
    pub symbol: Option<serde_json::Value>,
    #[serde(default)]
    pub param: Option<serde_json::Value>,
}

impl FunctionParams {
    /// 取出股票代码，顶层为空时回退到 `param.symbol`
    pub fn symbol(&self) -> Option<String> {
        symbol_text(self.symbol.as_ref()).or_else(|| {
            self.param
                .as_ref()
                .and_then(|nested| nested.as_object())
                .and_then(|nested| symbol_text(nested.get("symbol")))
        })
    }
}

/// 字符串或数字形式的代码统一转为文本，空值视为缺失
fn symbol_text(value: Option<&serde_json::Value>) -> Option<String> {
    let text = match value? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
