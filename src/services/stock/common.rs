//! 公共常量和辅助函数

use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use serde::{Deserialize, Serialize};

// ==================== 行情 API 常量 ====================

/// 新浪实时行情 API（指数、盘口）
pub const SINA_QUOTE_API: &str = "http://hq.sinajs.cn";
/// 新浪接口要求的 Referer
pub const SINA_REFERER: &str = "https://finance.sina.com.cn";
/// 腾讯实时行情 API（个股、基本面）
pub const TENCENT_QUOTE_API: &str = "http://qt.gtimg.cn";

/// 单次请求超时时间（秒），不可配置，不重试
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// 获取北京时间 HH:MM:SS
pub fn get_beijing_clock() -> String {
    Utc::now().with_timezone(&Shanghai).format("%H:%M:%S").to_string()
}

/// 股票代码标准化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// 先去除空白并转大写，再判断前缀
    Canonical,
    /// 直接按原样判断前缀
    Verbatim,
}

/// 将股票代码标准化为带交易所前缀的形式，如 600519 -> sh600519
///
/// 对任意输入都有结果，且对已标准化的代码幂等。
pub fn normalize_code(symbol: &str, mode: NormalizeMode) -> String {
    let symbol = match mode {
        NormalizeMode::Canonical => symbol.trim().to_uppercase(),
        NormalizeMode::Verbatim => symbol.to_string(),
    };

    if let Some(prefix) = exchange_prefix(&symbol) {
        return format!("{}{}", prefix, &symbol[2..]);
    }

    match symbol.chars().next() {
        Some('6') | Some('5') => format!("sh{}", symbol),
        Some('0') | Some('3') | Some('1') => format!("sz{}", symbol),
        _ => symbol,
    }
}

/// 识别 sh/sz 前缀（不区分大小写），返回小写前缀
fn exchange_prefix(symbol: &str) -> Option<&'static str> {
    let head = symbol.get(..2)?;
    if head.eq_ignore_ascii_case("sh") {
        Some("sh")
    } else if head.eq_ignore_ascii_case("sz") {
        Some("sz")
    } else {
        None
    }
}
