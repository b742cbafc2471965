//! 上游字段位置表
//!
//! 上游接口按位置返回字段，位置变化时只需修改这里。

/// 新浪指数简版行情（s_ 前缀）：名称,当前点位,涨跌点数,涨跌幅,...
pub mod sina_index {
    pub const PRICE: usize = 1;
    pub const CHANGE_PERCENT: usize = 3;

    /// 大盘概览请求的指数代码及展示名称（不使用上游返回的名称）
    pub const MARKET_INDICES: [(&str, &str); 3] = [
        ("s_sh000001", "上证指数"),
        ("s_sz399001", "深证成指"),
        ("s_sz399006", "创业板指"),
    ];

    /// 按代码查找展示名称
    pub fn display_name(code: &str) -> Option<&'static str> {
        MARKET_INDICES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }
}

/// 新浪个股完整行情：名称,今开,昨收,现价,...,买一量,买一价,...,卖一量,卖一价,...
pub mod sina_depth {
    pub const NAME: usize = 0;

    /// 买一到买五的 (成交量, 价格) 位置
    pub const BID_LEVELS: [(usize, usize); 5] = [(10, 11), (12, 13), (14, 15), (16, 17), (18, 19)];

    /// 卖一到卖五的 (成交量, 价格) 位置
    pub const ASK_LEVELS: [(usize, usize); 5] = [(20, 21), (22, 23), (24, 25), (26, 27), (28, 29)];

    /// 盘口需要的最少字段数（卖五价位于 29）
    pub const MIN_FIELDS: usize = 30;

    /// 每手股数
    pub const SHARES_PER_LOT: u64 = 100;
}

/// 腾讯行情：v_sh600519="1~贵州茅台~600519~现价~...";
pub mod tencent {
    pub const NAME: usize = 1;
    pub const PRICE: usize = 3;
    pub const CHANGE_AMOUNT: usize = 31;
    pub const CHANGE_PERCENT: usize = 32;
    pub const PE_TTM: usize = 39;
    /// 市净率通常位于 46，字段不足 47 个时退回 44
    pub const PB: usize = 46;
    pub const PB_FALLBACK: usize = 44;
    /// 总市值（亿）
    pub const MARKET_CAP: usize = 45;

    /// 个股行情最少字段数
    pub const MIN_QUOTE_FIELDS: usize = 30;
    /// 基本面最少字段数
    pub const MIN_FUNDAMENTAL_FIELDS: usize = 45;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(sina_index::display_name("s_sh000001"), Some("上证指数"));
        assert_eq!(sina_index::display_name("s_sz399006"), Some("创业板指"));
        assert_eq!(sina_index::display_name("sh000001"), None);
    }

    #[test]
    fn test_depth_levels_within_min_fields() {
        for (volume, price) in sina_depth::BID_LEVELS.iter().chain(sina_depth::ASK_LEVELS.iter()) {
            assert!(*volume < sina_depth::MIN_FIELDS);
            assert!(*price < sina_depth::MIN_FIELDS);
        }
    }
}
