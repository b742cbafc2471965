//! 行情工具错误类型

use thiserror::Error;

/// 行情查询过程中的错误
///
/// 按处理方式分为四类：缺少输入、网络传输失败、数据不足或格式错误、其他意外错误。
/// 适配层根据类别决定返回码和提示语，任何错误都不会越过工具边界。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// 未提供股票代码，不发起请求
    #[error("请输入股票代码")]
    MissingSymbol,

    /// 连接失败、超时、响应无法解码等
    #[error("{0}")]
    Transport(String),

    /// 响应字段数量不足
    #[error("数据字段不足: 需要 {required} 个, 实际 {actual} 个")]
    InsufficientFields { required: usize, actual: usize },

    /// 响应中没有引号包裹的数据段
    #[error("上游未返回行情数据")]
    NoData,

    /// 字段内容无法解析
    #[error("无法解析响应数据: {0}")]
    Malformed(String),

    /// 其他意外错误
    #[error("{0}")]
    Unexpected(String),
}

impl QuoteError {
    /// 是否属于数据不足/格式错误类（对外表现为“未找到”或“不可用”）
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            QuoteError::NoData | QuoteError::InsufficientFields { .. } | QuoteError::Malformed(_)
        )
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        QuoteError::Transport(err.to_string())
    }
}
