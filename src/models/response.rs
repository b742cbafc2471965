//! 通用 API 响应模型
//!
//! 定义函数调用入口的统一返回格式

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 统一 API 响应结构
///
/// 所有函数调用接口返回统一格式，包含：
/// - code: 200 成功、400 缺少参数、404 未找到、500 查询失败
/// - message: 响应消息（成功时为格式化后的行情文本）
/// - data: 响应数据（失败时为 null）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 业务状态码
    pub code: u16,
    /// 响应消息
    pub message: String,
    /// 响应数据
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    ///
    /// # 参数
    /// - message: 展示用文本
    /// - data: 响应数据
    pub fn success(message: String, data: T) -> Self {
        Self {
            code: 200,
            message,
            data: Some(data),
        }
    }

    /// 创建错误响应
    ///
    /// # 参数
    /// - code: 业务状态码
    /// - message: 错误信息
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// 云函数标准返回格式
///
/// `body` 为 JSON 字符串，内容为 `{"message": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct MessageBody {
    message: String,
}

impl FunctionEnvelope {
    /// 包装一段文本消息
    pub fn message(message: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        // 只有一个字符串字段，序列化不会失败
        let body = serde_json::to_string(&MessageBody { message })
            .unwrap_or_else(|_| String::from("{}"));

        Self {
            status_code: 200,
            headers,
            body,
        }
    }
}
