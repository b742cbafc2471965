//! 工具描述模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 对外公开的工具信息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolInfo {
    /// 工具名称
    pub name: String,
    /// 工具说明
    pub description: String,
    /// 参数 JSON Schema
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}
