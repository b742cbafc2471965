//! 工具注册表
//!
//! 启动时显式构建的工具描述集合（名称、说明、参数 Schema、处理函数），
//! 每个工具都只返回文本报告。

use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::models::ToolInfo;
use crate::services::stock_service::StockService;

/// 工具处理函数
pub type ToolHandler = for<'a> fn(&'a StockService, &'a Value) -> BoxFuture<'a, String>;

/// 单个工具描述
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    handler: ToolHandler,
}

impl ToolDescriptor {
    pub fn new(
        name: &'static str,
        description: &'static str,
        input_schema: Value,
        handler: ToolHandler,
    ) -> Self {
        Self {
            name,
            description,
            input_schema,
            handler,
        }
    }

    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema.clone(),
        }
    }

    pub async fn call(&self, service: &StockService, arguments: &Value) -> String {
        (self.handler)(service, arguments).await
    }
}

/// 工具注册表
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册工具，同名工具会被替换
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.name == descriptor.name) {
            log::warn!("工具 {} 重复注册，替换旧定义", descriptor.name);
            *existing = descriptor;
        } else {
            log::debug!("注册工具: {}", descriptor.name);
            self.tools.push(descriptor);
        }
    }

    /// 注册四个行情工具
    pub fn with_stock_tools() -> Self {
        let mut registry = Self::new();
        registry.register(ToolDescriptor::new(
            "market_overview",
            "获取 A 股核心大盘指数（上证、深证、创业板）的实时行情，用于分析整体市场情绪。",
            json!({ "type": "object", "properties": {} }),
            market_overview,
        ));
        registry.register(ToolDescriptor::new(
            "stock_price",
            "查询个股当前价格、涨跌幅。",
            symbol_schema("股票代码，如 \"600519\""),
            stock_price,
        ));
        registry.register(ToolDescriptor::new(
            "stock_fundamentals",
            "获取个股的重要财务指标：市盈率(PE)、市净率(PB)、总市值，用于估值分析。",
            symbol_schema("股票代码"),
            stock_fundamentals,
        ));
        registry.register(ToolDescriptor::new(
            "trading_depth",
            "查看股票的买卖五档盘口（买一到买五，卖一到卖五），用于分析短期资金博弈情况。",
            symbol_schema("股票代码"),
            trading_depth,
        ));
        registry
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(ToolDescriptor::info).collect()
    }

    /// 调用指定工具，未注册时返回 None
    pub async fn call(&self, name: &str, service: &StockService, arguments: &Value) -> Option<String> {
        match self.get(name) {
            Some(tool) => Some(tool.call(service, arguments).await),
            None => None,
        }
    }
}

fn symbol_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "symbol": {
                "type": "string",
                "description": description
            }
        },
        "required": ["symbol"]
    })
}

/// 取出 symbol 参数，接受字符串或数字
fn symbol_arg(arguments: &Value) -> String {
    match arguments.get("symbol") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn market_overview<'a>(service: &'a StockService, _arguments: &'a Value) -> BoxFuture<'a, String> {
    Box::pin(service.market_overview_report())
}

fn stock_price<'a>(service: &'a StockService, arguments: &'a Value) -> BoxFuture<'a, String> {
    Box::pin(async move { service.stock_price_report(&symbol_arg(arguments)).await })
}

fn stock_fundamentals<'a>(service: &'a StockService, arguments: &'a Value) -> BoxFuture<'a, String> {
    Box::pin(async move { service.fundamentals_report(&symbol_arg(arguments)).await })
}

fn trading_depth<'a>(service: &'a StockService, arguments: &'a Value) -> BoxFuture<'a, String> {
    Box::pin(async move { service.trading_depth_report(&symbol_arg(arguments)).await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stock::{mock_tencent_body, FormatOptions};
    use crate::services::stock_service::tests::{service, FakeSource};

    #[test]
    fn test_with_stock_tools() {
        let registry = ToolRegistry::with_stock_tools();
        let names: Vec<String> = registry.list().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["market_overview", "stock_price", "stock_fundamentals", "trading_depth"]
        );
        assert_eq!(
            registry.get("stock_price").unwrap().input_schema["required"],
            json!(["symbol"])
        );
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ToolRegistry::with_stock_tools();
        registry.register(ToolDescriptor::new(
            "stock_price",
            "replaced",
            json!({}),
            stock_price,
        ));
        assert_eq!(registry.list().len(), 4);
        assert_eq!(registry.get("stock_price").unwrap().description, "replaced");
    }

    #[test]
    fn test_symbol_arg() {
        assert_eq!(symbol_arg(&json!({"symbol": "600519"})), "600519");
        assert_eq!(symbol_arg(&json!({"symbol": 600519})), "600519");
        assert_eq!(symbol_arg(&json!({})), "");
        assert_eq!(symbol_arg(&Value::Null), "");
    }

    /// 通过注册表调用工具
    #[tokio::test]
    async fn test_call_tool() {
        let registry = ToolRegistry::with_stock_tools();
        let source = FakeSource::body(mock_tencent_body(50));
        let svc = service(source.clone(), FormatOptions::tool_profile());

        let report = registry
            .call("stock_price", &svc, &json!({"symbol": "600519"}))
            .await
            .unwrap();
        assert!(report.contains("贵州茅台 (sh600519)"));

        assert!(registry.call("missing_tool", &svc, &json!({})).await.is_none());
        assert_eq!(source.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_call_tool_timeout() {
        let registry = ToolRegistry::with_stock_tools();
        let svc = service(FakeSource::timeout(), FormatOptions::tool_profile());

        let report = registry.call("market_overview", &svc, &json!({})).await.unwrap();
        assert_eq!(report, "大盘数据获取失败: operation timed out");
    }
}
