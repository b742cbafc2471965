pub mod functions;
pub mod health;
pub mod tools;

use actix_web::web;

use crate::services::stock_service::StockService;
use crate::services::tool_registry::ToolRegistry;

/// 各处理器共享的状态
///
/// 两个服务共用同一个数据源，仅格式化选项不同。
pub struct AppState {
    /// 函数调用入口使用的服务
    pub functions: StockService,
    /// 工具注册入口使用的服务
    pub tools: StockService,
    pub registry: ToolRegistry,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::config)
            .configure(functions::config)
            .configure(tools::config)
    );
}
