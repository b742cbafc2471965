//! A 股行情工具服务
//!
//! 提供大盘指数、个股行情、估值指标、五档盘口四个工具，
//! 同时以函数调用和工具注册两种方式对外提供
//! 数据来源：新浪财经、腾讯财经

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{web, App, HttpServer, middleware::Logger};
use env_logger::Env;
use std::env;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::middleware::ApiKeyMiddleware;
use crate::services::stock::{HttpQuoteSource, QuoteSource};
use crate::services::stock_service::StockService;
use crate::services::tool_registry::ToolRegistry;

/// 应用程序入口
///
/// 加载配置，构建共享的行情数据源和工具注册表，启动 HTTP 服务器
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(loaded.config.log.level.as_str()));
    loaded.log();
    let mut config = loaded.config;

    // 环境变量中的 API Key 优先
    if let Ok(api_key) = env::var("API_KEY") {
        config.api.api_key = api_key;
    }
    if config.api.api_key.is_empty() {
        log::warn!("未设置 API_KEY，接口不启用认证");
    }

    let source: Arc<dyn QuoteSource> = Arc::new(HttpQuoteSource::new()?);
    let state = web::Data::new(AppState {
        functions: StockService::new(source.clone(), config.endpoints(), config.profiles.functions),
        tools: StockService::new(source, config.endpoints(), config.profiles.tools),
        registry: ToolRegistry::with_stock_tools(),
    });

    log::info!(
        "格式化选项: 函数入口 {:?}, 工具入口 {:?}",
        state.functions.options(),
        state.tools.options()
    );

    let bind_addr = config.bind_addr();
    log::info!("启动 A 股行情工具服务: {}", bind_addr);

    let api_key = config.api.api_key.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(ApiKeyMiddleware::new(api_key.clone()))  // API Key 认证
            .wrap(Logger::default())  // 添加请求日志中间件
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await?;
    Ok(())
}
