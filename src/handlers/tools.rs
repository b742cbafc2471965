//! 工具调用接口处理器
//!
//! 面向工具调用框架：按名称调用已注册工具，返回纯文本报告
//!
//! ## API 列表
//! - GET /tools - 获取已注册工具及参数 Schema
//! - POST /tools/{name} - 调用工具，请求体为 JSON 参数

use actix_web::{web, HttpResponse, Result};
use serde_json::{json, Value};

use crate::handlers::AppState;
use crate::models::ApiResponse;

/// 获取工具列表
///
/// GET /api/v1/tools
pub async fn list_tools(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "tools": state.registry.list() })))
}

/// 调用工具
///
/// POST /api/v1/tools/{name}
///
/// # 参数
/// - name: 工具名称（如 stock_price）
/// - 请求体: 工具参数（如 {"symbol": "600519"}），可为空
pub async fn call_tool(
    state: web::Data<AppState>,
    path: web::Path<String>,
    arguments: Option<web::Json<Value>>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    let arguments = arguments.map(|a| a.into_inner()).unwrap_or(Value::Null);
    log::info!("调用工具 {} 参数: {}", name, arguments);

    match state.registry.call(&name, &state.tools, &arguments).await {
        Some(report) => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(report)),
        None => {
            let response = ApiResponse::<()>::error(404, format!("未知工具: {}", name));
            Ok(HttpResponse::NotFound().json(response))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tools")
            .route("", web::get().to(list_tools))
            .route("/{name}", web::post().to(call_tool)),
    );
}
