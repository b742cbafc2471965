//! 函数调用接口处理器
//!
//! 面向云函数调用方：参数为 JSON 映射，返回 `{code, message, data}`
//!
//! ## API 列表
//! - GET|POST /functions/market_overview - 大盘概览（云函数标准返回格式）
//! - POST /functions/stock_price - 个股实时行情
//! - POST /functions/stock_fundamentals - 个股估值指标
//! - POST /functions/trading_depth - 买卖五档盘口

use actix_web::{http::StatusCode, web, HttpResponse, Result};
use serde::Serialize;

use crate::handlers::AppState;
use crate::models::{ApiResponse, FunctionEnvelope, FunctionParams};
use crate::services::stock::{
    failure, render_fundamentals, render_stock_quote, render_trading_depth, QuoteError,
    DEPTH_FAILED, DEPTH_UNAVAILABLE, FUNDAMENTALS_FAILED, FUNDAMENTALS_UNAVAILABLE, QUOTE_FAILED,
    QUOTE_NOT_FOUND,
};

/// 不同接口在“未找到”和“失败”时的提示语
struct Messages {
    not_found: &'static str,
    failed: &'static str,
}

const QUOTE_MESSAGES: Messages = Messages {
    not_found: QUOTE_NOT_FOUND,
    failed: QUOTE_FAILED,
};

const FUNDAMENTALS_MESSAGES: Messages = Messages {
    not_found: FUNDAMENTALS_UNAVAILABLE,
    failed: FUNDAMENTALS_FAILED,
};

const DEPTH_MESSAGES: Messages = Messages {
    not_found: DEPTH_UNAVAILABLE,
    failed: DEPTH_FAILED,
};

/// 将查询结果转换为统一响应
fn into_response<T>(
    result: Result<T, QuoteError>,
    render: fn(&T) -> String,
    messages: &Messages,
) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(render(&data), data),
        Err(QuoteError::MissingSymbol) => ApiResponse::error(400, QuoteError::MissingSymbol.to_string()),
        Err(e) if e.is_data_error() => {
            log::info!("函数调用未找到数据: {}", e);
            ApiResponse::error(404, messages.not_found)
        }
        Err(e) => {
            log::warn!("函数调用失败: {}", e);
            ApiResponse::error(500, failure(messages.failed, e))
        }
    }
}

/// 取出参数中的股票代码，缺失时返回 `MissingSymbol`
fn require_symbol(params: Option<web::Json<FunctionParams>>) -> Result<String, QuoteError> {
    params
        .and_then(|p| p.symbol())
        .ok_or(QuoteError::MissingSymbol)
}

fn respond<T: Serialize>(response: ApiResponse<T>) -> HttpResponse {
    let status = StatusCode::from_u16(response.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(response)
}

/// 大盘概览
///
/// GET|POST /api/v1/functions/market_overview
pub async fn market_overview(state: web::Data<AppState>) -> Result<HttpResponse> {
    let report = state.functions.market_overview_report().await;
    Ok(HttpResponse::Ok().json(FunctionEnvelope::message(report)))
}

/// 个股实时行情
///
/// POST /api/v1/functions/stock_price
///
/// # 参数
/// - symbol 或 param.symbol: 股票代码（如 600519）
pub async fn stock_price(
    state: web::Data<AppState>,
    params: Option<web::Json<FunctionParams>>,
) -> Result<HttpResponse> {
    let result = match require_symbol(params) {
        Ok(symbol) => state.functions.stock_quote(&symbol).await,
        Err(e) => Err(e),
    };
    Ok(respond(into_response(result, render_stock_quote, &QUOTE_MESSAGES)))
}

/// 个股估值指标
///
/// POST /api/v1/functions/stock_fundamentals
pub async fn stock_fundamentals(
    state: web::Data<AppState>,
    params: Option<web::Json<FunctionParams>>,
) -> Result<HttpResponse> {
    let result = match require_symbol(params) {
        Ok(symbol) => state.functions.fundamentals(&symbol).await,
        Err(e) => Err(e),
    };
    Ok(respond(into_response(result, render_fundamentals, &FUNDAMENTALS_MESSAGES)))
}

/// 买卖五档盘口
///
/// POST /api/v1/functions/trading_depth
pub async fn trading_depth(
    state: web::Data<AppState>,
    params: Option<web::Json<FunctionParams>>,
) -> Result<HttpResponse> {
    let result = match require_symbol(params) {
        Ok(symbol) => state.functions.trading_depth(&symbol).await,
        Err(e) => Err(e),
    };
    Ok(respond(into_response(result, render_trading_depth, &DEPTH_MESSAGES)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/functions")
            .route("/market_overview", web::get().to(market_overview))
            .route("/market_overview", web::post().to(market_overview))
            .route("/stock_price", web::post().to(stock_price))
            .route("/stock_fundamentals", web::post().to(stock_fundamentals))
            .route("/trading_depth", web::post().to(trading_depth)),
    );
}
