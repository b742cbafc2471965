//! 业务逻辑服务模块
//! 
//! 封装数据获取和处理逻辑

pub mod stock;            // 行情请求、解析与格式化
pub mod stock_service;    // 股票行情服务
pub mod tool_registry;    // 工具注册表
