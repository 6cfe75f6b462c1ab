//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工目录接口

pub mod employees;
pub mod health;

use crate::utils::AppError;

/// 兜底路由 - 未匹配的路径统一返回 404
pub async fn fallback() -> AppError {
    AppError::not_found("Route not found")
}
