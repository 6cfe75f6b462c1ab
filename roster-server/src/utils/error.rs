//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`]，经 `IntoResponse` 序列化为
//! `{ error, message, details }` 响应体。
//!
//! # 错误映射
//!
//! | 变体 | 状态码 | 说明 |
//! |------|--------|------|
//! | NotFound | 404 | 资源不存在 |
//! | Storage | 500 | 存储层失败，details 携带底层原因 |
//! | Internal | 500 | 其他内部错误 |
//!
//! 存储错误 1:1 映射到状态码，不做重试。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use tracing::error;

use crate::store::StoreError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源不存在 (404)
    #[error("{0}")]
    NotFound(String),

    /// 存储层错误 (500)
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: StoreError,
    },

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 包装存储错误并附加上下文消息
    pub fn storage(message: impl Into<String>, source: StoreError) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),

            AppError::Storage { message, source } => {
                error!(target: "store", error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    message,
                    Some(source.to_string()),
                )
            }

            AppError::Internal(msg) => {
                // 记录内部错误但不暴露详细信息
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
