//! salesdesk-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 5xx 响应对外统一使用的描述，内部细节只写日志
const GENERIC_SERVER_ERROR: &str = "Internal server error";

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 无法连接存储（网络、TLS、连接池超时）
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 存储拒绝语句（约束冲突、语法错误、解码失败）
    #[error("Store rejected statement: {0}")]
    StoreRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn store_rejected(msg: impl Into<String>) -> Self {
        Self::StoreRejected(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::StoreUnavailable(_) => 500,
            Self::StoreRejected(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// 是否为服务端错误
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 转换为 Problem Details
    ///
    /// 服务端错误只返回通用描述，不透传存储层原始信息
    pub fn to_problem_details(&self) -> ProblemDetails {
        let detail = if self.is_server_error() {
            GENERIC_SERVER_ERROR.to_string()
        } else {
            self.message().to_string()
        };

        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail,
            instance: None,
        }
    }

    /// 错误携带的原始信息
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::StoreUnavailable(msg)
            | Self::StoreRejected(msg)
            | Self::Internal(msg) => msg,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::Validation(_) => "https://api.salesdesk.dev/problems/validation".to_string(),
            Self::NotFound(_) => "https://api.salesdesk.dev/problems/not-found".to_string(),
            Self::StoreUnavailable(_) => {
                "https://api.salesdesk.dev/problems/store-unavailable".to_string()
            }
            Self::StoreRejected(_) => "https://api.salesdesk.dev/problems/store-rejected".to_string(),
            Self::Internal(_) => "https://api.salesdesk.dev/problems/internal".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::Validation(_) => "Bad Request".to_string(),
            Self::NotFound(_) => "Resource Not Found".to_string(),
            Self::StoreUnavailable(_) => "Internal Server Error".to_string(),
            Self::StoreRejected(_) => "Internal Server Error".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let problem = self.to_problem_details();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(problem)).into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::validation("x").status_code(), 400);
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::store_unavailable("x").status_code(), 500);
        assert_eq!(AppError::store_rejected("x").status_code(), 500);
        assert_eq!(AppError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_client_error_keeps_detail() {
        let problem = AppError::validation("sales_date is required").to_problem_details();
        assert_eq!(problem.status, 400);
        assert_eq!(problem.detail, "sales_date is required");
        assert!(problem.r#type.ends_with("/validation"));
    }

    #[test]
    fn test_server_error_hides_store_detail() {
        let err = AppError::store_rejected(
            "insert sales report: duplicate key value violates unique constraint",
        );
        let problem = err.to_problem_details();

        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail, GENERIC_SERVER_ERROR);
        assert!(!problem.detail.contains("duplicate key"));
        // 原始信息仍保留在错误本身，供日志使用
        assert!(err.to_string().contains("duplicate key"));
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::not_found("Employee 42 not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let problem: ProblemDetails = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(problem.status, 404);
        assert_eq!(problem.detail, "Employee 42 not found");
        assert!(problem.instance.is_none());
    }
}
