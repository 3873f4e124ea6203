//! HTTP API

mod employees;
mod health;
mod sales;
mod state;
mod targets;

pub use state::AppState;

use axum::{
    Router,
    extract::rejection::{JsonRejection, QueryRejection},
    routing::{get, post},
};
use salesdesk_errors::{AppError, AppResult};
use salesdesk_telemetry::{record_error, record_request};

/// 全部路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/get_sales", get(sales::get_sales))
        .route("/api/send_sales", post(sales::send_sales))
        .route("/api/get_sales_target", get(targets::get_sales_target))
        .route("/api/post_sales_target", post(targets::post_sales_target))
        .route("/api/update_actual_amount", post(targets::update_actual_amount))
        .route("/api/get_employee", get(employees::get_employee))
        .route("/api/add_employee", post(employees::add_employee))
        .route("/api/edit_employee", post(employees::edit_employee))
        .route("/api/delete_employee", post(employees::delete_employee))
        .route(
            "/api/get_employee_callback",
            get(employees::get_employee_callback),
        )
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .with_state(state)
}

/// 记录操作计数，失败时额外记录状态码
fn observed<T>(operation: &'static str, result: AppResult<T>) -> AppResult<T> {
    record_request(operation);
    if let Err(ref err) = result {
        record_error(operation, err.status_code());
    }
    result
}

/// 非法 JSON 按 400 处理
fn json_body<T>(body: Result<axum::Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|axum::Json(value)| value)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

/// 查询串无法解析时按 400 处理
fn query_params<T>(params: Result<axum::extract::Query<T>, QueryRejection>) -> AppResult<T> {
    params
        .map(|axum::extract::Query(value)| value)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}
