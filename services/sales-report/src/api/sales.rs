//! 销售记录接口

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use salesdesk_errors::AppResult;

use super::{AppState, json_body, observed, query_params};
use crate::application::dto::{CreatedResponse, SendSalesRequest};
use crate::domain::{SalesFilterParams, SalesReport};

/// GET /api/get_sales
pub(super) async fn get_sales(
    State(state): State<AppState>,
    params: Result<Query<SalesFilterParams>, QueryRejection>,
) -> AppResult<Json<Vec<SalesReport>>> {
    let result = async {
        let params = query_params(params)?;
        state.sales.find_sales(&params).await
    }
    .await;

    observed("get_sales", result).map(Json)
}

/// POST /api/send_sales
pub(super) async fn send_sales(
    State(state): State<AppState>,
    body: Result<Json<SendSalesRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let result = async {
        let request = json_body(body)?;
        state.sales.send_sales(request).await
    }
    .await;

    let id = observed("send_sales", result)?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Sales report recorded".to_string(),
            id,
        }),
    ))
}
