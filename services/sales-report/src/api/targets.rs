//! 销售目标接口

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
use crate::application::dto::{
    CreatedResponse, PostSalesTargetRequest, TargetListParams, UpdateActualAmountRequest,
    UpdatedResponse,
};
use crate::domain::SalesTarget;

/// GET /api/get_sales_target
pub(super) async fn get_sales_target(
    State(state): State<AppState>,
    params: Result<Query<TargetListParams>, QueryRejection>,
) -> AppResult<Json<Vec<SalesTarget>>> {
    let result = async {
        let params = query_params(params)?;
        state.targets.list_targets(params.location_id.as_deref()).await
    }
    .await;

    observed("get_sales_target", result).map(Json)
}

/// POST /api/post_sales_target
pub(super) async fn post_sales_target(
    State(state): State<AppState>,
    body: Result<Json<PostSalesTargetRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let result = async {
        let request = json_body(body)?;
        state.targets.create_target(request).await
    }
    .await;

    let id = observed("post_sales_target", result)?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Sales target created".to_string(),
            id,
        }),
    ))
}

/// POST /api/update_actual_amount
pub(super) async fn update_actual_amount(
    State(state): State<AppState>,
    body: Result<Json<UpdateActualAmountRequest>, JsonRejection>,
) -> AppResult<Json<UpdatedResponse>> {
    let result = async {
        let request = json_body(body)?;
        state.targets.refresh_actual_amount(request).await
    }
    .await;

    let updated = observed("update_actual_amount", result)?;
    Ok(Json(UpdatedResponse {
        message: "Actual amount updated".to_string(),
        updated,
    }))
}
