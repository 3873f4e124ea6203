//! 员工接口

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use salesdesk_errors::AppResult;
use serde::Serialize;

use super::{AppState, json_body, observed, query_params};
use crate::application::dto::{
    AddEmployeeRequest, DeleteEmployeeRequest, EditEmployeeRequest, EmployeeCallbackParams,
    MessageResponse,
};
use crate::domain::{Employee, EmployeeProfile};

/// 登录回调的响应体，未登记时为 `{}`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CallbackResponse {
    Found(EmployeeProfile),
    Unregistered {},
}

/// GET /api/get_employee
pub(super) async fn get_employee(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let result = state.employees.list_employees().await;
    observed("get_employee", result).map(Json)
}

/// POST /api/add_employee
pub(super) async fn add_employee(
    State(state): State<AppState>,
    body: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let result = async {
        let request = json_body(body)?;
        state.employees.add_employee(request).await
    }
    .await;

    let employee_number = observed("add_employee", result)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Employee {} added",
            employee_number
        ))),
    ))
}

/// POST /api/edit_employee
pub(super) async fn edit_employee(
    State(state): State<AppState>,
    body: Result<Json<EditEmployeeRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let result = async {
        let request = json_body(body)?;
        state.employees.edit_employee(request).await
    }
    .await;

    observed("edit_employee", result)?;
    Ok(Json(MessageResponse::new("Employee updated")))
}

/// POST /api/delete_employee
pub(super) async fn delete_employee(
    State(state): State<AppState>,
    body: Result<Json<DeleteEmployeeRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let result = async {
        let request = json_body(body)?;
        state.employees.delete_employee(request).await
    }
    .await;

    observed("delete_employee", result)?;
    Ok(Json(MessageResponse::new("Employee deleted")))
}

/// GET /api/get_employee_callback
pub(super) async fn get_employee_callback(
    State(state): State<AppState>,
    params: Result<Query<EmployeeCallbackParams>, QueryRejection>,
) -> AppResult<Json<CallbackResponse>> {
    let result = async {
        let params = query_params(params)?;
        state.employees.find_by_address(params.email.as_deref()).await
    }
    .await;

    let profile = observed("get_employee_callback", result)?;
    Ok(Json(match profile {
        Some(profile) => CallbackResponse::Found(profile),
        None => CallbackResponse::Unregistered {},
    }))
}
