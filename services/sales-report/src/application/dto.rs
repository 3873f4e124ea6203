//! 请求与响应 DTO
//!
//! 前端既会发送字符串也会发送数字，请求字段统一按文本接收，
//! 由领域层解析。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::input::{optional_text, parse_date, parse_number, required, require_all};
use crate::domain::{EmployeeUpdate, NewSalesReport, NewSalesTarget, MEMO_MAX_CHARS};
use crate::error::DomainError;

/// 字符串、数字、null 都接受，其余类型报错
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

// ---------------------------------------------------------------------------
// 销售记录
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendSalesRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub sales_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sales_channel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tactics: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub memo: Option<String>,
}

impl SendSalesRequest {
    /// 先报告全部缺失字段，再逐个解析
    pub fn into_new_report(self) -> Result<NewSalesReport, DomainError> {
        require_all(&[
            ("sales_date", self.sales_date.as_deref()),
            ("location_id", self.location_id.as_deref()),
            ("amount", self.amount.as_deref()),
        ])?;
        require_all(&[
            ("sales_channel", self.sales_channel.as_deref()),
            ("category", self.category.as_deref()),
            ("tactics", self.tactics.as_deref()),
            ("employee_number", self.employee_number.as_deref()),
        ])?;

        Ok(NewSalesReport {
            sales_date: parse_date("sales_date", required("sales_date", self.sales_date.as_deref())?)?,
            location_id: parse_number(
                "location_id",
                required("location_id", self.location_id.as_deref())?,
            )?,
            amount: parse_number("amount", required("amount", self.amount.as_deref())?)?,
            sales_channel: required("sales_channel", self.sales_channel.as_deref())?.parse()?,
            category: required("category", self.category.as_deref())?.parse()?,
            tactics: required("tactics", self.tactics.as_deref())?.parse()?,
            employee_number: parse_number(
                "employee_number",
                required("employee_number", self.employee_number.as_deref())?,
            )?,
            memo: optional_text("memo", self.memo.as_deref(), MEMO_MAX_CHARS)?,
        })
    }
}

/// 创建成功的响应
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// 通用消息响应
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// 销售目标
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetListParams {
    pub location_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostSalesTargetRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub target_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub target_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub memo: Option<String>,
}

impl PostSalesTargetRequest {
    pub fn into_new_target(self) -> Result<NewSalesTarget, DomainError> {
        require_all(&[
            ("target_date", self.target_date.as_deref()),
            ("location_id", self.location_id.as_deref()),
            ("target_amount", self.target_amount.as_deref()),
        ])?;

        Ok(NewSalesTarget {
            target_date: parse_date(
                "target_date",
                required("target_date", self.target_date.as_deref())?,
            )?,
            location_id: parse_number(
                "location_id",
                required("location_id", self.location_id.as_deref())?,
            )?,
            target_amount: parse_number(
                "target_amount",
                required("target_amount", self.target_amount.as_deref())?,
            )?,
            memo: optional_text("memo", self.memo.as_deref(), MEMO_MAX_CHARS)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActualAmountRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sales_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    pub message: String,
    pub updated: u64,
}

// ---------------------------------------------------------------------------
// 员工
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddEmployeeRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditEmployeeRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location_id: Option<String>,
}

impl EditEmployeeRequest {
    pub fn into_update(self) -> Result<EmployeeUpdate, DomainError> {
        EmployeeUpdate::new(
            self.employee_number.as_deref(),
            self.employee_name.as_deref(),
            self.employee_role.as_deref(),
            self.employee_address.as_deref(),
            self.location_id.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteEmployeeRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_number: Option<String>,
}

impl DeleteEmployeeRequest {
    pub fn employee_number(&self) -> Result<i32, DomainError> {
        parse_number(
            "employee_number",
            required("employee_number", self.employee_number.as_deref())?,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeCallbackParams {
    pub email: Option<String>,
}
