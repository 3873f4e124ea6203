//! 员工与部分更新

use serde::Serialize;

use super::input::{parse_number, present, required};
use crate::error::DomainError;

/// 员工（不含密码）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub employee_number: i32,
    pub employee_name: String,
    pub location_id: i32,
    pub employee_role: String,
    pub employee_address: Option<String>,
}

/// 待写入的员工，密码已哈希
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_number: i32,
    pub employee_name: String,
    pub location_id: i32,
    pub employee_role: String,
    pub employee_address: Option<String>,
    pub password_hash: Option<String>,
}

/// 登录回调返回的员工信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeProfile {
    pub employee_name: String,
    pub employee_number: i32,
    pub employee_role: String,
    pub location_id: i32,
}

/// 可修改的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeField {
    Name(String),
    Role(String),
    Address(String),
    Location(i32),
}

impl EmployeeField {
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "employee_name",
            Self::Role(_) => "employee_role",
            Self::Address(_) => "employee_address",
            Self::Location(_) => "location_id",
        }
    }
}

/// 部分更新：只包含调用方提供的字段
///
/// 字段顺序固定为 name, role, address, location，生成的语句稳定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    employee_number: i32,
    fields: Vec<EmployeeField>,
}

impl EmployeeUpdate {
    pub fn new(
        employee_number: Option<&str>,
        employee_name: Option<&str>,
        employee_role: Option<&str>,
        employee_address: Option<&str>,
        location_id: Option<&str>,
    ) -> Result<Self, DomainError> {
        let employee_number =
            parse_number("employee_number", required("employee_number", employee_number)?)?;

        let mut fields = Vec::with_capacity(4);
        if let Some(name) = present(employee_name) {
            fields.push(EmployeeField::Name(name.to_string()));
        }
        if let Some(role) = present(employee_role) {
            fields.push(EmployeeField::Role(role.to_string()));
        }
        if let Some(address) = present(employee_address) {
            fields.push(EmployeeField::Address(address.to_string()));
        }
        if let Some(location) = present(location_id) {
            fields.push(EmployeeField::Location(parse_number("location_id", location)?));
        }

        if fields.is_empty() {
            return Err(DomainError::NoUpdateFields);
        }

        Ok(Self {
            employee_number,
            fields,
        })
    }

    pub fn employee_number(&self) -> i32 {
        self.employee_number
    }

    pub fn fields(&self) -> &[EmployeeField] {
        &self.fields
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.fields.iter().map(EmployeeField::column).collect()
    }
}
