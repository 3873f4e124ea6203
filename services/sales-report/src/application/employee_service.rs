//! 员工目录服务

use std::sync::Arc;

use salesdesk_errors::{AppError, AppResult};
use tracing::{debug, info};

use super::dto::{AddEmployeeRequest, DeleteEmployeeRequest, EditEmployeeRequest};
use crate::domain::input::{parse_number, present, require_all, required};
use crate::domain::{Employee, EmployeeProfile, EmployeeRepository, HashedPassword, NewEmployee};

pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.employees.list().await
    }

    /// 新增员工，密码以 argon2 哈希保存
    pub async fn add_employee(&self, request: AddEmployeeRequest) -> AppResult<i32> {
        require_all(&[
            ("employee_number", request.employee_number.as_deref()),
            ("employee_name", request.employee_name.as_deref()),
            ("location_id", request.location_id.as_deref()),
            ("employee_role", request.employee_role.as_deref()),
        ])?;

        let password_hash = present(request.employee_password.as_deref())
            .map(HashedPassword::from_plain)
            .transpose()?
            .map(HashedPassword::into_inner);

        let employee = NewEmployee {
            employee_number: parse_number(
                "employee_number",
                required("employee_number", request.employee_number.as_deref())?,
            )?,
            employee_name: required("employee_name", request.employee_name.as_deref())?.to_string(),
            location_id: parse_number(
                "location_id",
                required("location_id", request.location_id.as_deref())?,
            )?,
            employee_role: required("employee_role", request.employee_role.as_deref())?.to_string(),
            employee_address: present(request.employee_address.as_deref()).map(str::to_string),
            password_hash,
        };

        self.employees.insert(&employee).await?;
        info!(employee_number = employee.employee_number, "Employee added");
        Ok(employee.employee_number)
    }

    /// 只更新提供的字段
    pub async fn edit_employee(&self, request: EditEmployeeRequest) -> AppResult<()> {
        let update = request.into_update()?;
        let affected = self.employees.update(&update).await?;

        if affected == 0 {
            return Err(AppError::not_found(format!(
                "Employee {} not found",
                update.employee_number()
            )));
        }

        info!(
            employee_number = update.employee_number(),
            columns = ?update.columns(),
            "Employee updated"
        );
        Ok(())
    }

    pub async fn delete_employee(&self, request: DeleteEmployeeRequest) -> AppResult<()> {
        let employee_number = request.employee_number()?;
        let affected = self.employees.delete(employee_number).await?;

        if affected == 0 {
            return Err(AppError::not_found(format!(
                "Employee {} not found",
                employee_number
            )));
        }

        info!(employee_number, "Employee deleted");
        Ok(())
    }

    /// 登录回调：未登记的地址返回 None，不是错误
    pub async fn find_by_address(&self, email: Option<&str>) -> AppResult<Option<EmployeeProfile>> {
        let address = required("email", email)?;
        let profile = self.employees.find_profile_by_address(address).await?;

        debug!(registered = profile.is_some(), "Login callback lookup");
        Ok(profile)
    }
}
