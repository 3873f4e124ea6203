//! PostgreSQL 员工仓储实现

use async_trait::async_trait;
use salesdesk_adapter_postgres::map_sqlx_error;
use salesdesk_errors::AppResult;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::domain::{
    Employee, EmployeeField, EmployeeProfile, EmployeeRepository, EmployeeUpdate, NewEmployee,
};

/// 只 SET 提供的列，列名来自固定枚举，值全部参数绑定
pub fn employee_update_query(update: &EmployeeUpdate) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE employees SET ");

    let mut assignments = builder.separated(", ");
    for field in update.fields() {
        assignments.push(field.column());
        assignments.push_unseparated(" = ");
        match field {
            EmployeeField::Name(value)
            | EmployeeField::Role(value)
            | EmployeeField::Address(value) => {
                assignments.push_bind_unseparated(value.as_str());
            }
            EmployeeField::Location(value) => {
                assignments.push_bind_unseparated(*value);
            }
        }
    }

    builder.push(" WHERE employee_number = ");
    builder.push_bind(update.employee_number());
    builder
}

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_number, employee_name, location_id, employee_role, employee_address
            FROM employees
            ORDER BY employee_number
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error("list employees"))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees
                (employee_number, employee_name, location_id, employee_role, employee_address, employee_password)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(employee.employee_number)
        .bind(&employee.employee_name)
        .bind(employee.location_id)
        .bind(&employee.employee_role)
        .bind(&employee.employee_address)
        .bind(&employee.password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error("insert employee"))?;

        Ok(())
    }

    async fn update(&self, update: &EmployeeUpdate) -> AppResult<u64> {
        let result = employee_update_query(update)
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error("update employee"))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, employee_number: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_number = $1")
            .bind(employee_number)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error("delete employee"))?;

        Ok(result.rows_affected())
    }

    async fn find_profile_by_address(&self, address: &str) -> AppResult<Option<EmployeeProfile>> {
        let row = sqlx::query_as::<_, EmployeeProfileRow>(
            r#"
            SELECT employee_name, employee_number, employee_role, location_id
            FROM employees
            WHERE employee_address = $1
            "#,
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error("find employee by address"))?;

        Ok(row.map(EmployeeProfile::from))
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    employee_number: i32,
    employee_name: String,
    location_id: i32,
    employee_role: String,
    employee_address: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_number: row.employee_number,
            employee_name: row.employee_name,
            location_id: row.location_id,
            employee_role: row.employee_role,
            employee_address: row.employee_address,
        }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeProfileRow {
    employee_name: String,
    employee_number: i32,
    employee_role: String,
    location_id: i32,
}

impl From<EmployeeProfileRow> for EmployeeProfile {
    fn from(row: EmployeeProfileRow) -> Self {
        Self {
            employee_name: row.employee_name,
            employee_number: row.employee_number,
            employee_role: row.employee_role,
            location_id: row.location_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(
        name: Option<&str>,
        role: Option<&str>,
        address: Option<&str>,
        location: Option<&str>,
    ) -> String {
        let update = EmployeeUpdate::new(Some("7"), name, role, address, location).unwrap();
        employee_update_query(&update).sql().to_string()
    }

    #[test]
    fn test_location_only_update() {
        assert_eq!(
            sql_for(None, None, None, Some("3")),
            "UPDATE employees SET location_id = $1 WHERE employee_number = $2"
        );
    }

    #[test]
    fn test_full_update_keeps_column_order() {
        assert_eq!(
            sql_for(Some("Sato"), Some("manager"), Some("sato@example.com"), Some("3")),
            "UPDATE employees SET employee_name = $1, employee_role = $2, \
             employee_address = $3, location_id = $4 WHERE employee_number = $5"
        );
    }

    #[test]
    fn test_name_and_address_update() {
        assert_eq!(
            sql_for(Some("Sato"), None, Some("sato@example.com"), None),
            "UPDATE employees SET employee_name = $1, employee_address = $2 WHERE employee_number = $3"
        );
    }

    #[test]
    fn test_values_are_never_inlined() {
        let sql = sql_for(Some("Robert'); DROP TABLE employees;--"), None, None, None);
        assert!(!sql.contains("DROP TABLE"));
    }
}
