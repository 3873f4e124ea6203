//! 持久化实现

mod postgres_employee_repository;
mod postgres_sales_report_repository;
mod postgres_sales_target_repository;
pub mod schema;

pub use postgres_employee_repository::*;
pub use postgres_sales_report_repository::*;
pub use postgres_sales_target_repository::*;
