//! 应用层

pub mod dto;
pub mod employee_service;
pub mod sales_service;
pub mod target_service;

pub use employee_service::EmployeeService;
pub use sales_service::SalesService;
pub use target_service::TargetService;
