//! 领域层

pub mod employee;
pub mod input;
pub mod password;
pub mod repositories;
pub mod sales_filter;
pub mod sales_report;
pub mod sales_target;

pub use employee::*;
pub use password::HashedPassword;
pub use repositories::*;
pub use sales_filter::*;
pub use sales_report::*;
pub use sales_target::*;
