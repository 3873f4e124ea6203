//! Sales Report Service Library
//!
//! 模块划分：
//! - `domain`: 实体、枚举、查询条件与部分更新的解析、仓储 trait
//! - `application`: 请求 DTO 与应用服务
//! - `infrastructure`: PostgreSQL 仓储实现、建表计划
//! - `api`: axum HTTP 路由

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runtime;
