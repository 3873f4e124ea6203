//! 基础设施层

pub mod database;
pub mod persistence;

pub use database::{PostgresProbe, connect};
