//! salesdesk-adapter-postgres - PostgreSQL 适配器

mod bootstrap;
mod config;
mod connection;
mod error;

pub use bootstrap::*;
pub use config::*;
pub use connection::*;
pub use error::*;
