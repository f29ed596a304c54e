//! # Blogicum Infrastructure
//!
//! Concrete implementations of the ports defined in `blogicum-core`:
//! SeaORM entities and repositories for PostgreSQL.

pub mod database;

pub use database::{DatabaseConfig, Repositories, connect};
pub use sea_orm::DbConn;
