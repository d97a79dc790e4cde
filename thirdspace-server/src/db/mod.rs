//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One `PgPool` per process, shared through `AppState`
//! - One statement per request; sqlx auto-commits it
//! - Rely on DB constraints, classify violations - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
