//! thirdspace-server: HTTP backend for a "third spaces" directory
//!
//! Users register, spaces (physical locations) are listed, and users post
//! reviews of spaces. Every handler validates its input, runs one SQL
//! statement against the shared pool, and maps the outcome to JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig};
