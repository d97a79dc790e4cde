//! Command implementations for the thirdspace CLI

pub mod migrate;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

use anyhow::{Context, Result};

/// Resolve the database URL from the flag/env value.
///
/// Absence is fatal: the server never starts without a database.
pub(crate) fn require_database_url(value: Option<String>) -> Result<String> {
    value
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, the DATABASE_URL env var, or a .env file")
}
