//! Process-wide PostgreSQL pool
//!
//! Built once at startup and shared by every handler through `AppState`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Pool settings; a limit of zero is raised to one.
fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(max_connections.max(1))
}

/// Connect with the default connection limit.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the first connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect with a custom connection limit (`serve --max-connections`).
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(max_connections).connect(database_url).await?;

    tracing::debug!(
        max_connections = pool.options().get_max_connections(),
        "database pool ready"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::SpaceRepo;

    #[test]
    fn zero_limit_is_raised_to_one() {
        assert_eq!(pool_options(0).get_max_connections(), 1);
        assert_eq!(pool_options(12).get_max_connections(), 12);
    }

    #[tokio::test]
    async fn rejects_unparsable_url() {
        let err = create_pool("not a url").await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn handlers_share_a_small_pool() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 2).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        // More concurrent readers than connections: each waits for a handle
        let readers: Vec<_> = (0..8)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move { SpaceRepo::new(&pool).list().await.map(|s| s.len()) })
            })
            .collect();

        for reader in readers {
            reader.await.expect("task panicked").expect("list failed");
        }
        assert!(pool.size() <= 2);
    }
}
