use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Connection;

use crate::error::{Error, Result};
use crate::repo::CitaRepo;

/// Handle to the single-file appointment store.
///
/// Cheap to clone; every clone shares the same connection pool. Writers are
/// serialized by SQLite itself.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if absent) the store at `path` and make sure the `citas` table exists
    #[tracing::instrument(name = "Open appointment store", skip(path), fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(Error::StoreUnavailable)?;

        if let Err(e) = Self::ping(&pool).await {
            pool.close().await;
            return Err(Error::StoreUnavailable(e));
        }

        if let Err(e) = CitaRepo::create_table(&pool).await {
            pool.close().await;
            return Err(Error::SchemaError(e));
        }

        tracing::info!("Appointment store and table 'citas' initialized");

        Ok(Self { pool })
    }

    async fn ping(pool: &SqlitePool) -> sqlx::Result<()> {
        let mut conn = pool.acquire().await?;
        conn.ping().await
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Release all store resources. Later queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Appointment store closed");
    }
}
