//! Database connection management

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::{MigrateError, Migrator},
    postgres::PgConnectOptions,
    query_scalar,
};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const PING_SQL: &str = "SELECT 1";

/// Shared handle to the document store.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Round-trip a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        query_scalar::<Postgres, i32>(PING_SQL)
            .fetch_one(&self.pool)
            .await
            .map(|_one| ())
    }

    /// Apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when a migration fails to apply.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        MIGRATOR.run(&self.pool).await
    }

    /// Close every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<Db, sqlx::Error> {
    PgPool::connect(database_url).await.map(Db::new)
}

/// Connect to `PostgreSQL` with pre-built options.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(options: PgConnectOptions) -> Result<Db, sqlx::Error> {
    PgPool::connect_with(options).await.map(Db::new)
}
