//! Pooled SQLite connection

use crate::core::settings::Settings;
use di::{Ref, inject, injectable};
use log::debug;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::ops::Deref;
use std::sync::Mutex;

/// Pool handed to every `DatabaseConnection` created while it is set.
///
/// The DI container has no way to receive an externally built pool, so tests
/// park theirs here before building a provider.
static TEST_POOL: Mutex<Option<SqlitePool>> = Mutex::new(None);

pub struct DatabaseConnection {
    connection: SqlitePool,
}

#[injectable]
impl DatabaseConnection {
    #[inject]
    pub fn create(settings: Ref<Settings>) -> DatabaseConnection {
        if let Some(pool) = Self::test_pool() {
            debug!("using test database pool");
            return DatabaseConnection { connection: pool };
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_lazy_with(settings.database.clone());

        DatabaseConnection { connection: pool }
    }
}

impl DatabaseConnection {
    pub fn set_test_pool(pool: SqlitePool) {
        *TEST_POOL.lock().unwrap_or_else(|e| e.into_inner()) = Some(pool);
    }

    pub fn clear_test_pool() {
        *TEST_POOL.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn test_pool() -> Option<SqlitePool> {
        TEST_POOL.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.connection).await
    }

    /// Round trip used by the health endpoint.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.connection).await.map(|_| ())
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}
