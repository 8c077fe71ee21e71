pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use repositories::SeaOrmPoiRepository;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./poi.db?mode=rwc")
    pub url: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./poi.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory SQLite database.
    ///
    /// Limited to one connection: every pooled SQLite connection would
    /// otherwise open its own empty database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

#[cfg(test)]
pub(crate) mod testing {
    use sea_orm::DatabaseConnection;
    use sea_orm_migration::MigratorTrait;

    use super::migrator::Migrator;
    use super::{init_database, DatabaseConfig};

    /// Fresh in-memory database with every migration applied.
    pub async fn migrated_memory_db() -> DatabaseConnection {
        let db = init_database(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory sqlite");
        Migrator::up(&db, None).await.expect("migrations");
        db
    }
}
