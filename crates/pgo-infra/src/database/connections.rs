use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations right after connecting.
    pub auto_migrate: bool,
}

/// The single connection pool shared by every request.
///
/// Built once at startup and handed to the repositories that need it.
pub struct DatabaseHandle {
    pub main: DbConn,
}

impl DatabaseHandle {
    /// Open the pool and, if configured, bring the schema up to date.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        if config.auto_migrate {
            Migrator::up(&main, None).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self { main })
    }
}
