//! Application state - shared across all handlers.

use std::sync::Arc;

use overflow_core::QaService;
use overflow_core::ports::{PasswordService, TokenService};
use overflow_infra::{Argon2PasswordService, JwtTokenService, in_memory_service};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub service: QaService,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    /// Storage backend name reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    pub fn new(
        service: QaService,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
        storage: &'static str,
    ) -> Self {
        Self {
            service,
            tokens,
            passwords,
            storage,
        }
    }

    /// Connect storage and auth from configuration.
    ///
    /// Falls back to in-memory storage when no database is configured or the
    /// connection fails.
    pub async fn from_config(config: &AppConfig) -> Self {
        let (service, storage) = build_service(config).await;
        tracing::info!(storage, "Application state initialized");
        Self::new(
            service,
            Arc::new(JwtTokenService::from_env()),
            Arc::new(Argon2PasswordService::new()),
            storage,
        )
    }
}

#[cfg(feature = "postgres")]
async fn build_service(config: &AppConfig) -> (QaService, &'static str) {
    use migration::{Migrator, MigratorTrait};
    use overflow_infra::database::{connect, postgres_service};

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return (in_memory_service(), "memory");
    };

    let conn = match connect(db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database. Using in-memory fallback.");
            return (in_memory_service(), "memory");
        }
    };

    if config.run_migrations {
        if let Err(e) = Migrator::up(&conn, None).await {
            tracing::error!(error = %e, "Migrations failed. Using in-memory fallback.");
            return (in_memory_service(), "memory");
        }
        tracing::info!("Database schema up to date");
    }

    (postgres_service(conn), "postgres")
}

#[cfg(not(feature = "postgres"))]
async fn build_service(config: &AppConfig) -> (QaService, &'static str) {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
    }
    (in_memory_service(), "memory")
}
