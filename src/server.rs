//! Reusable POI API server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database init, migrations,
//! metrics recorder, REST API and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::PoiService;
use crate::config::AppConfig;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmPoiRepository};
use crate::interfaces::create_api_router;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

/// The global recorder can only be installed once per process; later
/// starts in the same process reuse the first handle.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static PROM_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();
    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!("Metrics disabled, recorder not installed: {}", e);
                None
            }
        })
        .clone()
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running POI API server.
///
/// ```rust,no_run
/// use poi_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub config: AppConfig,
    /// Address the API is actually bound to
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        info!("Starting POI API...");

        let prometheus = prometheus_handle();

        let db_config = DatabaseConfig::from(&app_cfg.database);
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        let repo = Arc::new(SeaOrmPoiRepository::new(db.clone()));
        let poi_service = Arc::new(PoiService::new(repo));
        let api_router = create_api_router(db.clone(), poi_service, prometheus);

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(listener, api_router.into_make_service())
            .with_graceful_shutdown(async move {
                shutdown_signal.wait().await;
                info!("REST API server received shutdown signal");
            });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Triggers shutdown on SIGINT / SIGTERM.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }

    /// Waits for the API task to finish, bounded by `shutdown_timeout` once
    /// shutdown has been requested, then closes the pool.
    pub async fn wait(self) {
        let signal = self.shutdown.signal();
        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        let mut api_task = self.api_task;

        tokio::select! {
            result = &mut api_task => log_task_exit(result),
            _ = async {
                signal.wait().await;
                tokio::time::sleep(timeout).await;
            } => {
                warn!("In-flight requests still running after {}s, aborting", timeout.as_secs());
                api_task.abort();
            }
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
        info!("POI API shutdown complete");
    }

    pub async fn shutdown(self) {
        info!("Shutting down POI API...");
        self.trigger_shutdown();
        self.wait().await;
    }
}

fn log_task_exit(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("REST API server stopped"),
        Err(e) => error!("REST API server task panicked: {}", e),
    }
}
