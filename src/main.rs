//! POI API server
//!
//! Reads configuration from TOML (`$POI_CONFIG` or
//! ~/.config/poi-service/config.toml), applies `DATABASE_URL`, and serves
//! the REST API until SIGINT / SIGTERM.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use poi_service::config::{default_config_path, AppConfig, LoggingConfig};
use poi_service::server::{ServerHandle, ServerOptions};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let app_cfg = app_cfg.with_env_overrides();

    init_tracing(&app_cfg.logging);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    let handle = match ServerHandle::start(ServerOptions {
        config: app_cfg,
        auto_migrate: true,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    };

    handle.install_signal_handler();
    handle.wait().await;
    Ok(())
}
