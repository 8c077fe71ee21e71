//! # POI Service
//!
//! Fuel station points of interest: a POI aggregate (address, opening hours,
//! pump → fuel product → price tree) persisted transactionally and served
//! over a REST API.
//!
//! ## Architecture
//!
//! - **domain**: POI entity tree, validated commands, repository trait
//! - **application**: payload validation and the `PoiService` use cases
//! - **infrastructure**: SeaORM entities, migrations, transactional repository
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, pagination, validation helpers, shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmPoiRepository};

// Re-export API router
pub use interfaces::create_api_router;
