pub mod health;
pub mod metrics;
pub mod pois;
pub mod request_id;
