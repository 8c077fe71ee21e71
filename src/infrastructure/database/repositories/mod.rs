//! Database repository implementations

pub mod poi_repository;

pub use poi_repository::SeaOrmPoiRepository;
