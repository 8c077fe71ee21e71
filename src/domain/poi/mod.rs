//! POI aggregate
//!
//! Contains the POI entity tree, validated inputs, and repository interface.

pub mod commands;
pub mod model;
pub mod repository;

pub use commands::{AddressData, NewPoi, OpeningHoursData, PoiChanges};
pub use model::{
    Address, DayOfWeek, FuelProduct, OpeningHours, Poi, PoiRecord, PoiStatus, Price, Pump,
};
pub use repository::PoiRepository;
