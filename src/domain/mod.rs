pub mod poi;

// Re-export commonly used types
pub use poi::{
    Address, AddressData, DayOfWeek, FuelProduct, NewPoi, OpeningHours, OpeningHoursData, Poi,
    PoiChanges, PoiRecord, PoiRepository, PoiStatus, Price, Pump,
};

pub use crate::shared::types::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
