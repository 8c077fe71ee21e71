pub mod poi;

// Re-export key types for convenience
pub use poi::{
    AddressPayload, CreatePoiPayload, OpeningHoursPayload, PoiService, UpdatePoiPayload,
    UpdateStatusPayload,
};
