//! POI use cases

pub mod payloads;
pub mod service;
pub mod validation;

pub use payloads::{
    AddressPayload, CreatePoiPayload, OpeningHoursPayload, UpdatePoiPayload, UpdateStatusPayload,
};
pub use service::PoiService;
pub use validation::{validate_create, validate_status, validate_update};
