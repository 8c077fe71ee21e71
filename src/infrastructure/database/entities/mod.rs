//! Database entities module

pub mod address;
pub mod fuel_product;
pub mod opening_hours;
pub mod poi;
pub mod price;
pub mod pump;

pub use address::Entity as Address;
pub use fuel_product::Entity as FuelProduct;
pub use opening_hours::Entity as OpeningHours;
pub use poi::Entity as Poi;
pub use price::Entity as Price;
pub use pump::Entity as Pump;
