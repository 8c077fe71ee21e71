//! POI aggregate entities
//!
//! The aggregate root is [`Poi`]; every other type here is owned by it.
//! Mutators consume the value and hand back the changed aggregate.

use chrono::{DateTime, Utc};

/// Operational status of a point of interest.
///
/// Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiStatus {
    Online,
    Offline,
    Maintenance,
}

impl PoiStatus {
    pub const ALL: [PoiStatus; 3] = [Self::Online, Self::Offline, Self::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    /// Exact, case-sensitive match on the wire value.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl std::fmt::Display for PoiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.as_str() == s)
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Postal address, at most one per POI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: String,
    pub poi_id: String,
    pub country: String,
    pub zip_code: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
}

/// One entry of the weekly schedule.
///
/// `open_time`/`close_time` are zero-padded `HH:MM` strings and are kept
/// even when `is_closed` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub id: String,
    pub poi_id: String,
    pub day_of_week: DayOfWeek,
    pub open_time: String,
    pub close_time: String,
    pub is_closed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub id: String,
    pub fuel_product_id: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelProduct {
    pub id: String,
    pub pump_id: String,
    pub name: String,
    pub prices: Vec<Price>,
}

impl FuelProduct {
    pub fn new(id: impl Into<String>, pump_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pump_id: pump_id.into(),
            name: name.into(),
            prices: Vec::new(),
        }
    }

    pub fn add_price(mut self, price: Price) -> Self {
        self.prices.push(price);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pump {
    pub id: String,
    pub poi_id: String,
    pub name: String,
    pub fuel_products: Vec<FuelProduct>,
}

impl Pump {
    pub fn new(id: impl Into<String>, poi_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            poi_id: poi_id.into(),
            name: name.into(),
            fuel_products: Vec::new(),
        }
    }

    pub fn add_fuel_product(mut self, product: FuelProduct) -> Self {
        self.fuel_products.push(product);
        self
    }

    /// Unknown ids are ignored.
    pub fn remove_fuel_product(mut self, fuel_product_id: &str) -> Self {
        self.fuel_products.retain(|p| p.id != fuel_product_id);
        self
    }
}

/// Scalar columns of a POI, without any child collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoiRecord {
    pub id: String,
    pub name: String,
    pub status: PoiStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully hydrated POI aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub status: PoiStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address: Option<Address>,
    pub opening_hours: Vec<OpeningHours>,
    pub pumps: Vec<Pump>,
}

impl Poi {
    /// Aggregate with no children yet.
    pub fn from_record(record: PoiRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
            address: None,
            opening_hours: Vec::new(),
            pumps: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: PoiStatus) -> Self {
        self.status = status;
        self
    }

    pub fn open(self) -> Self {
        self.with_status(PoiStatus::Online)
    }

    pub fn close(self) -> Self {
        self.with_status(PoiStatus::Offline)
    }

    pub fn maintenance(self) -> Self {
        self.with_status(PoiStatus::Maintenance)
    }

    pub fn with_address(mut self, address: Option<Address>) -> Self {
        self.address = address;
        self
    }

    pub fn with_opening_hours(mut self, opening_hours: Vec<OpeningHours>) -> Self {
        self.opening_hours = opening_hours;
        self
    }

    pub fn add_pump(mut self, pump: Pump) -> Self {
        self.pumps.push(pump);
        self
    }

    /// Unknown ids are ignored.
    pub fn remove_pump(mut self, pump_id: &str) -> Self {
        self.pumps.retain(|p| p.id != pump_id);
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_poi() -> Poi {
        let now = Utc::now();
        Poi::from_record(PoiRecord {
            id: "poi-1".into(),
            name: "Station North".into(),
            status: PoiStatus::Offline,
            created_at: now,
            updated_at: now,
        })
    }

    fn price(id: &str, amount: f64) -> Price {
        Price {
            id: id.into(),
            fuel_product_id: "fp-1".into(),
            amount,
            currency: "EUR".into(),
        }
    }

    #[test]
    fn status_setters_reassign_status() {
        let poi = sample_poi().open();
        assert_eq!(poi.status, PoiStatus::Online);
        let poi = poi.maintenance();
        assert_eq!(poi.status, PoiStatus::Maintenance);
        let poi = poi.close();
        assert_eq!(poi.status, PoiStatus::Offline);
        // Any status may follow any other, including itself.
        let poi = poi.close().open().open();
        assert_eq!(poi.status, PoiStatus::Online);
    }

    #[test]
    fn new_poi_starts_without_children() {
        let poi = sample_poi();
        assert!(poi.pumps.is_empty());
        assert!(poi.opening_hours.is_empty());
        assert!(poi.address.is_none());
    }

    #[test]
    fn add_and_remove_pumps() {
        let poi = sample_poi()
            .add_pump(Pump::new("p1", "poi-1", "Pump 1"))
            .add_pump(Pump::new("p2", "poi-1", "Pump 2"));
        assert_eq!(poi.pumps.len(), 2);

        let poi = poi.remove_pump("p1");
        assert_eq!(poi.pumps.len(), 1);
        assert_eq!(poi.pumps[0].id, "p2");
    }

    #[test]
    fn removing_unknown_pump_is_noop() {
        let poi = sample_poi().add_pump(Pump::new("p1", "poi-1", "Pump 1"));
        let before = poi.clone();
        let after = poi.remove_pump("missing");
        assert_eq!(before, after);

        let empty = sample_poi().remove_pump("missing");
        assert!(empty.pumps.is_empty());
    }

    #[test]
    fn fuel_products_on_pump() {
        let pump = Pump::new("p1", "poi-1", "Pump 1")
            .add_fuel_product(FuelProduct::new("fp-1", "p1", "Diesel"))
            .add_fuel_product(FuelProduct::new("fp-2", "p1", "E10"));
        assert_eq!(pump.fuel_products.len(), 2);

        let pump = pump.remove_fuel_product("fp-1").remove_fuel_product("fp-1");
        assert_eq!(pump.fuel_products.len(), 1);
        assert_eq!(pump.fuel_products[0].name, "E10");
    }

    #[test]
    fn prices_on_fuel_product() {
        let product = FuelProduct::new("fp-1", "p1", "Diesel")
            .add_price(price("pr-1", 1.799))
            .add_price(price("pr-2", 1.759));
        assert_eq!(product.prices.len(), 2);
        assert_eq!(product.prices[1].amount, 1.759);
    }

    #[test]
    fn status_wire_values_round_trip() {
        for status in PoiStatus::ALL {
            assert_eq!(PoiStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PoiStatus::parse("online"), None);
        assert_eq!(PoiStatus::parse("CLOSED"), None);
    }

    #[test]
    fn day_wire_values() {
        assert_eq!(DayOfWeek::parse("SUNDAY"), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::parse("Sunday"), None);
        assert_eq!(DayOfWeek::Wednesday.to_string(), "WEDNESDAY");
    }
}
