//! Validated inputs accepted by the POI repository

use super::model::{DayOfWeek, PoiStatus};

/// The five address fields, all non-empty after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressData {
    pub country: String,
    pub zip_code: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHoursData {
    pub day_of_week: DayOfWeek,
    pub open_time: String,
    pub close_time: String,
    pub is_closed: bool,
}

/// Everything needed to create a POI in one atomic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoi {
    pub name: String,
    pub status: PoiStatus,
    pub address: Option<AddressData>,
    pub opening_hours: Option<Vec<OpeningHoursData>>,
}

/// Partial update. `None` leaves the stored value untouched.
///
/// An empty `opening_hours` vector also leaves the stored schedule untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoiChanges {
    pub name: Option<String>,
    pub status: Option<PoiStatus>,
    pub address: Option<AddressData>,
    pub opening_hours: Option<Vec<OpeningHoursData>>,
}

impl PoiChanges {
    pub fn status_only(status: PoiStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn touches_scalars(&self) -> bool {
        self.name.is_some() || self.status.is_some()
    }

    /// Opening hours to write; `None` when the schedule must stay as stored.
    pub fn replacement_hours(&self) -> Option<&[OpeningHoursData]> {
        self.opening_hours
            .as_deref()
            .filter(|hours| !hours.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hours_are_not_a_replacement() {
        let changes = PoiChanges {
            opening_hours: Some(vec![]),
            ..Default::default()
        };
        assert!(changes.replacement_hours().is_none());
        assert!(!changes.touches_scalars());
    }

    #[test]
    fn status_only_touches_scalars() {
        let changes = PoiChanges::status_only(PoiStatus::Maintenance);
        assert!(changes.touches_scalars());
        assert!(changes.name.is_none());
        assert!(changes.address.is_none());
    }
}
