//! Payload → command conversion
//!
//! Runs the declarative field rules first; on success the payload is turned
//! into the strongly-typed command the repository accepts.

use validator::Validate;

use super::payloads::{
    AddressPayload, CreatePoiPayload, OpeningHoursPayload, UpdatePoiPayload, UpdateStatusPayload,
};
use crate::domain::{AddressData, DayOfWeek, NewPoi, OpeningHoursData, PoiChanges, PoiStatus};
use crate::shared::{collect_field_errors, FieldErrors};

pub fn validate_create(payload: CreatePoiPayload) -> Result<NewPoi, FieldErrors> {
    payload.validate().map_err(|e| collect_field_errors(&e))?;

    Ok(NewPoi {
        name: required(payload.name, "name", "Name is required")?,
        status: status(required(payload.status, "status", "Status is required")?)?,
        address: payload.address.map(address).transpose()?,
        opening_hours: payload.opening_hours.map(opening_hours).transpose()?,
    })
}

pub fn validate_update(payload: UpdatePoiPayload) -> Result<PoiChanges, FieldErrors> {
    payload.validate().map_err(|e| collect_field_errors(&e))?;

    Ok(PoiChanges {
        name: payload.name,
        status: payload.status.map(status).transpose()?,
        address: payload.address.map(address).transpose()?,
        opening_hours: payload.opening_hours.map(opening_hours).transpose()?,
    })
}

pub fn validate_status(payload: UpdateStatusPayload) -> Result<PoiStatus, FieldErrors> {
    payload.validate().map_err(|e| collect_field_errors(&e))?;
    status(required(payload.status, "status", "Status is required")?)
}

fn required<T>(value: Option<T>, field: &str, message: &str) -> Result<T, FieldErrors> {
    value.ok_or_else(|| FieldErrors::single(field, message))
}

fn status(value: String) -> Result<PoiStatus, FieldErrors> {
    PoiStatus::parse(&value).ok_or_else(|| {
        FieldErrors::single(
            "status",
            "Status must be one of: ONLINE, OFFLINE, MAINTENANCE",
        )
    })
}

fn address(payload: AddressPayload) -> Result<AddressData, FieldErrors> {
    Ok(AddressData {
        country: required(payload.country, "address.country", "Country is required")?,
        zip_code: required(payload.zip_code, "address.zipCode", "Zip code is required")?,
        city: required(payload.city, "address.city", "City is required")?,
        street: required(payload.street, "address.street", "Street is required")?,
        house_number: required(
            payload.house_number,
            "address.houseNumber",
            "House number is required",
        )?,
    })
}

fn opening_hours(entries: Vec<OpeningHoursPayload>) -> Result<Vec<OpeningHoursData>, FieldErrors> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| -> Result<OpeningHoursData, FieldErrors> {
            let path = |field: &str| format!("openingHours[{}].{}", i, field);
            let day = required(entry.day_of_week, &path("dayOfWeek"), "Day of week is required")?;
            Ok(OpeningHoursData {
                day_of_week: DayOfWeek::parse(&day).ok_or_else(|| {
                    FieldErrors::single(path("dayOfWeek"), "Day of week is invalid")
                })?,
                open_time: required(entry.open_time, &path("openTime"), "Open time is required")?,
                close_time: required(entry.close_time, &path("closeTime"), "Close time is required")?,
                is_closed: required(entry.is_closed, &path("isClosed"), "Is closed is required")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_payload() -> AddressPayload {
        AddressPayload {
            country: Some("DE".into()),
            zip_code: Some("10115".into()),
            city: Some("Berlin".into()),
            street: Some("Main".into()),
            house_number: Some("1".into()),
        }
    }

    fn hours_payload(day: &str, open: &str, close: &str) -> OpeningHoursPayload {
        OpeningHoursPayload {
            day_of_week: Some(day.into()),
            open_time: Some(open.into()),
            close_time: Some(close.into()),
            is_closed: Some(false),
        }
    }

    fn messages_for(errors: &FieldErrors, field: &str) -> Vec<String> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.clone())
            .collect()
    }

    #[test]
    fn full_create_payload_becomes_command() {
        let cmd = validate_create(CreatePoiPayload {
            name: Some("Station".into()),
            status: Some("MAINTENANCE".into()),
            address: Some(address_payload()),
            opening_hours: Some(vec![hours_payload("SUNDAY", "00:00", "23:59")]),
        })
        .unwrap();

        assert_eq!(cmd.name, "Station");
        assert_eq!(cmd.status, PoiStatus::Maintenance);
        assert_eq!(cmd.address.unwrap().house_number, "1");
        let hours = cmd.opening_hours.unwrap();
        assert_eq!(hours[0].day_of_week, DayOfWeek::Sunday);
        assert_eq!(hours[0].close_time, "23:59");
    }

    #[test]
    fn missing_name_and_status_are_reported() {
        let errors = validate_create(CreatePoiPayload::default()).unwrap_err();
        assert_eq!(messages_for(&errors, "name"), vec!["Name is required"]);
        assert!(errors.contains_field("status"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = validate_create(CreatePoiPayload {
            name: Some(String::new()),
            status: Some("ONLINE".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(messages_for(&errors, "name"), vec!["Name is required"]);
    }

    #[test]
    fn unknown_status_lists_allowed_values() {
        let errors = validate_create(CreatePoiPayload {
            name: Some("Station".into()),
            status: Some("CLOSED".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            messages_for(&errors, "status"),
            vec!["Status must be one of: ONLINE, OFFLINE, MAINTENANCE"]
        );
    }

    #[test]
    fn address_fields_are_all_required() {
        let errors = validate_create(CreatePoiPayload {
            name: Some("Station".into()),
            status: Some("ONLINE".into()),
            address: Some(AddressPayload {
                zip_code: Some(String::new()),
                ..address_payload()
            }),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            messages_for(&errors, "address.zipCode"),
            vec!["Zip code is required"]
        );
        assert_eq!(errors.0.len(), 1);
    }

    #[test]
    fn bad_time_is_reported_with_its_index() {
        let errors = validate_create(CreatePoiPayload {
            name: Some("Station".into()),
            status: Some("ONLINE".into()),
            opening_hours: Some(vec![
                hours_payload("MONDAY", "06:00", "22:00"),
                hours_payload("TUESDAY", "06:00", "22:00"),
                hours_payload("WEDNESDAY", "25:00", "22:00"),
            ]),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            messages_for(&errors, "openingHours[2].openTime"),
            vec!["Open time must be in HH:MM format"]
        );
        assert_eq!(errors.0.len(), 1);
    }

    #[test]
    fn missing_is_closed_is_reported() {
        let errors = validate_create(CreatePoiPayload {
            name: Some("Station".into()),
            status: Some("ONLINE".into()),
            opening_hours: Some(vec![OpeningHoursPayload {
                is_closed: None,
                ..hours_payload("FRIDAY", "08:00", "18:00")
            }]),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            messages_for(&errors, "openingHours[0].isClosed"),
            vec!["Is closed is required"]
        );
    }

    #[test]
    fn errors_come_back_sorted_by_path() {
        let errors = validate_create(CreatePoiPayload {
            name: None,
            status: Some("nope".into()),
            address: Some(AddressPayload::default()),
            opening_hours: Some(vec![hours_payload("NOPE", "6:00", "22:00")]),
        })
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
        assert!(errors.contains_field("address.houseNumber"));
        assert!(errors.contains_field("openingHours[0].dayOfWeek"));
        assert!(errors.contains_field("openingHours[0].openTime"));
    }

    #[test]
    fn empty_update_is_valid() {
        let changes = validate_update(UpdatePoiPayload::default()).unwrap();
        assert_eq!(changes, PoiChanges::default());
    }

    #[test]
    fn present_update_fields_follow_create_rules() {
        let errors = validate_update(UpdatePoiPayload {
            name: Some(String::new()),
            status: Some("BROKEN".into()),
            address: Some(AddressPayload {
                city: None,
                ..address_payload()
            }),
            opening_hours: Some(vec![hours_payload("MONDAY", "06:00", "99:99")]),
        })
        .unwrap_err();
        assert!(errors.contains_field("name"));
        assert!(errors.contains_field("status"));
        assert!(errors.contains_field("address.city"));
        assert_eq!(
            messages_for(&errors, "openingHours[0].closeTime"),
            vec!["Close time must be in HH:MM format"]
        );
    }

    #[test]
    fn update_keeps_empty_hours_list() {
        let changes = validate_update(UpdatePoiPayload {
            opening_hours: Some(vec![]),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.opening_hours, Some(vec![]));
        assert!(changes.replacement_hours().is_none());
    }

    #[test]
    fn status_payload() {
        assert_eq!(
            validate_status(UpdateStatusPayload {
                status: Some("OFFLINE".into())
            })
            .unwrap(),
            PoiStatus::Offline
        );
        let errors = validate_status(UpdateStatusPayload::default()).unwrap_err();
        assert_eq!(messages_for(&errors, "status"), vec!["Status is required"]);
    }
}
