//! Raw request payloads and their field rules

use std::borrow::Cow;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::{DayOfWeek, PoiStatus};

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[validate(
        required(message = "Country is required"),
        length(min = 1, message = "Country is required")
    )]
    pub country: Option<String>,
    #[validate(
        required(message = "Zip code is required"),
        length(min = 1, message = "Zip code is required")
    )]
    pub zip_code: Option<String>,
    #[validate(
        required(message = "City is required"),
        length(min = 1, message = "City is required")
    )]
    pub city: Option<String>,
    #[validate(
        required(message = "Street is required"),
        length(min = 1, message = "Street is required")
    )]
    pub street: Option<String>,
    #[validate(
        required(message = "House number is required"),
        length(min = 1, message = "House number is required")
    )]
    pub house_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursPayload {
    /// MONDAY..SUNDAY
    #[validate(
        required(message = "Day of week is required"),
        custom(function = "validate_day_of_week")
    )]
    #[schema(example = "MONDAY")]
    pub day_of_week: Option<String>,
    /// 24h `HH:MM`
    #[validate(
        required(message = "Open time is required"),
        custom(function = "validate_open_time")
    )]
    #[schema(example = "06:00")]
    pub open_time: Option<String>,
    #[validate(
        required(message = "Close time is required"),
        custom(function = "validate_close_time")
    )]
    #[schema(example = "22:00")]
    pub close_time: Option<String>,
    #[validate(required(message = "Is closed is required"))]
    pub is_closed: Option<bool>,
}

/// Create request body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoiPayload {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    /// ONLINE, OFFLINE or MAINTENANCE
    #[validate(
        required(message = "Status is required"),
        custom(function = "validate_status")
    )]
    #[schema(example = "ONLINE")]
    pub status: Option<String>,
    #[validate(nested)]
    pub address: Option<AddressPayload>,
    #[validate(nested)]
    pub opening_hours: Option<Vec<OpeningHoursPayload>>,
}

/// Partial update body. Present fields follow the create rules.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePoiPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_status"))]
    #[schema(example = "MAINTENANCE")]
    pub status: Option<String>,
    #[validate(nested)]
    pub address: Option<AddressPayload>,
    /// An empty list keeps the stored schedule.
    #[validate(nested)]
    pub opening_hours: Option<Vec<OpeningHoursPayload>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusPayload {
    #[validate(
        required(message = "Status is required"),
        custom(function = "validate_status")
    )]
    #[schema(example = "OFFLINE")]
    pub status: Option<String>,
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    match PoiStatus::parse(value) {
        Some(_) => Ok(()),
        None => Err(invalid(
            "status",
            format!("Status must be one of: {}", enum_list(PoiStatus::ALL.iter().map(|s| s.as_str()))),
        )),
    }
}

fn validate_day_of_week(value: &str) -> Result<(), ValidationError> {
    match DayOfWeek::parse(value) {
        Some(_) => Ok(()),
        None => Err(invalid(
            "day_of_week",
            format!(
                "Day of week must be one of: {}",
                enum_list(DayOfWeek::ALL.iter().map(|d| d.as_str()))
            ),
        )),
    }
}

fn validate_open_time(value: &str) -> Result<(), ValidationError> {
    if is_clock_time(value) {
        Ok(())
    } else {
        Err(invalid("time_format", "Open time must be in HH:MM format".into()))
    }
}

fn validate_close_time(value: &str) -> Result<(), ValidationError> {
    if is_clock_time(value) {
        Ok(())
    } else {
        Err(invalid("time_format", "Close time must be in HH:MM format".into()))
    }
}

fn enum_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

/// Zero-padded 24h clock time, 00:00 through 23:59.
pub fn is_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (digits[0] - b'0') * 10 + (digits[1] - b'0');
    let minutes = (digits[2] - b'0') * 10 + (digits[3] - b'0');
    hours <= 23 && minutes <= 59
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_times() {
        for ok in ["00:00", "09:30", "23:59", "12:00"] {
            assert!(is_clock_time(ok), "{ok}");
        }
        for bad in ["24:00", "9:30", "09:60", "0930", "09:3a", "", " 09:30", "09:30 "] {
            assert!(!is_clock_time(bad), "{bad}");
        }
    }

    #[test]
    fn status_message_lists_every_value() {
        let err = validate_status("CLOSED").unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Status must be one of: ONLINE, OFFLINE, MAINTENANCE"
        );
        assert!(validate_status("ONLINE").is_ok());
        assert!(validate_status("online").is_err());
    }

    #[test]
    fn day_message_lists_every_value() {
        let err = validate_day_of_week("FUNDAY").unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Day of week must be one of: MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY, SUNDAY"
        );
    }

    #[test]
    fn payload_reads_camel_case_keys() {
        let payload: CreatePoiPayload = serde_json::from_str(
            r#"{
                "name": "Station",
                "status": "ONLINE",
                "address": {"country": "DE", "zipCode": "10115", "city": "Berlin",
                            "street": "Main", "houseNumber": "1"},
                "openingHours": [{"dayOfWeek": "MONDAY", "openTime": "06:00",
                                  "closeTime": "22:00", "isClosed": false}]
            }"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.address.unwrap().zip_code.as_deref(), Some("10115"));
        assert_eq!(payload.opening_hours.unwrap()[0].is_closed, Some(false));
    }
}
