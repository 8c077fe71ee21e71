//! POI DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Address, FuelProduct, OpeningHours, Poi, PoiRecord, Price, Pump};
use crate::shared::PaginatedResult;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: String,
    pub poi_id: String,
    pub country: String,
    pub zip_code: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
}

impl From<Address> for AddressDto {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            poi_id: a.poi_id,
            country: a.country,
            zip_code: a.zip_code,
            city: a.city,
            street: a.street,
            house_number: a.house_number,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursDto {
    pub id: String,
    pub poi_id: String,
    #[schema(example = "MONDAY")]
    pub day_of_week: String,
    #[schema(example = "06:00")]
    pub open_time: String,
    #[schema(example = "22:00")]
    pub close_time: String,
    pub is_closed: bool,
}

impl From<OpeningHours> for OpeningHoursDto {
    fn from(h: OpeningHours) -> Self {
        Self {
            id: h.id,
            poi_id: h.poi_id,
            day_of_week: h.day_of_week.as_str().to_string(),
            open_time: h.open_time,
            close_time: h.close_time,
            is_closed: h.is_closed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub id: String,
    pub fuel_product_id: String,
    pub amount: f64,
    #[schema(example = "EUR")]
    pub currency: String,
}

impl From<Price> for PriceDto {
    fn from(p: Price) -> Self {
        Self {
            id: p.id,
            fuel_product_id: p.fuel_product_id,
            amount: p.amount,
            currency: p.currency,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelProductDto {
    pub id: String,
    pub pump_id: String,
    pub name: String,
    pub prices: Vec<PriceDto>,
}

impl From<FuelProduct> for FuelProductDto {
    fn from(f: FuelProduct) -> Self {
        Self {
            id: f.id,
            pump_id: f.pump_id,
            name: f.name,
            prices: f.prices.into_iter().map(PriceDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PumpDto {
    pub id: String,
    pub poi_id: String,
    pub name: String,
    pub fuel_products: Vec<FuelProductDto>,
}

impl From<Pump> for PumpDto {
    fn from(p: Pump) -> Self {
        Self {
            id: p.id,
            poi_id: p.poi_id,
            name: p.name,
            fuel_products: p.fuel_products.into_iter().map(FuelProductDto::from).collect(),
        }
    }
}

/// Fully hydrated POI
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoiDto {
    pub id: String,
    pub name: String,
    #[schema(example = "ONLINE")]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address: Option<AddressDto>,
    pub opening_hours: Vec<OpeningHoursDto>,
    pub pumps: Vec<PumpDto>,
}

impl From<Poi> for PoiDto {
    fn from(p: Poi) -> Self {
        Self {
            id: p.id,
            name: p.name,
            status: p.status.as_str().to_string(),
            created_at: p.created_at,
            updated_at: p.updated_at,
            address: p.address.map(AddressDto::from),
            opening_hours: p.opening_hours.into_iter().map(OpeningHoursDto::from).collect(),
            pumps: p.pumps.into_iter().map(PumpDto::from).collect(),
        }
    }
}

/// Scalar POI fields returned by create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoiRecordDto {
    pub id: String,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PoiRecord> for PoiRecordDto {
    fn from(r: PoiRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            status: r.status.as_str().to_string(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// List query. Non-numeric or non-positive values fall back to 1 / 10.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListPoisQuery {
    /// Page number, 1-based
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PoiPageDto {
    pub items: Vec<PoiDto>,
    pub pagination: PaginationDto,
}

impl From<PaginatedResult<Poi>> for PoiPageDto {
    fn from(page: PaginatedResult<Poi>) -> Self {
        Self {
            pagination: PaginationDto {
                page: page.page,
                limit: page.limit,
                total: page.total,
                pages: page.total_pages,
            },
            items: page.items.into_iter().map(PoiDto::from).collect(),
        }
    }
}
