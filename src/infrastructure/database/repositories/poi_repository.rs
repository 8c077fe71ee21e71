//! SeaORM implementation of PoiRepository
//!
//! Every multi-row write runs inside one `DatabaseTransaction`. Returning
//! early with `?` drops the transaction uncommitted, which rolls it back.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::poi::{
    Address, AddressData, DayOfWeek, FuelProduct, NewPoi, OpeningHours, OpeningHoursData, Poi,
    PoiChanges, PoiRecord, PoiRepository, PoiStatus, Price, Pump,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    address, fuel_product, opening_hours, poi, price, pump,
};
use crate::shared::{InfraError, PaginatedResult, PaginationParams};

pub struct SeaOrmPoiRepository {
    db: DatabaseConnection,
}

impl SeaOrmPoiRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    InfraError::Database(e).into()
}

fn status_to_db(status: PoiStatus) -> poi::PoiStatus {
    match status {
        PoiStatus::Online => poi::PoiStatus::Online,
        PoiStatus::Offline => poi::PoiStatus::Offline,
        PoiStatus::Maintenance => poi::PoiStatus::Maintenance,
    }
}

fn status_from_db(status: poi::PoiStatus) -> PoiStatus {
    match status {
        poi::PoiStatus::Online => PoiStatus::Online,
        poi::PoiStatus::Offline => PoiStatus::Offline,
        poi::PoiStatus::Maintenance => PoiStatus::Maintenance,
    }
}

fn day_to_db(day: DayOfWeek) -> opening_hours::DayOfWeek {
    match day {
        DayOfWeek::Monday => opening_hours::DayOfWeek::Monday,
        DayOfWeek::Tuesday => opening_hours::DayOfWeek::Tuesday,
        DayOfWeek::Wednesday => opening_hours::DayOfWeek::Wednesday,
        DayOfWeek::Thursday => opening_hours::DayOfWeek::Thursday,
        DayOfWeek::Friday => opening_hours::DayOfWeek::Friday,
        DayOfWeek::Saturday => opening_hours::DayOfWeek::Saturday,
        DayOfWeek::Sunday => opening_hours::DayOfWeek::Sunday,
    }
}

fn day_from_db(day: opening_hours::DayOfWeek) -> DayOfWeek {
    match day {
        opening_hours::DayOfWeek::Monday => DayOfWeek::Monday,
        opening_hours::DayOfWeek::Tuesday => DayOfWeek::Tuesday,
        opening_hours::DayOfWeek::Wednesday => DayOfWeek::Wednesday,
        opening_hours::DayOfWeek::Thursday => DayOfWeek::Thursday,
        opening_hours::DayOfWeek::Friday => DayOfWeek::Friday,
        opening_hours::DayOfWeek::Saturday => DayOfWeek::Saturday,
        opening_hours::DayOfWeek::Sunday => DayOfWeek::Sunday,
    }
}

fn record_from_model(model: poi::Model) -> PoiRecord {
    PoiRecord {
        id: model.id,
        name: model.name,
        status: status_from_db(model.status),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn address_from_model(model: address::Model) -> Address {
    Address {
        id: model.id,
        poi_id: model.poi_id,
        country: model.country,
        zip_code: model.zip_code,
        city: model.city,
        street: model.street,
        house_number: model.house_number,
    }
}

fn opening_hours_from_model(model: opening_hours::Model) -> OpeningHours {
    OpeningHours {
        id: model.id,
        poi_id: model.poi_id,
        day_of_week: day_from_db(model.day_of_week),
        open_time: model.open_time,
        close_time: model.close_time,
        is_closed: model.is_closed,
    }
}

fn price_from_model(model: price::Model) -> Price {
    Price {
        id: model.id,
        fuel_product_id: model.fuel_product_id,
        amount: model.amount,
        currency: model.currency,
    }
}

// ── Hydration ───────────────────────────────────────────────────

/// Resolves address, opening hours and the pump tree for every given row.
///
/// One query per child table regardless of how many POIs are passed in.
/// Output order follows `models`.
async fn hydrate<C: ConnectionTrait>(conn: &C, models: Vec<poi::Model>) -> DomainResult<Vec<Poi>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }
    let poi_ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();

    let mut addresses: HashMap<String, Address> = address::Entity::find()
        .filter(address::Column::PoiId.is_in(poi_ids.clone()))
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(|m| (m.poi_id.clone(), address_from_model(m)))
        .collect();

    let mut hours_by_poi: HashMap<String, Vec<OpeningHours>> = HashMap::new();
    let hour_models = opening_hours::Entity::find()
        .filter(opening_hours::Column::PoiId.is_in(poi_ids.clone()))
        .order_by_asc(opening_hours::Column::Position)
        .all(conn)
        .await
        .map_err(db_err)?;
    for m in hour_models {
        hours_by_poi
            .entry(m.poi_id.clone())
            .or_default()
            .push(opening_hours_from_model(m));
    }

    let mut pumps_by_poi = load_pumps(conn, poi_ids).await?;

    Ok(models
        .into_iter()
        .map(|m| {
            let id = m.id.clone();
            let base = Poi::from_record(record_from_model(m))
                .with_address(addresses.remove(&id))
                .with_opening_hours(hours_by_poi.remove(&id).unwrap_or_default());
            pumps_by_poi
                .remove(&id)
                .unwrap_or_default()
                .into_iter()
                .fold(base, Poi::add_pump)
        })
        .collect())
}

/// Pump → fuel product → price tree, grouped by owning POI id.
async fn load_pumps<C: ConnectionTrait>(
    conn: &C,
    poi_ids: Vec<String>,
) -> DomainResult<HashMap<String, Vec<Pump>>> {
    let pump_models = pump::Entity::find()
        .filter(pump::Column::PoiId.is_in(poi_ids))
        .order_by_asc(pump::Column::Name)
        .order_by_asc(pump::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;
    if pump_models.is_empty() {
        return Ok(HashMap::new());
    }

    let pump_ids: Vec<String> = pump_models.iter().map(|m| m.id.clone()).collect();
    let product_models = fuel_product::Entity::find()
        .filter(fuel_product::Column::PumpId.is_in(pump_ids))
        .order_by_asc(fuel_product::Column::Name)
        .order_by_asc(fuel_product::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;

    let mut prices_by_product: HashMap<String, Vec<Price>> = HashMap::new();
    if !product_models.is_empty() {
        let product_ids: Vec<String> = product_models.iter().map(|m| m.id.clone()).collect();
        let price_models = price::Entity::find()
            .filter(price::Column::FuelProductId.is_in(product_ids))
            .order_by_asc(price::Column::Currency)
            .order_by_asc(price::Column::Amount)
            .order_by_asc(price::Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        for m in price_models {
            prices_by_product
                .entry(m.fuel_product_id.clone())
                .or_default()
                .push(price_from_model(m));
        }
    }

    let mut products_by_pump: HashMap<String, Vec<FuelProduct>> = HashMap::new();
    for m in product_models {
        let prices = prices_by_product.remove(&m.id).unwrap_or_default();
        let product = prices.into_iter().fold(
            FuelProduct::new(m.id, m.pump_id.clone(), m.name),
            FuelProduct::add_price,
        );
        products_by_pump.entry(m.pump_id).or_default().push(product);
    }

    let mut pumps_by_poi: HashMap<String, Vec<Pump>> = HashMap::new();
    for m in pump_models {
        let products = products_by_pump.remove(&m.id).unwrap_or_default();
        let pump = products.into_iter().fold(
            Pump::new(m.id, m.poi_id.clone(), m.name),
            Pump::add_fuel_product,
        );
        pumps_by_poi.entry(m.poi_id).or_default().push(pump);
    }
    Ok(pumps_by_poi)
}

async fn load_poi<C: ConnectionTrait>(conn: &C, id: &str) -> DomainResult<Option<Poi>> {
    let Some(model) = poi::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
    else {
        return Ok(None);
    };
    Ok(hydrate(conn, vec![model]).await?.pop())
}

async fn ensure_exists<C: ConnectionTrait>(conn: &C, id: &str) -> DomainResult<()> {
    let existing = poi::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?;
    match existing {
        Some(_) => Ok(()),
        None => Err(DomainError::poi_not_found(id)),
    }
}

// ── Child writes ────────────────────────────────────────────────

async fn insert_address<C: ConnectionTrait>(
    conn: &C,
    poi_id: &str,
    data: &AddressData,
) -> DomainResult<()> {
    let model = address::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        poi_id: Set(poi_id.to_string()),
        country: Set(data.country.clone()),
        zip_code: Set(data.zip_code.clone()),
        city: Set(data.city.clone()),
        street: Set(data.street.clone()),
        house_number: Set(data.house_number.clone()),
    };
    model.insert(conn).await.map_err(db_err)?;
    Ok(())
}

/// Updates the POI's address row in place, or inserts one if it has none.
async fn upsert_address<C: ConnectionTrait>(
    conn: &C,
    poi_id: &str,
    data: &AddressData,
) -> DomainResult<()> {
    let existing = address::Entity::find()
        .filter(address::Column::PoiId.eq(poi_id))
        .one(conn)
        .await
        .map_err(db_err)?;

    match existing {
        Some(model) => {
            debug!("Updating address {} of POI {}", model.id, poi_id);
            let mut active: address::ActiveModel = model.into();
            active.country = Set(data.country.clone());
            active.zip_code = Set(data.zip_code.clone());
            active.city = Set(data.city.clone());
            active.street = Set(data.street.clone());
            active.house_number = Set(data.house_number.clone());
            active.update(conn).await.map_err(db_err)?;
            Ok(())
        }
        None => {
            debug!("Inserting address for POI {}", poi_id);
            insert_address(conn, poi_id, data).await
        }
    }
}

async fn insert_opening_hours<C: ConnectionTrait>(
    conn: &C,
    poi_id: &str,
    hours: &[OpeningHoursData],
) -> DomainResult<()> {
    if hours.is_empty() {
        return Ok(());
    }
    let models = hours
        .iter()
        .enumerate()
        .map(|(position, h)| opening_hours::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            poi_id: Set(poi_id.to_string()),
            position: Set(position as i32),
            day_of_week: Set(day_to_db(h.day_of_week)),
            open_time: Set(h.open_time.clone()),
            close_time: Set(h.close_time.clone()),
            is_closed: Set(h.is_closed),
        });
    opening_hours::Entity::insert_many(models)
        .exec_without_returning(conn)
        .await
        .map_err(db_err)?;
    Ok(())
}

async fn replace_opening_hours<C: ConnectionTrait>(
    conn: &C,
    poi_id: &str,
    hours: &[OpeningHoursData],
) -> DomainResult<()> {
    let removed = opening_hours::Entity::delete_many()
        .filter(opening_hours::Column::PoiId.eq(poi_id))
        .exec(conn)
        .await
        .map_err(db_err)?;
    debug!(
        "Replacing {} opening hours of POI {} with {}",
        removed.rows_affected,
        poi_id,
        hours.len()
    );
    insert_opening_hours(conn, poi_id, hours).await
}

/// Writes only the scalar fields present in `changes`.
async fn update_scalars<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    changes: &PoiChanges,
) -> DomainResult<()> {
    let model = poi::ActiveModel {
        id: Set(id.to_string()),
        name: changes.name.clone().map_or(NotSet, Set),
        status: changes.status.map_or(NotSet, |s| Set(status_to_db(s))),
        created_at: NotSet,
        updated_at: Set(Utc::now()),
    };
    model.update(conn).await.map_err(db_err)?;
    Ok(())
}

// ── PoiRepository impl ──────────────────────────────────────────

#[async_trait]
impl PoiRepository for SeaOrmPoiRepository {
    async fn create(&self, new_poi: NewPoi) -> DomainResult<PoiRecord> {
        debug!("Creating POI: {}", new_poi.name);
        let now = Utc::now();

        let txn = self.db.begin().await.map_err(db_err)?;

        let model = poi::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(new_poi.name),
            status: Set(status_to_db(new_poi.status)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        if let Some(data) = &new_poi.address {
            insert_address(&txn, &model.id, data).await?;
        }
        if let Some(hours) = &new_poi.opening_hours {
            insert_opening_hours(&txn, &model.id, hours).await?;
        }

        txn.commit().await.map_err(db_err)?;

        info!("POI created: {}", model.id);
        Ok(record_from_model(model))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Poi>> {
        load_poi(&self.db, id).await
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<PaginatedResult<Poi>> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let total = poi::Entity::find().count(&txn).await.map_err(db_err)?;
        let models = poi::Entity::find()
            .order_by_asc(poi::Column::CreatedAt)
            .order_by_asc(poi::Column::Id)
            .offset(params.offset())
            .limit(params.limit)
            .all(&txn)
            .await
            .map_err(db_err)?;
        let items = hydrate(&txn, models).await?;

        txn.commit().await.map_err(db_err)?;
        Ok(PaginatedResult::new(items, total, params))
    }

    async fn update(&self, id: &str, changes: PoiChanges) -> DomainResult<Poi> {
        debug!("Updating POI: {}", id);
        let txn = self.db.begin().await.map_err(db_err)?;

        ensure_exists(&txn, id).await?;

        if changes.touches_scalars() {
            update_scalars(&txn, id, &changes).await?;
        }
        if let Some(data) = &changes.address {
            upsert_address(&txn, id, data).await?;
        }
        match changes.replacement_hours() {
            Some(hours) => replace_opening_hours(&txn, id, hours).await?,
            None if changes.opening_hours.is_some() => {
                warn!("Empty opening hours for POI {} ignored, keeping stored schedule", id);
            }
            None => {}
        }

        let poi = load_poi(&txn, id)
            .await?
            .ok_or_else(|| DomainError::poi_not_found(id))?;

        txn.commit().await.map_err(db_err)?;

        info!("POI updated: {}", id);
        Ok(poi)
    }

    async fn update_status(&self, id: &str, status: PoiStatus) -> DomainResult<Poi> {
        debug!("Updating POI status: {} -> {}", id, status);
        let txn = self.db.begin().await.map_err(db_err)?;

        ensure_exists(&txn, id).await?;
        update_scalars(&txn, id, &PoiChanges::status_only(status)).await?;

        let poi = load_poi(&txn, id)
            .await?
            .ok_or_else(|| DomainError::poi_not_found(id))?;

        txn.commit().await.map_err(db_err)?;

        info!("POI {} status updated to {}", id, status);
        Ok(poi)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        ensure_exists(&self.db, id).await?;

        let result = poi::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        // Gone between the existence check and the delete.
        if result.rows_affected == 0 {
            return Err(DomainError::Persistence(format!(
                "POI {} was removed by a concurrent request",
                id
            )));
        }

        info!("POI deleted: {}", id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::migrated_memory_db;

    async fn setup() -> (SeaOrmPoiRepository, DatabaseConnection) {
        let db = migrated_memory_db().await;
        (SeaOrmPoiRepository::new(db.clone()), db)
    }

    fn address_data(city: &str) -> AddressData {
        AddressData {
            country: "DE".into(),
            zip_code: "10115".into(),
            city: city.into(),
            street: "Invalidenstrasse".into(),
            house_number: "117".into(),
        }
    }

    fn hours(day: DayOfWeek, open: &str, close: &str, is_closed: bool) -> OpeningHoursData {
        OpeningHoursData {
            day_of_week: day,
            open_time: open.into(),
            close_time: close.into(),
            is_closed,
        }
    }

    fn weekday_schedule() -> Vec<OpeningHoursData> {
        vec![
            hours(DayOfWeek::Monday, "06:00", "22:00", false),
            hours(DayOfWeek::Tuesday, "06:00", "22:00", false),
            hours(DayOfWeek::Sunday, "00:00", "00:00", true),
        ]
    }

    fn full_poi(name: &str) -> NewPoi {
        NewPoi {
            name: name.into(),
            status: PoiStatus::Online,
            address: Some(address_data("Berlin")),
            opening_hours: Some(weekday_schedule()),
        }
    }

    fn bare_poi(name: &str) -> NewPoi {
        NewPoi {
            name: name.into(),
            status: PoiStatus::Offline,
            address: None,
            opening_hours: None,
        }
    }

    async fn count_rows<E>(db: &DatabaseConnection, _entity: E) -> u64
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        E::find().count(db).await.unwrap()
    }

    async fn seed_pump_tree(db: &DatabaseConnection, poi_id: &str) {
        pump::ActiveModel {
            id: Set(format!("{poi_id}-pump")),
            poi_id: Set(poi_id.to_string()),
            name: Set("Pump 1".into()),
        }
        .insert(db)
        .await
        .unwrap();
        fuel_product::ActiveModel {
            id: Set(format!("{poi_id}-diesel")),
            pump_id: Set(format!("{poi_id}-pump")),
            name: Set("Diesel".into()),
        }
        .insert(db)
        .await
        .unwrap();
        for (suffix, amount, currency) in [("eur", 1.789, "EUR"), ("chf", 1.95, "CHF")] {
            price::ActiveModel {
                id: Set(format!("{poi_id}-{suffix}")),
                fuel_product_id: Set(format!("{poi_id}-diesel")),
                amount: Set(amount),
                currency: Set(currency.into()),
            }
            .insert(db)
            .await
            .unwrap();
        }
    }

    fn assert_hours_match(stored: &[OpeningHours], expected: &[OpeningHoursData]) {
        assert_eq!(stored.len(), expected.len());
        for (s, e) in stored.iter().zip(expected) {
            assert_eq!(s.day_of_week, e.day_of_week);
            assert_eq!(s.open_time, e.open_time);
            assert_eq!(s.close_time, e.close_time);
            assert_eq!(s.is_closed, e.is_closed);
        }
    }

    #[tokio::test]
    async fn create_returns_scalar_record() {
        let (repo, _db) = setup().await;
        let record = repo.create(full_poi("Station A")).await.unwrap();

        assert!(!record.id.is_empty());
        assert_eq!(record.name, "Station A");
        assert_eq!(record.status, PoiStatus::Online);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[tokio::test]
    async fn created_children_read_back_exactly() {
        let (repo, _db) = setup().await;
        let input = full_poi("Station A");
        let record = repo.create(input.clone()).await.unwrap();

        let poi = repo.find_by_id(&record.id).await.unwrap().unwrap();
        let address = poi.address.expect("address stored");
        assert_eq!(address.poi_id, record.id);
        assert_eq!(address.city, "Berlin");
        assert_eq!(address.zip_code, "10115");
        assert_eq!(address.house_number, "117");
        assert_hours_match(&poi.opening_hours, input.opening_hours.as_deref().unwrap());
        assert!(poi.pumps.is_empty());
    }

    #[tokio::test]
    async fn create_without_children_reads_back_empty() {
        let (repo, _db) = setup().await;
        let record = repo.create(bare_poi("Bare")).await.unwrap();

        let poi = repo.find_by_id(&record.id).await.unwrap().unwrap();
        assert!(poi.address.is_none());
        assert!(poi.opening_hours.is_empty());
        assert_eq!(poi.status, PoiStatus::Offline);
    }

    #[tokio::test]
    async fn create_with_empty_schedule_is_accepted() {
        let (repo, db) = setup().await;
        let mut input = bare_poi("No hours");
        input.opening_hours = Some(vec![]);

        repo.create(input).await.unwrap();
        assert_eq!(count_rows(&db, opening_hours::Entity).await, 0);
    }

    #[tokio::test]
    async fn failed_address_insert_rolls_back_create() {
        let (repo, db) = setup().await;
        db.execute_unprepared(
            "CREATE TRIGGER fail_address BEFORE INSERT ON addresses \
             BEGIN SELECT RAISE(ABORT, 'forced address failure'); END;",
        )
        .await
        .unwrap();

        let err = repo.create(full_poi("Doomed")).await.unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        assert_eq!(count_rows(&db, poi::Entity).await, 0);
        assert_eq!(count_rows(&db, address::Entity).await, 0);
        assert_eq!(count_rows(&db, opening_hours::Entity).await, 0);
    }

    #[tokio::test]
    async fn failed_opening_hours_insert_rolls_back_create() {
        let (repo, db) = setup().await;
        db.execute_unprepared(
            "CREATE TRIGGER fail_hours BEFORE INSERT ON opening_hours \
             BEGIN SELECT RAISE(ABORT, 'forced hours failure'); END;",
        )
        .await
        .unwrap();

        let err = repo.create(full_poi("Doomed")).await.unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        assert_eq!(count_rows(&db, poi::Entity).await, 0);
        assert_eq!(count_rows(&db, address::Entity).await, 0);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let (repo, _db) = setup().await;
        assert!(repo.find_by_id("does-not-exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn read_hydrates_pump_tree() {
        let (repo, db) = setup().await;
        let record = repo.create(bare_poi("With pumps")).await.unwrap();
        seed_pump_tree(&db, &record.id).await;

        let poi = repo.find_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(poi.pumps.len(), 1);
        let pump = &poi.pumps[0];
        assert_eq!(pump.name, "Pump 1");
        assert_eq!(pump.fuel_products.len(), 1);
        let prices = &pump.fuel_products[0].prices;
        assert_eq!(prices.len(), 2);
        // Ordered by currency
        assert_eq!(prices[0].currency, "CHF");
        assert_eq!(prices[1].currency, "EUR");
        assert_eq!(prices[1].amount, 1.789);
    }

    #[tokio::test]
    async fn updating_name_leaves_everything_else() {
        let (repo, _db) = setup().await;
        let record = repo.create(full_poi("Old name")).await.unwrap();
        let before = repo.find_by_id(&record.id).await.unwrap().unwrap();

        let after = repo
            .update(
                &record.id,
                PoiChanges {
                    name: Some("New name".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.name, "New name");
        assert_eq!(after.status, before.status);
        assert_eq!(after.address, before.address);
        assert_eq!(after.opening_hours, before.opening_hours);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn address_update_inserts_when_absent() {
        let (repo, db) = setup().await;
        let record = repo.create(bare_poi("No address")).await.unwrap();

        let poi = repo
            .update(
                &record.id,
                PoiChanges {
                    address: Some(address_data("Hamburg")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(poi.address.unwrap().city, "Hamburg");
        assert_eq!(count_rows(&db, address::Entity).await, 1);
    }

    #[tokio::test]
    async fn address_update_modifies_existing_row() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Has address")).await.unwrap();
        let original = repo
            .find_by_id(&record.id)
            .await
            .unwrap()
            .unwrap()
            .address
            .unwrap();

        let poi = repo
            .update(
                &record.id,
                PoiChanges {
                    address: Some(address_data("Munich")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = poi.address.unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.city, "Munich");
        assert_eq!(count_rows(&db, address::Entity).await, 1);
    }

    #[tokio::test]
    async fn second_address_row_is_rejected_by_store() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Unique")).await.unwrap();

        let err = insert_address(&db, &record.id, &address_data("Bonn"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }

    #[tokio::test]
    async fn opening_hours_are_replaced_wholesale() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Hours")).await.unwrap();
        let replacement = vec![
            hours(DayOfWeek::Friday, "08:00", "20:00", false),
            hours(DayOfWeek::Saturday, "09:30", "14:45", false),
        ];

        let poi = repo
            .update(
                &record.id,
                PoiChanges {
                    opening_hours: Some(replacement.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_hours_match(&poi.opening_hours, &replacement);
        assert_eq!(count_rows(&db, opening_hours::Entity).await, 2);
    }

    #[tokio::test]
    async fn empty_opening_hours_keep_existing_entries() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Keep hours")).await.unwrap();

        let poi = repo
            .update(
                &record.id,
                PoiChanges {
                    opening_hours: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_hours_match(&poi.opening_hours, &weekday_schedule());
        assert_eq!(count_rows(&db, opening_hours::Entity).await, 3);
    }

    #[tokio::test]
    async fn failed_update_step_rolls_back_earlier_steps() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Stable")).await.unwrap();
        db.execute_unprepared(
            "CREATE TRIGGER fail_hours BEFORE INSERT ON opening_hours \
             BEGIN SELECT RAISE(ABORT, 'forced hours failure'); END;",
        )
        .await
        .unwrap();

        let err = repo
            .update(
                &record.id,
                PoiChanges {
                    name: Some("Renamed".into()),
                    address: Some(address_data("Cologne")),
                    opening_hours: Some(vec![hours(DayOfWeek::Monday, "07:00", "19:00", false)]),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        let poi = repo.find_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(poi.name, "Stable");
        assert_eq!(poi.address.unwrap().city, "Berlin");
        assert_hours_match(&poi.opening_hours, &weekday_schedule());
    }

    #[tokio::test]
    async fn update_missing_poi_is_not_found_and_changes_nothing() {
        let (repo, db) = setup().await;
        repo.create(full_poi("Bystander")).await.unwrap();

        let err = repo
            .update(
                "missing",
                PoiChanges {
                    name: Some("x".into()),
                    address: Some(address_data("Nowhere")),
                    opening_hours: Some(weekday_schedule()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(count_rows(&db, poi::Entity).await, 1);
        assert_eq!(count_rows(&db, address::Entity).await, 1);
        assert_eq!(count_rows(&db, opening_hours::Entity).await, 3);
    }

    #[tokio::test]
    async fn status_update_returns_hydrated_poi() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Status")).await.unwrap();
        seed_pump_tree(&db, &record.id).await;

        let poi = repo
            .update_status(&record.id, PoiStatus::Maintenance)
            .await
            .unwrap();
        assert_eq!(poi.status, PoiStatus::Maintenance);
        assert_eq!(poi.name, "Status");
        assert!(poi.address.is_some());
        assert_eq!(poi.opening_hours.len(), 3);
        assert_eq!(poi.pumps.len(), 1);
    }

    #[tokio::test]
    async fn status_update_missing_poi_is_not_found() {
        let (repo, _db) = setup().await;
        let err = repo
            .update_status("missing", PoiStatus::Online)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_cascades_to_every_child() {
        let (repo, db) = setup().await;
        let record = repo.create(full_poi("Doomed")).await.unwrap();
        seed_pump_tree(&db, &record.id).await;

        repo.delete(&record.id).await.unwrap();

        assert!(repo.find_by_id(&record.id).await.unwrap().is_none());
        assert_eq!(count_rows(&db, address::Entity).await, 0);
        assert_eq!(count_rows(&db, opening_hours::Entity).await, 0);
        assert_eq!(count_rows(&db, pump::Entity).await, 0);
        assert_eq!(count_rows(&db, fuel_product::Entity).await, 0);
        assert_eq!(count_rows(&db, price::Entity).await, 0);
    }

    #[tokio::test]
    async fn delete_missing_poi_is_not_found() {
        let (repo, db) = setup().await;
        repo.create(bare_poi("Bystander")).await.unwrap();

        let err = repo.delete("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(count_rows(&db, poi::Entity).await, 1);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let (repo, _db) = setup().await;
        let record = repo.create(bare_poi("Once")).await.unwrap();

        repo.delete(&record.id).await.unwrap();
        assert!(repo.delete(&record.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_paginates_over_all_pois() {
        let (repo, _db) = setup().await;
        for i in 0..25 {
            repo.create(bare_poi(&format!("POI {i:02}"))).await.unwrap();
        }

        let page = repo.list(PaginationParams::new(3, 10)).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 10);

        let first = repo.list(PaginationParams::new(1, 10)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].name, "POI 00");
    }

    #[tokio::test]
    async fn list_beyond_last_page_is_empty() {
        let (repo, _db) = setup().await;
        for i in 0..25 {
            repo.create(bare_poi(&format!("POI {i}"))).await.unwrap();
        }

        let page = repo.list(PaginationParams::new(100, 10)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 100);
    }

    #[tokio::test]
    async fn list_with_huge_page_or_limit_does_not_fail() {
        let (repo, _db) = setup().await;
        for i in 0..3 {
            repo.create(bare_poi(&format!("POI {i}"))).await.unwrap();
        }

        let far = repo
            .list(PaginationParams::new(1_000_000_000_000_000_000, 10))
            .await
            .unwrap();
        assert!(far.items.is_empty());
        assert_eq!(far.total, 3);
        assert_eq!(far.total_pages, 1);

        let everything = repo.list(PaginationParams::new(1, u64::MAX)).await.unwrap();
        assert_eq!(everything.items.len(), 3);
        assert_eq!(everything.total_pages, 1);

        let second = repo.list(PaginationParams::new(2, u64::MAX)).await.unwrap();
        assert!(second.items.is_empty());

        let both = repo
            .list(PaginationParams::new(u64::MAX, u64::MAX))
            .await
            .unwrap();
        assert!(both.items.is_empty());
    }

    #[tokio::test]
    async fn list_hydrates_each_poi() {
        let (repo, db) = setup().await;
        let with_tree = repo.create(full_poi("Full")).await.unwrap();
        seed_pump_tree(&db, &with_tree.id).await;
        repo.create(bare_poi("Bare")).await.unwrap();

        let page = repo.list(PaginationParams::default()).await.unwrap();
        assert_eq!(page.items.len(), 2);

        let full = page.items.iter().find(|p| p.id == with_tree.id).unwrap();
        assert!(full.address.is_some());
        assert_eq!(full.opening_hours.len(), 3);
        assert_eq!(full.pumps[0].fuel_products[0].prices.len(), 2);

        let bare = page.items.iter().find(|p| p.id != with_tree.id).unwrap();
        assert!(bare.address.is_none());
        assert!(bare.opening_hours.is_empty());
        assert!(bare.pumps.is_empty());
    }

    #[tokio::test]
    async fn list_of_empty_store() {
        let (repo, _db) = setup().await;
        let page = repo.list(PaginationParams::default()).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }
}
