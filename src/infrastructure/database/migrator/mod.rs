//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_pois;
mod m20240101_000002_create_addresses;
mod m20240101_000003_create_opening_hours;
mod m20240101_000004_create_pumps;
mod m20240101_000005_create_fuel_products;
mod m20240101_000006_create_prices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_pois::Migration),
            Box::new(m20240101_000002_create_addresses::Migration),
            Box::new(m20240101_000003_create_opening_hours::Migration),
            Box::new(m20240101_000004_create_pumps::Migration),
            Box::new(m20240101_000005_create_fuel_products::Migration),
            Box::new(m20240101_000006_create_prices::Migration),
        ]
    }
}
