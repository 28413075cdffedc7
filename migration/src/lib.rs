pub use sea_orm_migration::prelude::*;

mod m20251101_000001_planets;
mod m20251101_000002_species;
mod m20251101_000003_characters;
mod m20251101_000004_vehicles;
mod m20251101_000005_user;
mod m20251101_000006_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_planets::Migration),
            Box::new(m20251101_000002_species::Migration),
            Box::new(m20251101_000003_characters::Migration),
            Box::new(m20251101_000004_vehicles::Migration),
            Box::new(m20251101_000005_user::Migration),
            Box::new(m20251101_000006_favorite::Migration),
        ]
    }
}
