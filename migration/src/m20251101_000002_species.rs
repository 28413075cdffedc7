use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_planets::Planets;

static IDX_SPECIES_PLANET_ID: &str = "idx-species-planet_id";
static FK_SPECIES_PLANET_ID: &str = "fk-species-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string(Species::Type))
                    .col(integer(Species::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPECIES_PLANET_ID)
                    .table(Species::Table)
                    .col(Species::PlanetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIES_PLANET_ID)
                    .from_tbl(Species::Table)
                    .from_col(Species::PlanetId)
                    .to_tbl(Planets::Table)
                    .to_col(Planets::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIES_PLANET_ID)
                    .table(Species::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SPECIES_PLANET_ID)
                    .table(Species::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Type,
    PlanetId,
}
