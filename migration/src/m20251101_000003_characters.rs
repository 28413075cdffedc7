use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_planets::Planets, m20251101_000002_species::Species};

static IDX_CHARACTERS_PLANET_ID: &str = "idx-characters-planet_id";
static IDX_CHARACTERS_SPECIE_ID: &str = "idx-characters-specie_id";
static FK_CHARACTERS_PLANET_ID: &str = "fk-characters-planet_id";
static FK_CHARACTERS_SPECIE_ID: &str = "fk-characters-specie_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string(Characters::Name))
                    .col(string_len(Characters::Description, 500))
                    .col(integer(Characters::PlanetId))
                    .col(integer(Characters::SpecieId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTERS_PLANET_ID)
                    .table(Characters::Table)
                    .col(Characters::PlanetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTERS_SPECIE_ID)
                    .table(Characters::Table)
                    .col(Characters::SpecieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTERS_PLANET_ID)
                    .from_tbl(Characters::Table)
                    .from_col(Characters::PlanetId)
                    .to_tbl(Planets::Table)
                    .to_col(Planets::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTERS_SPECIE_ID)
                    .from_tbl(Characters::Table)
                    .from_col(Characters::SpecieId)
                    .to_tbl(Species::Table)
                    .to_col(Species::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTERS_SPECIE_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTERS_PLANET_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTERS_SPECIE_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTERS_PLANET_ID)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Description,
    PlanetId,
    SpecieId,
}
