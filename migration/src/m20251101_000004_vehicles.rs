use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_characters::Characters;

static IDX_VEHICLES_CHARAC_ID: &str = "idx-vehicles-charac_id";
static FK_VEHICLES_CHARAC_ID: &str = "fk-vehicles-charac_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string(Vehicles::Name))
                    .col(string(Vehicles::Type))
                    .col(string(Vehicles::MaxSpeed))
                    .col(integer(Vehicles::CharacId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLES_CHARAC_ID)
                    .table(Vehicles::Table)
                    .col(Vehicles::CharacId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLES_CHARAC_ID)
                    .from_tbl(Vehicles::Table)
                    .from_col(Vehicles::CharacId)
                    .to_tbl(Characters::Table)
                    .to_col(Characters::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLES_CHARAC_ID)
                    .table(Vehicles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLES_CHARAC_ID)
                    .table(Vehicles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    Name,
    Type,
    MaxSpeed,
    CharacId,
}
