use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_country_table::Country;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string_null(Vehicle::Description))
                    .col(string_len(Vehicle::VehicleType, 16))
                    .col(string_null(Vehicle::ImgUrl))
                    .col(integer(Vehicle::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_country_id")
                            .from(Vehicle::Table, Vehicle::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    Name,
    Description,
    VehicleType,
    ImgUrl,
    CountryId,
}
