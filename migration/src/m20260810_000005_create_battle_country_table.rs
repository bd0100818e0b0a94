use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_country_table::Country;
use super::m20260810_000004_create_battle_table::Battle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BattleCountry::Table)
                    .if_not_exists()
                    .col(integer(BattleCountry::BattleId))
                    .col(integer(BattleCountry::CountryId))
                    .primary_key(
                        Index::create()
                            .name("pk_battle_country")
                            .col(BattleCountry::BattleId)
                            .col(BattleCountry::CountryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_country_battle_id")
                            .from(BattleCountry::Table, BattleCountry::BattleId)
                            .to(Battle::Table, Battle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_country_country_id")
                            .from(BattleCountry::Table, BattleCountry::CountryId)
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
            .drop_table(Table::drop().table(BattleCountry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BattleCountry {
    #[sea_orm(iden = "battle_countries")]
    Table,
    BattleId,
    CountryId,
}
