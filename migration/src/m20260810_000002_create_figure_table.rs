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
                    .table(Figure::Table)
                    .if_not_exists()
                    .col(pk_auto(Figure::Id))
                    .col(string(Figure::Name))
                    .col(string_null(Figure::Description))
                    .col(string_len(Figure::Side, 16))
                    .col(string_null(Figure::ImgUrl))
                    .col(integer(Figure::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_figure_country_id")
                            .from(Figure::Table, Figure::CountryId)
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
            .drop_table(Table::drop().table(Figure::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Figure {
    #[sea_orm(iden = "figures")]
    Table,
    Id,
    Name,
    Description,
    Side,
    ImgUrl,
    CountryId,
}
