use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battle::Table)
                    .if_not_exists()
                    .col(pk_auto(Battle::Id))
                    .col(string(Battle::Name))
                    .col(string(Battle::Location))
                    .col(string_null(Battle::ImgUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Battle {
    #[sea_orm(iden = "battles")]
    Table,
    Id,
    Name,
    Location,
    ImgUrl,
}
