pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_country_table;
mod m20260810_000002_create_figure_table;
mod m20260810_000003_create_vehicle_table;
mod m20260810_000004_create_battle_table;
mod m20260810_000005_create_battle_country_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_country_table::Migration),
            Box::new(m20260810_000002_create_figure_table::Migration),
            Box::new(m20260810_000003_create_vehicle_table::Migration),
            Box::new(m20260810_000004_create_battle_table::Migration),
            Box::new(m20260810_000005_create_battle_country_table::Migration),
        ]
    }
}
