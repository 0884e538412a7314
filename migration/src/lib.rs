pub use sea_orm_migration::prelude::*;

mod m20250412_000001_create_user_table;
mod m20250419_000001_create_group_table;
mod m20250503_000001_add_quest_state;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250412_000001_create_user_table::Migration),
            Box::new(m20250419_000001_create_group_table::Migration),
            Box::new(m20250503_000001_add_quest_state::Migration),
        ]
    }
}
