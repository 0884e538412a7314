use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[allow(dead_code)]
#[derive(DeriveIden)]
enum User {
    Table,
    QuestKey,
    RsvpNeeded,
}

#[allow(dead_code)]
#[derive(DeriveIden)]
enum Group {
    Table,
    QuestKey,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // per-user invitation state
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(ColumnDef::new(User::QuestKey).string().null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(
                    ColumnDef::new(User::RsvpNeeded)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .to_owned(),
        ).await?;

        // quest the group is running
        m.alter_table(
            Table::alter()
                .table(Group::Table)
                .add_column(ColumnDef::new(Group::QuestKey).string().null())
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.alter_table(
            Table::alter()
                .table(Group::Table)
                .drop_column(Group::QuestKey)
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::RsvpNeeded)
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::QuestKey)
                .to_owned(),
        ).await?;

        Ok(())
    }
}
