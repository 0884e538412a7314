use sea_orm_migration::{prelude::*, sea_query::TableForeignKey};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[allow(dead_code)]
#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    PartyId,
}

#[derive(DeriveIden)]
enum Group {
    Table,
    Id,
    Name,
    Kind,
    Privacy,
    Leader,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Group::Table)
                .col(ColumnDef::new(Group::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Group::Name).string().not_null())
                .col(ColumnDef::new(Group::Kind).string().not_null())
                .col(ColumnDef::new(Group::Privacy).string().not_null())
                .col(ColumnDef::new(Group::Leader).uuid().not_null())
                .col(ColumnDef::new(Group::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Group::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        // users.party_id stays nullable: most users are not in a party
        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_column(ColumnDef::new(User::PartyId).uuid().null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_user_party")
                        .from_tbl(User::Table)
                        .from_col(User::PartyId)
                        .to_tbl(Group::Table)
                        .to_col(Group::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_party_id")
                .table(User::Table)
                .col(User::PartyId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("idx_user_party_id").table(User::Table).to_owned()).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_foreign_key(Alias::new("fk_user_party"))
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(User::Table)
                .drop_column(User::PartyId)
                .to_owned(),
        ).await?;

        m.drop_table(Table::drop().table(Group::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
