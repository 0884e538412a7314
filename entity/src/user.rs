use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub auth_hash: String,
    pub party_id: Option<Uuid>,           // FK -> group.id (nullable)
    pub quest_key: Option<String>,        // quest this user was invited to, if any
    pub rsvp_needed: bool,                // true while the invitation awaits an answer
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::PartyId",
        to   = "super::group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Party,
}

impl ActiveModelBehavior for ActiveModel {}
