use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub kind: String,                     // "party" | "guild"
    pub privacy: String,                  // "private" | "public"
    pub leader: Uuid,
    pub quest_key: Option<String>,        // quest the group is actively running
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user::Relation::Party.def() // Group has_many Users via user.party_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
