use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::group::{GroupKind, GroupPrivacy};
use chrono::Utc;
use entity::group::{ActiveModel as GroupActive, Entity as Group, Model as GroupModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_group(
        &self,
        leader: Uuid,
        name: String,
        kind: GroupKind,
        privacy: GroupPrivacy,
    ) -> Result<Uuid, AppError> {
        let gid = Uuid::new_v4();
        let now = Utc::now();
        Group::insert(GroupActive {
            id: Set(gid),
            name: Set(name),
            kind: Set(kind.to_string()),
            privacy: Set(privacy.to_string()),
            leader: Set(leader),
            quest_key: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(gid)
    }

    pub async fn find_group(&self, id: Uuid) -> Result<Option<GroupModel>, AppError> {
        Ok(Group::find_by_id(id).one(&self.database_connection).await?)
    }

    pub async fn set_group_quest(
        &self,
        group_id: Uuid,
        quest_key: Option<&str>,
    ) -> Result<(), AppError> {
        let group = Group::find_by_id(group_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Group does not exist".into()))?;
        let mut am: GroupActive = group.into();
        am.quest_key = Set(quest_key.map(|key| key.to_string()));
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(())
    }
}
