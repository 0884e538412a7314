use crate::db::postgres_service::PostgresService;
use crate::i18n::MessageId;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Name.eq(name))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn find_user(&self, id: Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.database_connection).await?)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_name(&payload.name).await? {
            return Err(AppError::AlreadyExists(MessageId::UsernameTaken));
        }
        let uid = token::new_id();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            auth_hash: Set(payload.auth_hash),
            party_id: Set(None),
            quest_key: Set(None),
            rsvp_needed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(uid)
    }

    pub async fn set_user_party(
        &self,
        user_id: Uuid,
        party_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let user = self
            .find_user(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;
        let mut am: UserActive = user.into();
        am.party_id = Set(party_id);
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(())
    }
}
