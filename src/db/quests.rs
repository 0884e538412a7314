use crate::db::postgres_service::PostgresService;
use crate::i18n::MessageId;
use crate::types::error::AppError;
use chrono::Utc;
use entity::group::{ActiveModel as GroupActive, Entity as Group};
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

fn holds_pending_rsvp(user: &UserModel, quest_key: &str) -> bool {
    user.rsvp_needed && user.quest_key.as_deref() == Some(quest_key)
}

impl PostgresService {
    /// Record invitation state on a user row. `rsvp_needed == false` marks an
    /// invitation the user has already answered (or sent themselves).
    pub async fn set_quest_invitation(
        &self,
        user_id: Uuid,
        quest_key: &str,
        rsvp_needed: bool,
    ) -> Result<(), AppError> {
        let user = self
            .find_user(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;
        let mut am: UserActive = user.into();
        am.quest_key = Set(Some(quest_key.to_string()));
        am.rsvp_needed = Set(rsvp_needed);
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(())
    }

    /// Decline a pending invitation: clears key and RSVP flag. The guarded
    /// read takes the row lock, so of two racing answers only the first
    /// still sees the pending flag; the loser gets `QuestNotOwned`.
    pub async fn reject_quest_invitation(
        &self,
        user_id: Uuid,
        quest_key: &str,
    ) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(user_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        if !holds_pending_rsvp(&user, quest_key) {
            txn.rollback().await?;
            return Err(AppError::NotAuthorized(MessageId::QuestNotOwned));
        }

        let mut am: UserActive = user.into();
        am.quest_key = Set(None);
        am.rsvp_needed = Set(false);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Keeps the quest key, clears the RSVP flag. Same guarded shape as
    /// rejection.
    pub async fn accept_quest_invitation(
        &self,
        user_id: Uuid,
        quest_key: &str,
    ) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(user_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        if !holds_pending_rsvp(&user, quest_key) {
            txn.rollback().await?;
            return Err(AppError::NotAuthorized(MessageId::QuestNotOwned));
        }

        let mut am: UserActive = user.into();
        am.rsvp_needed = Set(false);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Put the group on the quest and hand every member an invitation. The
    /// inviter's RSVP is considered answered; everyone else still owes one.
    pub async fn send_quest_invitations(
        &self,
        group_id: Uuid,
        quest_key: &str,
        inviter: Uuid,
    ) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let group = Group::find_by_id(group_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Group does not exist".into()))?;
        let mut gam: GroupActive = group.into();
        gam.quest_key = Set(Some(quest_key.to_string()));
        gam.updated_at = Set(Utc::now());
        gam.update(&txn).await?;

        let members = User::find()
            .filter(entity::user::Column::PartyId.eq(group_id))
            .all(&txn)
            .await?;
        for member in members {
            let needs_rsvp = member.id != inviter;
            let mut am: UserActive = member.into();
            am.quest_key = Set(Some(quest_key.to_string()));
            am.rsvp_needed = Set(needs_rsvp);
            am.updated_at = Set(Utc::now());
            am.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
