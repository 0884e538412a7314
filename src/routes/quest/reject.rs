use crate::content;
use crate::db::postgres_service::PostgresService;
use crate::i18n::MessageId;
use crate::types::error::AppError;
use crate::types::group::GroupKind;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticated_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Decline a pending quest invitation. Check order is part of the contract:
/// overlapping failures must always report the same error.
#[post("/{group_id}/quests/reject/{quest_key}")]
pub async fn reject(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, String)>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let (group_id, quest_key) = path.into_inner();
    let user = authenticated_user(&db, auth.token()).await?;

    let group = db
        .find_group(group_id)
        .await?
        .ok_or(AppError::NotFound(MessageId::GroupNotFound))?;

    if group.kind != GroupKind::Party.as_str() {
        return Err(AppError::NotAuthorized(MessageId::GuildQuestsNotSupported));
    }

    if content::get_quest(&quest_key).is_none() {
        return Err(AppError::NotFound(MessageId::QuestNotFound {
            key: quest_key,
        }));
    }

    if !(user.rsvp_needed && user.quest_key.as_deref() == Some(quest_key.as_str())) {
        return Err(AppError::NotAuthorized(MessageId::QuestNotOwned));
    }

    if group.quest_key.as_deref() != Some(quest_key.as_str()) {
        return Err(AppError::NotFound(MessageId::QuestInvitationDoesNotExist));
    }

    db.reject_quest_invitation(user.id, &quest_key).await?;
    info!("User {} rejected the {} quest invitation.", user.id, quest_key);

    Ok(ApiResponse::Ok(Response {
        message: "Quest invitation rejected.".to_string(),
    }))
}
