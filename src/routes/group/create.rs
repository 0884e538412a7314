use crate::db::postgres_service::PostgresService;
use crate::i18n::MessageId;
use crate::types::error::AppError;
use crate::types::group::{GroupCreateRes, GroupKind, RGroupCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticated_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
    body: web::Json<RGroupCreate>,
) -> ApiResult<GroupCreateRes> {
    let user = authenticated_user(&db, auth.token()).await?;

    if body.kind == GroupKind::Party && user.party_id.is_some() {
        return Err(AppError::NotAuthorized(MessageId::AlreadyInParty));
    }

    let group_id = db
        .create_group(user.id, body.name.clone(), body.kind, body.privacy)
        .await?;

    if body.kind == GroupKind::Party {
        db.set_user_party(user.id, Some(group_id)).await?;
    }

    info!("User {} created {} {}.", user.id, body.kind, group_id);

    Ok(ApiResponse::Created(GroupCreateRes {
        id: group_id.to_string(),
        message: format!("Group {} has been successfully created.", body.name),
    }))
}
