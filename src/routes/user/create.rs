use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::token::{construct_token, encrypt, new_token};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

/// Admin-gated provisioning. The plaintext token is returned once, here.
#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let secret = new_token();
    let auth_hash =
        encrypt(&secret).map_err(|e| AppError::Internal(format!("token hashing failed: {e}")))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: body.name.clone(),
            auth_hash,
        })
        .await?;

    info!("User {} ({}) created.", body.name, user_id);

    Ok(ApiResponse::Created(UserCreateRes {
        id: user_id,
        token: construct_token(&user_id, &secret),
    }))
}
