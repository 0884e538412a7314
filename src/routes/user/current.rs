use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use crate::utils::webutils::authenticated_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[get("")]
pub async fn current(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<UserRes> {
    let user = authenticated_user(&db, auth.token()).await?;
    Ok(ApiResponse::Ok(UserRes::from(user)))
}
