use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::i18n::MessageId;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, verify};

/// Gate for provisioning routes: the bearer token must be the static admin key.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().admin_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}

/// Resolve the acting user from a bearer token. Every failure mode collapses
/// into the same credentials error.
pub async fn authenticated_user(
    db: &PostgresService,
    token: &str,
) -> Result<entity::user::Model, AppError> {
    let (user_id, secret) = extract_token_parts(token)
        .ok_or(AppError::NotAuthorized(MessageId::InvalidCredentials))?;

    let user = db
        .find_user(user_id)
        .await?
        .ok_or(AppError::NotAuthorized(MessageId::InvalidCredentials))?;

    match verify(&secret, &user.auth_hash) {
        Ok(true) => Ok(user),
        _ => Err(AppError::NotAuthorized(MessageId::InvalidCredentials)),
    }
}
