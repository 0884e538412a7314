use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

use crate::i18n::MessageId;

#[derive(Debug, Error)]
pub enum AppError {
    // domain errors, each carrying the message identifier to render
    #[error("{}", .0.render())]
    NotFound(MessageId),
    #[error("{}", .0.render())]
    NotAuthorized(MessageId),
    #[error("{}", .0.render())]
    AlreadyExists(MessageId),

    // infra things
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: u16,
    error: &'static str,
    message: &'a str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NotFound",
            Self::NotAuthorized(_) => "NotAuthorized",
            Self::AlreadyExists(_) => "AlreadyExists",
            Self::Db(_) | Self::Internal(_) => "InternalServerError",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound(id) | Self::NotAuthorized(id) | Self::AlreadyExists(id) => id.render(),
            // never leak driver detail to the caller
            Self::Db(_) | Self::Internal(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotAuthorized(_) => StatusCode::UNAUTHORIZED,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            code: status.as_u16(),
            error: self.kind(),
            message: &self.message(),
        })
    }
}
