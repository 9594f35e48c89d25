use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // domain
    #[error("team already exists")]
    TeamExists,
    #[error("team not found")]
    TeamNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("PR id already exists")]
    PrExists,
    #[error("PR not found")]
    PrNotFound,
    #[error("author not found or has no team")]
    AuthorMissing,
    #[error("cannot reassign on merged PR")]
    PrMerged,
    #[error("reviewer is not assigned to this PR")]
    NotAssigned,
    #[error("no active replacement candidate in team")]
    NoCandidate,

    // request shape
    #[error("validation error: {0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TeamExists => "TEAM_EXISTS",
            Self::TeamNotFound | Self::UserNotFound | Self::PrNotFound | Self::AuthorMissing => "NOT_FOUND",
            Self::PrExists => "PR_EXISTS",
            Self::PrMerged => "PR_MERGED",
            Self::NotAssigned => "NOT_ASSIGNED",
            Self::NoCandidate => "NO_CANDIDATE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Db(_) => "DB_ERROR",
        }
    }

    /// True for the caller-facing conditions; store failures are not.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Db(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::TeamExists | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::TeamNotFound | Self::UserNotFound | Self::PrNotFound | Self::AuthorMissing => StatusCode::NOT_FOUND,
            Self::PrExists | Self::PrMerged | Self::NotAssigned | Self::NoCandidate => StatusCode::CONFLICT,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // store errors can carry SQL text, keep it in the logs
        let message = if self.is_domain() {
            self.to_string()
        } else {
            tracing::error!("request failed: {self}");
            "internal server error".to_string()
        };

        HttpResponse::build(self.status_code()).json(ErrorEnvelope {
            error: ErrorBody { code: self.code(), message },
        })
    }
}
