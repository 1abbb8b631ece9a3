use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Application-level error type
#[derive(Debug)]
pub enum AppError {
    /// GraphQL payload construction or response decoding failed
    Query(String),
    /// A required request header was absent
    MissingHeader(&'static str),
    /// Non-success response from GitHub, forwarded to the caller verbatim
    Upstream { status: u16, body: String },
    /// Internal server error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
    meta: ErrorMeta,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Serialize)]
struct ErrorMeta {
    request_id: String,
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Query(_) => "QUERY_FAILED",
            Self::MissingHeader(_) => "MISSING_HEADER",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(msg) => write!(f, "Error while running query: {msg}"),
            Self::MissingHeader(name) => write!(f, "Missing required header: {name}"),
            Self::Upstream { status, .. } => {
                write!(f, "GitHub responded with status {status}")
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Upstream errors keep their original status and body; everything
        // else gets the standard error envelope.
        if let Self::Upstream { status, body } = self {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            return HttpResponse::build(status).body(body.clone());
        }

        let error_response = ErrorResponse {
            error: ErrorBody {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
            meta: ErrorMeta {
                request_id: uuid::Uuid::new_v4().to_string(),
            },
        };

        match self {
            Self::MissingHeader(_) => HttpResponse::BadRequest().json(error_response),
            _ => HttpResponse::InternalServerError().json(error_response),
        }
    }
}
