//! HTTP adapter mapping for registration failures.
//!
//! Every failure is rendered as a plain-text body holding the message and a
//! trailing newline. All registry rejections share status 400; clients that
//! need to tell them apart match on the message text.

use actix_web::http::header::{self, ContentType, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::RegistrationError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The registry turned the candidate away.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    /// The body could not be decoded into a registration payload.
    #[error("invalid request body")]
    MalformedRequest,
    /// The endpoint only accepts `POST`.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Stable machine-readable identifier used in logs.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Registration(err) => err.code(),
            Self::MalformedRequest => "malformed_request",
            Self::MethodNotAllowed => "method_not_allowed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Registration(_) | Self::MalformedRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .insert_header((
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .body(format!("{self}\n"))
    }
}
