//! Registration endpoint.
//!
//! ```text
//! POST /register {"nickname":"ada","email":"ada@example.com","password":"F9DXIK6hvuFINjmC"}
//! ```
//!
//! Responses are plain text with a trailing newline: `201` on success, `400`
//! with the rejection message on failure, `405` for any method but `POST`.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::{TraceId, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Path the endpoint is mounted on.
pub const REGISTER_PATH: &str = "/register";

/// Body sent back after a successful registration.
pub const REGISTERED_BODY: &str = "User registered successfully\n";

const FIELDS: [&str; 3] = ["nickname", "email", "password"];

/// Registration request body for `POST /register`.
///
/// Absent and `null` fields decode as empty strings and unknown fields are
/// ignored, so an incomplete payload reaches the shape rules rather than
/// failing to decode.
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<RegisterRequest> for User {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest {
            nickname,
            email,
            password,
        } = value;
        User::new(
            nickname.unwrap_or_default(),
            email.unwrap_or_default(),
            password.unwrap_or_default(),
        )
    }
}

/// Rename the recognised keys of `object` to their canonical spelling.
///
/// Keys match regardless of ASCII case. An exact match wins over a
/// case-insensitive one; every other key is dropped.
fn canonical_fields(mut object: Map<String, Value>) -> Map<String, Value> {
    FIELDS
        .iter()
        .filter_map(|&field| {
            let key = if object.contains_key(field) {
                field.to_owned()
            } else {
                object
                    .keys()
                    .find(|key| key.eq_ignore_ascii_case(field))?
                    .clone()
            };
            object.remove(&key).map(|value| (field.to_owned(), value))
        })
        .collect()
}

/// Decode the first JSON value in `body` as a [`RegisterRequest`].
///
/// The value must be a JSON object or `null`; `null` decodes as an empty
/// request. Anything after it is ignored and the `Content-Type` header is not
/// consulted.
fn decode_body(body: &[u8]) -> Result<RegisterRequest, ApiError> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next();
    match first {
        Some(Ok(Value::Null)) => Ok(RegisterRequest::default()),
        Some(Ok(Value::Object(object))) => {
            serde_json::from_value(Value::Object(canonical_fields(object)))
                .map_err(|_| ApiError::MalformedRequest)
        }
        _ => Err(ApiError::MalformedRequest),
    }
}

/// Drain the request stream without a size cap.
async fn read_payload(mut payload: web::Payload) -> Result<web::BytesMut, ApiError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            debug!(
                trace_id = %current_trace_id(),
                error = %err,
                "registration body read failed"
            );
            ApiError::MalformedRequest
        })?;
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn current_trace_id() -> String {
    TraceId::current()
        .map(|id| id.to_string())
        .unwrap_or_default()
}

/// Validate a candidate and store it.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use signup::inbound::http::register::register;
///
/// let _app = App::new().route("/register", web::post().to(register));
/// ```
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let body = read_payload(payload).await?;
    let request = decode_body(&body).inspect_err(|err| {
        debug!(trace_id = %current_trace_id(), code = err.code(), "undecodable registration body");
    })?;
    let candidate = User::from(request);
    let nickname = candidate.nickname().to_owned();

    match state.registry.register(candidate).await {
        Ok(()) => {
            info!(trace_id = %current_trace_id(), %nickname, "user registered");
            Ok(HttpResponse::Created()
                .content_type(ContentType::plaintext())
                .body(REGISTERED_BODY))
        }
        Err(err) => {
            info!(
                trace_id = %current_trace_id(),
                %nickname,
                code = err.code(),
                conflict = err.is_conflict(),
                "registration rejected"
            );
            Err(err.into())
        }
    }
}

/// Fallback for every method other than `POST`.
pub async fn method_not_allowed(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(
        trace_id = %current_trace_id(),
        method = %req.method(),
        "method not allowed on registration endpoint"
    );
    Err(ApiError::MethodNotAllowed)
}

/// Mount the registration resource.
///
/// Expects [`HttpState`] to be registered as `web::Data` on the app.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use signup::domain::InMemoryUserRegistry;
/// use signup::inbound::http::{configure, state::HttpState};
///
/// let state = HttpState::new(Arc::new(InMemoryUserRegistry::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(REGISTER_PATH)
            .route(web::post().to(register))
            .default_service(web::to(method_not_allowed)),
    );
}

#[cfg(test)]
mod tests;
