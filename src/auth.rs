use crate::error::ErrorResponse;
use axum::{
    extract::{rejection::QueryRejection, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use serde::Deserialize;
use std::sync::Arc;
use subtle::ConstantTimeEq;

pub const REALM: &str = "runtime-config";

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Token check guarding every authenticated route
///
/// Accepts `Authorization: Bearer <token>`, `Authorization: token <token>`
/// or a `?token=<token>` query parameter. Requests without a matching token
/// are answered with 401 and never reach the inner handler.
pub async fn require_token(
    State(expected): State<Arc<str>>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    req: Request,
    next: Next,
) -> Response {
    let presented = bearer
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
        .or_else(|| token_scheme(req.headers()))
        .or_else(|| query.ok().and_then(|Query(query)| query.token));

    let matches = presented
        .as_ref()
        .map(|token| bool::from(token.as_bytes().ct_eq(expected.as_bytes())));

    match matches {
        Some(true) => next.run(req).await,
        Some(false) => {
            tracing::debug!("Rejected request to {} with mismatched token", req.uri().path());
            unauthorized("invalid_token", "token_mismatch")
        }
        None => {
            tracing::debug!("Rejected request to {} without a token", req.uri().path());
            unauthorized("invalid_request", "missing_token")
        }
    }
}

// `Authorization: token <value>`, the scheme notebook clients send
fn token_scheme(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("token")
        .then(|| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn unauthorized(error: &str, description: &str) -> Response {
    let challenge = format!(
        "Bearer realm=\"{}\", error=\"{}\", error_description=\"{}\"",
        REALM, error, description
    );

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, challenge)],
        Json(ErrorResponse {
            error: "Unauthorized".to_string(),
        }),
    )
        .into_response()
}
