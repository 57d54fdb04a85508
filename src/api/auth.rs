use axum::extract::FromRequestParts;
use axum::http::{ header::AUTHORIZATION, request::Parts };

use crate::error::AppError;
use crate::services::SessionContext;

use super::AppState;

/// Authorization gate: every handler taking a `SessionContext` only runs for
/// requests carrying `Authorization: Bearer <token>` of a live session.
impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            tracing::debug!("Request without bearer token rejected");
            AppError::Authentication
        })?;

        state.session_service.authenticate(token).await
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
