use std::sync::Arc;

use crate::crypto::hash_session_token;
use crate::db::SessionRepository;
use crate::error::{ AppError, Result };

/// Identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub handle: String,
    pub user_id: i32,
}

pub struct SessionService {
    repository: Arc<SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<SessionRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a raw bearer token to its session. Unknown and expired
    /// sessions are both reported as `AppError::Authentication`.
    pub async fn authenticate(&self, token: &str) -> Result<SessionContext> {
        if token.is_empty() {
            return Err(AppError::Authentication);
        }

        let hashed = hash_session_token(token);
        let session = self.repository
            .find_by_token_hash(&hashed).await?
            .ok_or(AppError::Authentication)?;

        if session.is_expired(chrono::Utc::now()) {
            tracing::debug!("Session {} has expired", session.handle);
            return Err(AppError::Authentication);
        }

        Ok(SessionContext {
            handle: session.handle,
            user_id: session.user_id,
        })
    }
}
