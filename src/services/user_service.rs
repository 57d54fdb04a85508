use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::db::UserRepository;
use crate::enums::{ GlobalRole, MembershipRole };
use crate::error::Result;
use crate::services::session_service::SessionContext;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
    /// `None` when the stored role string is not recognised.
    pub role: Option<GlobalRole>,
    pub memberships: Vec<CurrentMembership>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMembership {
    pub id: i32,
    pub role: Option<MembershipRole>,
    pub organization_id: i32,
}

impl CurrentUser {
    pub fn has_membership(&self) -> bool {
        !self.memberships.is_empty()
    }
}

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// Loads the user behind `session` together with their memberships.
    /// Returns `None` when the session points at a user that no longer exists.
    pub async fn current_user(&self, session: &SessionContext) -> Result<Option<CurrentUser>> {
        let user = match self.repository.find_by_id(session.user_id).await? {
            Some(user) => user,
            None => {
                return Ok(None);
            }
        };

        let memberships = self.repository
            .find_memberships(user.id).await?
            .into_iter()
            .map(|membership| CurrentMembership {
                id: membership.id,
                role: parse_role(&membership.role, "membership", membership.id),
                organization_id: membership.organization_id,
            })
            .collect();

        Ok(
            Some(CurrentUser {
                id: user.id,
                name: user.name,
                email: user.email,
                role: parse_role(&user.role, "user", user.id),
                memberships,
            })
        )
    }
}

/// Roles never gate membership, so an unrecognised value is kept as `None`
/// rather than failing the whole lookup.
fn parse_role<R: FromStr>(value: &str, kind: &str, id: i32) -> Option<R> {
    match value.parse() {
        Ok(role) => Some(role),
        Err(_) => {
            tracing::warn!("Ignoring unknown {} role '{}' on row {}", kind, value, id);
            None
        }
    }
}
