use std::sync::Arc;

use sea_orm::Set;
use serde::{ Deserialize, Serialize };

use crate::db::entity::address;
use crate::db::AddressRepository;
use crate::error::{ AppError, Result };
use crate::services::session_service::SessionContext;
use crate::services::UserService;

/// Full replacement of an address's mutable fields. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdateRequest {
    pub id: i32,
    pub title: String,
    pub detail: String,
    pub country: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub postal_code: String,
}

impl AddressUpdateRequest {
    fn into_active_model(self) -> address::ActiveModel {
        address::ActiveModel {
            title: Set(self.title),
            detail: Set(self.detail),
            country: Set(self.country),
            city: Set(self.city),
            district: Set(self.district),
            street: Set(self.street),
            postal_code: Set(self.postal_code),
            updated_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedAddressResult {
    /// Rows matched by `id` and owner. Zero when the address does not exist
    /// or belongs to someone else.
    pub count: u64,
}

pub struct AddressService {
    repository: Arc<AddressRepository>,
    user_service: Arc<UserService>,
}

impl AddressService {
    pub fn new(repository: Arc<AddressRepository>, user_service: Arc<UserService>) -> Self {
        Self {
            repository,
            user_service,
        }
    }

    /// Updates one of the caller's addresses.
    ///
    /// The caller must resolve to an existing user with at least one
    /// organization membership. The write is filtered on both the address id
    /// and the caller's user id, so an id owned by another user matches no
    /// rows and yields `count == 0` rather than an error.
    pub async fn update_address(
        &self,
        session: &SessionContext,
        request: AddressUpdateRequest
    ) -> Result<UpdatedAddressResult> {
        let user = self.user_service
            .current_user(session).await?
            .ok_or(AppError::Authentication)?;

        if !user.has_membership() {
            tracing::debug!("User {} has no memberships, rejecting address update", user.id);
            return Err(AppError::Authentication);
        }

        let address_id = request.id;
        let count = self.repository.update_owned(
            address_id,
            user.id,
            request.into_active_model()
        ).await?;

        if count == 0 {
            // TODO: decide whether a foreign or missing id should become a not-found error
            tracing::warn!("Address {} not updated: no row owned by user {}", address_id, user.id);
        } else {
            tracing::info!("Updated address {} for user {}", address_id, user.id);
        }

        Ok(UpdatedAddressResult { count })
    }
}
