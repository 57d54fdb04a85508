use std::sync::Arc;

use axum::{ routing::{ get, post }, Router };
use sea_orm::DatabaseConnection;
use tower_http::{ cors::CorsLayer, trace::TraceLayer };

pub mod address;
pub mod auth;
pub mod extract;

use crate::db::{ AddressRepository, SessionRepository, UserRepository };
use crate::services::{ AddressService, SessionService, UserService };

#[derive(Clone)]
pub struct AppState {
    pub address_service: Arc<AddressService>,
    pub session_service: Arc<SessionService>,
}

impl AppState {
    pub fn new(address_service: Arc<AddressService>, session_service: Arc<SessionService>) -> Self {
        Self {
            address_service,
            session_service,
        }
    }

    /// Wires repositories and services on top of a single connection pool.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let user_service = Arc::new(UserService::new(Arc::new(UserRepository::new(db.clone()))));
        let address_service = Arc::new(
            AddressService::new(Arc::new(AddressRepository::new(db.clone())), user_service)
        );
        let session_service = Arc::new(SessionService::new(Arc::new(SessionRepository::new(db))));

        Self::new(address_service, session_service)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/rpc/updateAddress", post(address::update_address))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> &'static str {
    "OK"
}
