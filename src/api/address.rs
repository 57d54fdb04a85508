use axum::{ extract::State, Json };

use crate::error::{ AppError, Result };
use crate::services::address_service::{ AddressUpdateRequest, UpdatedAddressResult };
use crate::services::SessionContext;

use super::extract::ValidatedJson;
use super::AppState;

/// The body is extracted last by axum, so a malformed payload is reported as
/// a validation error even when the session is also missing or invalid.
pub async fn update_address(
    State(state): State<AppState>,
    session: std::result::Result<SessionContext, AppError>,
    ValidatedJson(request): ValidatedJson<AddressUpdateRequest>
) -> Result<Json<UpdatedAddressResult>> {
    let session = session?;

    let result = state.address_service.update_address(&session, request).await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use axum::{ body::Body, http::{ Request, StatusCode }, Router };
    use serde_json::{ json, Value };
    use tower::ServiceExt;

    use crate::api::{ router, AppState };
    use crate::enums::MembershipRole;
    use crate::test_support;

    const PATH: &str = "/api/rpc/updateAddress";

    fn valid_payload() -> Value {
        json!({
            "id": 5,
            "title": "Home",
            "detail": "Flat 3, second floor",
            "country": "X",
            "city": "Y",
            "district": "Z",
            "street": "W",
            "postalCode": "00000"
        })
    }

    async fn app() -> (Router, sea_orm::DatabaseConnection) {
        let db = test_support::setup_db().await;
        (router(AppState::from_connection(db.clone())), db)
    }

    async fn seed_member_with_address(db: &sea_orm::DatabaseConnection) {
        test_support::create_user(db, 42, "owner@example.com").await;
        let org = test_support::create_organization(db, "Acme").await;
        test_support::add_membership(db, 42, org, MembershipRole::Owner).await;
        test_support::create_session(db, 42, "token-42", None).await;
        test_support::create_address(db, 5, 42).await;
    }

    async fn post(app: Router, token: Option<&str>, body: String) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(PATH)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let response = app.oneshot(builder.body(Body::from(body)).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_update_owned_address() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;

        let (status, body) = post(app, Some("token-42"), valid_payload().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "count": 1 }));
        let stored = test_support::find_address(&db, 5).await;
        assert_eq!(stored.title, "Home");
        assert_eq!(stored.postal_code, "00000");
    }

    #[tokio::test]
    async fn test_other_users_address_reports_zero_rows() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;
        test_support::create_user(&db, 99, "other@example.com").await;
        let original = test_support::create_address(&db, 6, 99).await;

        let mut payload = valid_payload();
        payload["id"] = json!(6);
        let (status, body) = post(app, Some("token-42"), payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "count": 0 }));
        assert_eq!(test_support::find_address(&db, 6).await, original);
    }

    #[tokio::test]
    async fn test_every_field_is_required() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;
        let original = test_support::find_address(&db, 5).await;

        for field in ["id", "title", "detail", "country", "city", "district", "street", "postalCode"] {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);

            let (status, body) = post(app.clone(), Some("token-42"), payload.to_string()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {}", field);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(body["error"]["field"], field);
        }

        assert_eq!(test_support::find_address(&db, 5).await, original);
    }

    #[tokio::test]
    async fn test_wrong_types_are_rejected() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;

        let mut string_id = valid_payload();
        string_id["id"] = json!("5");
        let mut numeric_city = valid_payload();
        numeric_city["city"] = json!(12);
        let mut fractional_id = valid_payload();
        fractional_id["id"] = json!(5.5);

        for payload in [string_id, numeric_city, fractional_id, json!([1, 2, 3])] {
            let (status, body) = post(app.clone(), Some("token-42"), payload.to_string()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_validation_error() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;

        let (status, body) = post(app, Some("token-42"), "{\"id\": 5,".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_a_validation_error() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;
        let original = test_support::find_address(&db, 5).await;

        let request = Request::builder()
            .method("POST")
            .uri(PATH)
            .header("authorization", "Bearer token-42")
            .body(Body::from(valid_payload().to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(test_support::find_address(&db, 5).await, original);
    }

    #[tokio::test]
    async fn test_validation_runs_before_authentication() {
        let (app, _db) = app().await;

        let (status, body) = post(app, None, json!({ "id": 5 }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_session_is_rejected() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;
        let original = test_support::find_address(&db, 5).await;

        let (status, body) = post(app.clone(), None, valid_payload().to_string()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "AUTHENTICATION_ERROR");

        let (status, _) = post(app, Some("forged"), valid_payload().to_string()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        assert_eq!(test_support::find_address(&db, 5).await, original);
    }

    #[tokio::test]
    async fn test_user_without_membership_is_rejected() {
        let (app, db) = app().await;
        test_support::create_user(&db, 42, "solo@example.com").await;
        test_support::create_session(&db, 42, "token-42", None).await;
        let original = test_support::create_address(&db, 5, 42).await;

        let (status, body) = post(app, Some("token-42"), valid_payload().to_string()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "AUTHENTICATION_ERROR");
        assert_eq!(test_support::find_address(&db, 5).await, original);
    }

    #[tokio::test]
    async fn test_repeated_update_reports_one_row_each_time() {
        let (app, db) = app().await;
        seed_member_with_address(&db).await;

        let (_, first) = post(app.clone(), Some("token-42"), valid_payload().to_string()).await;
        let (_, second) = post(app, Some("token-42"), valid_payload().to_string()).await;

        assert_eq!(first, json!({ "count": 1 }));
        assert_eq!(second, json!({ "count": 1 }));
        assert_eq!(test_support::find_address(&db, 5).await.title, "Home");
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _db) = app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
