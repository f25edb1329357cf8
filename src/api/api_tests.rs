#[cfg(test)]
mod router_tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::app_state::AppState;
    use crate::api::create_router;
    use crate::audit::AuditLog;
    use crate::models::physician::{Physician, PhysicianStatus};
    use crate::models::physician_repository::MockPhysicianRepository;
    use crate::models::specialty::Specialty;
    use crate::models::specialty_repository::MockSpecialtyRepository;
    use crate::security::auth::NonceAuthenticator;
    use crate::services::assignment::create_assignment_service;
    use crate::services::directory::create_directory_service;

    fn physician(id: u64, name: &str, specialty_ids: &[u64]) -> Physician {
        Physician {
            physician_id: id,
            name: name.to_string(),
            job_title: String::new(),
            locations: Vec::new(),
            specialty_ids: specialty_ids.to_vec(),
            status: PhysicianStatus::Published,
        }
    }

    fn test_app(
        specialties: MockSpecialtyRepository,
        physicians: MockPhysicianRepository,
    ) -> (axum::Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let audit = Arc::new(AuditLog::open(&dir.path().join("assignments.log")).unwrap());

        let specialties: Arc<MockSpecialtyRepository> = Arc::new(specialties);
        let physicians: Arc<MockPhysicianRepository> = Arc::new(physicians);

        let state = AppState::new(
            specialties.clone(),
            physicians.clone(),
            create_assignment_service(physicians.clone(), specialties.clone(), audit),
            create_directory_service(physicians, specialties),
            Box::new(NonceAuthenticator::development()),
        );

        (create_router(state), dir)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_is_open() {
        let (app, _dir) = test_app(
            MockSpecialtyRepository::new(),
            MockPhysicianRepository::new(),
        );

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["service"], "specialty-rebrand");
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_get_specialties_returns_forest() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties.expect_list_terms().returning(|| {
            Ok(vec![
                Specialty::new(1, "Ortho", 0),
                Specialty::new(2, "Spine", 1),
            ])
        });

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(get("/specialty-rebrand/v1/specialties"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["children"][0]["id"], 2);
        assert_eq!(body[0]["children"][0]["name"], "Spine");
    }

    #[tokio::test]
    async fn test_create_specialty_requires_name() {
        let (app, _dir) = test_app(
            MockSpecialtyRepository::new(),
            MockPhysicianRepository::new(),
        );

        let response = app
            .oneshot(post_json(
                "/specialty-rebrand/v1/specialties",
                json!({ "name": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_create_specialty_under_parent() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties
            .expect_get_term_by_name()
            .returning(|_| Ok(Some(Specialty::new(1, "Ortho", 0))));
        specialties.expect_next_term_id().returning(|| Ok(9));
        specialties
            .expect_create_term()
            .returning(|term| Ok(term.clone()));

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(post_json(
                "/specialty-rebrand/v1/specialties",
                json!({ "name": "Spine", "parent_name": "Ortho" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["id"], 9);
        assert_eq!(body["parent"], 1);
        assert_eq!(body["parent_name"], "Ortho");
    }

    #[tokio::test]
    async fn test_create_specialty_unknown_parent_is_rejected() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties
            .expect_get_term_by_name()
            .returning(|_| Ok(None));

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(post_json(
                "/specialty-rebrand/v1/specialties",
                json!({ "name": "Spine", "parent_name": "Missing" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_specialty_is_not_found() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties
            .expect_get_term_by_id()
            .returning(|_| Ok(None));

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/specialty-rebrand/v1/specialties/42")
                    .header("Content-Type", "application/json")
                    .body(Body::from(json!({ "name": "Renamed" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_specialty() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties
            .expect_get_term_by_id()
            .returning(|id| Ok(Some(Specialty::new(id, "Ortho", 0))));
        specialties.expect_delete_term().returning(|_| Ok(true));

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/specialty-rebrand/v1/specialties/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], 3);
        assert_eq!(body["message"], "Specialty deleted successfully");
    }

    #[tokio::test]
    async fn test_assignment_rejects_invalid_action() {
        let (app, _dir) = test_app(
            MockSpecialtyRepository::new(),
            MockPhysicianRepository::new(),
        );

        let response = app
            .oneshot(post_json(
                "/specialty-rebrand/v1/assignments",
                json!({ "physician_ids": [101], "term_id": 5, "action": "archive" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assignment_rejects_empty_physician_ids() {
        let (app, _dir) = test_app(
            MockSpecialtyRepository::new(),
            MockPhysicianRepository::new(),
        );

        let response = app
            .oneshot(post_json(
                "/specialty-rebrand/v1/assignments",
                json!({ "physician_ids": [], "term_id": 5, "action": "add" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assignment_reports_ok_per_physician() {
        let mut physicians = MockPhysicianRepository::new();
        physicians
            .expect_get_specialty_ids()
            .returning(|_| Ok(vec![5, 7]));
        physicians
            .expect_set_specialty_ids()
            .returning(|_, _| Ok(()));

        let (app, _dir) = test_app(MockSpecialtyRepository::new(), physicians);
        let response = app
            .oneshot(post_json(
                "/specialty-rebrand/v1/assignments",
                json!({ "physician_ids": [101, 102], "term_id": 5, "action": "remove" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body[0]["physician_id"], 101);
        assert_eq!(body[0]["status"], "ok");
        assert_eq!(body[1]["physician_id"], 102);
    }

    #[tokio::test]
    async fn test_partition_unknown_term_is_not_found() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties
            .expect_get_term_by_id()
            .returning(|_| Ok(None));

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(get("/specialty-rebrand/v1/assignments/by-specialty/42"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partition_splits_physicians() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties
            .expect_get_term_by_id()
            .returning(|id| Ok(Some(Specialty::new(id, "Spine", 1))));

        let mut physicians = MockPhysicianRepository::new();
        physicians.expect_list_published().returning(|| {
            Ok(vec![
                physician(101, "Dr. John Doe", &[5]),
                physician(102, "Dr. Jane Smith", &[7]),
            ])
        });

        let (app, _dir) = test_app(specialties, physicians);
        let response = app
            .oneshot(get("/specialty-rebrand/v1/assignments/by-specialty/5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["assigned"][0]["id"], 101);
        assert_eq!(body["assigned"][0]["name"], "Dr. John Doe");
        assert_eq!(body["unassigned"][0]["id"], 102);
    }

    #[tokio::test]
    async fn test_directory_unknown_slug_is_not_found() {
        let mut specialties = MockSpecialtyRepository::new();
        specialties.expect_list_terms().returning(|| Ok(Vec::new()));
        specialties
            .expect_get_term_by_slug()
            .returning(|_| Ok(None));

        let (app, _dir) = test_app(specialties, MockPhysicianRepository::new());
        let response = app
            .oneshot(get("/specialty-rebrand/v1/physicians/directory?specialty=nope"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers_are_set() {
        let (app, _dir) = test_app(
            MockSpecialtyRepository::new(),
            MockPhysicianRepository::new(),
        );

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(
            response.headers().get("X-Content-Type-Options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
    }
}

#[cfg(test)]
mod auth_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::app_state::AppState;
    use crate::api::create_router;
    use crate::audit::AuditLog;
    use crate::config::config::{NonceEntry, SecurityConfig};
    use crate::models::physician_repository::MockPhysicianRepository;
    use crate::models::specialty_repository::MockSpecialtyRepository;
    use crate::security::auth::{NONCE_HEADER, NonceAuthenticator};
    use crate::services::assignment::create_assignment_service;
    use crate::services::directory::create_directory_service;

    fn strict_app() -> (axum::Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let audit = Arc::new(AuditLog::open(&dir.path().join("assignments.log")).unwrap());

        let mut specialties = MockSpecialtyRepository::new();
        specialties.expect_list_terms().returning(|| Ok(Vec::new()));
        let specialties: Arc<MockSpecialtyRepository> = Arc::new(specialties);
        let physicians: Arc<MockPhysicianRepository> = Arc::new(MockPhysicianRepository::new());

        let config = SecurityConfig {
            nonces: vec![NonceEntry {
                nonce: "abc123".to_string(),
                user_id: 7,
            }],
            allow_anonymous: false,
        };

        let state = AppState::new(
            specialties.clone(),
            physicians.clone(),
            create_assignment_service(physicians.clone(), specialties.clone(), audit),
            create_directory_service(physicians, specialties),
            Box::new(NonceAuthenticator::from_config(&config)),
        );

        (create_router(state), dir)
    }

    #[tokio::test]
    async fn test_missing_nonce_is_unauthorized() {
        let (app, _dir) = strict_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/specialty-rebrand/v1/specialties")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_registered_nonce_passes() {
        let (app, _dir) = strict_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/specialty-rebrand/v1/specialties")
                    .header(NONCE_HEADER, "abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
