//! HTTP routes for the user skill association, mounted under `/api/UserSkill`.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{add_user_skill, list_user_skills, remove_user_skill, UserSkillHandlers};

pub fn user_skill_routes(handlers: UserSkillHandlers) -> Router {
    Router::new()
        .route("/Add", post(add_user_skill))
        .route("/List/:userId", get(list_user_skills))
        .route("/Remove/:userId/:skillId", delete(remove_user_skill))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::user::NewUser;
    use crate::ports::{EntityStore, UserRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn seeded_app() -> Router {
        let backend = Arc::new(InMemoryEntityStore::new());
        backend
            .create_user(&NewUser::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        backend.create_skill("First aid").await.unwrap();
        user_skill_routes(UserSkillHandlers::new(&EntityStore::from_backend(backend)))
    }

    fn add_request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/Add")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"userId":1,"skillId":1}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn add_list_remove() {
        let app = seeded_app().await;

        let response = app.clone().oneshot(add_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/List/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"][0]["skillName"], "First aid");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/Remove/1/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/Remove/1/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_add_is_conflict() {
        let app = seeded_app().await;

        app.clone().oneshot(add_request()).await.unwrap();
        let response = app.oneshot(add_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unknown_user_list_is_not_found() {
        let app = seeded_app().await;
        let response = app
            .oneshot(Request::builder().uri("/List/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
