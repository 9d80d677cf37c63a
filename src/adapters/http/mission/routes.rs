//! HTTP routes for mission endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_mission, delete_mission, mission_detail_by_id, mission_list, update_mission,
    MissionHandlers,
};

/// Creates the mission router, mounted under `/api/Mission`.
///
/// Routes:
/// - `POST /AddMission`
/// - `GET /MissionList`
/// - `GET /MissionDetailById/:id`
/// - `POST /UpdateMission`
/// - `DELETE /DeleteMission/:missionId`
pub fn mission_routes(handlers: MissionHandlers) -> Router {
    Router::new()
        .route("/AddMission", post(add_mission))
        .route("/MissionList", get(mission_list))
        .route("/MissionDetailById/:id", get(mission_detail_by_id))
        .route("/UpdateMission", post(update_mission))
        .route("/DeleteMission/:missionId", delete(delete_mission))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::mission::MissionDeletePolicy;
    use crate::ports::EntityStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = EntityStore::from_backend(Arc::new(InMemoryEntityStore::new()));
        mission_routes(MissionHandlers::new(&store, MissionDeletePolicy::Forbid))
    }

    #[tokio::test]
    async fn mission_list_starts_empty() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/MissionList")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/MissionDetailById/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_mission_without_title_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/AddMission")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"theme":"Environment"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
