//! Top-level router: mounts every endpoint group and the shared layers.

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderName, HeaderValue, Method, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Json, Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::ports::EntityStore;

use super::correlation::CORRELATION_HEADER;
use super::envelope::{ok, ApiEnvelope, ApiError};
use super::mission::{mission_routes, MissionHandlers};
use super::mission_application::{mission_application_routes, MissionApplicationHandlers};
use super::user_skill::{user_skill_routes, UserSkillHandlers};

/// Builds the full API.
///
/// ```text
/// GET  /health
///      /api/Mission/...     missions and the application workflow
///      /api/UserSkill/...   user skill association
/// ```
pub fn api_router(store: EntityStore, config: &AppConfig) -> Router {
    let mission_api = mission_routes(MissionHandlers::new(
        &store,
        config.workflow.mission_delete_policy,
    ))
    .merge(mission_application_routes(MissionApplicationHandlers::new(
        &store,
    )));

    Router::new()
        .route("/health", get(health))
        .nest("/api/Mission", mission_api)
        .nest("/api/UserSkill", user_skill_routes(UserSkillHandlers::new(&store)))
        .fallback(no_route)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(request_failed))
                .layer(TimeoutLayer::new(config.server.request_timeout())),
        )
        .layer(middleware::map_response(envelope_bare_failures))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Response {
    ok("healthy")
}

async fn no_route(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No endpoint at {}", uri.path()))
}

/// A request that outlives the server timeout is reported like any other
/// store outage: 503 with `Retry-After`.
async fn request_failed(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Unavailable("request exceeded the server timeout".to_string())
    } else {
        ApiError::Internal(err.to_string())
    }
}

/// Wraps bodyless failures produced by the framework itself (405 on a known
/// path, body limit rejections) in the failure envelope.
async fn envelope_bare_failures(response: Response) -> Response {
    let status = response.status();
    let is_failure = status.is_client_error() || status.is_server_error();
    if !is_failure || response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let message = status.canonical_reason().unwrap_or("Request failed");
    let (mut parts, _) = response.into_parts();
    let mut enveloped = (status, Json(ApiEnvelope::failure(message))).into_response();
    if let Some(allow) = parts.headers.remove(header::ALLOW) {
        enveloped.headers_mut().insert(header::ALLOW, allow);
    }
    enveloped
}

/// Explicit origins when configured; permissive outside production otherwise.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !config.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(CORRELATION_HEADER),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::DomainError;
    use crate::ports::{MissionApplicationReader, MissionApplicationView};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = EntityStore::from_backend(Arc::new(InMemoryEntityStore::new()));
        api_router(store, &AppConfig::default())
    }

    /// A reader whose query outlives any sensible request deadline.
    struct StalledReader;

    #[async_trait]
    impl MissionApplicationReader for StalledReader {
        async fn list_views(&self) -> Result<Vec<MissionApplicationView>, DomainError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_success_envelope() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["result"], 1);
    }

    #[tokio::test]
    async fn mission_and_application_routes_share_prefix() {
        let app = app();

        for uri in ["/api/Mission/MissionList", "/api/Mission/MissionApplicationList"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/Nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["result"], 2);
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "No endpoint at /api/Nothing");
    }

    #[tokio::test]
    async fn wrong_method_is_enveloped_and_keeps_allow() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(header::ALLOW));
        let body = body_json(response).await;
        assert_eq!(body["result"], 2);
        assert_eq!(body["message"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn slow_store_call_times_out_as_unavailable() {
        let mut store = EntityStore::from_backend(Arc::new(InMemoryEntityStore::new()));
        store.application_reader = Arc::new(StalledReader);
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 1;

        let response = api_router(store, &config)
            .oneshot(
                Request::builder()
                    .uri("/api/Mission/MissionApplicationList")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers()[header::RETRY_AFTER], "5");
        let body = body_json(response).await;
        assert_eq!(body["result"], 2);
        assert!(body["data"].is_null());
    }
}
