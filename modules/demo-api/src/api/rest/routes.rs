//! Route table and middleware stack.

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::openapi;

use super::handlers::{self, AppState};

/// Build the application router.
///
/// CORS is wide open: the companion frontend is served from elsewhere and
/// fetches these endpoints cross-origin.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/echo", post(handlers::echo))
        .route("/version", get(handlers::version_info))
        .route("/api/devops-fact", get(handlers::devops_fact))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt as _;

    #[test]
    fn router_builds_with_default_state() {
        let _app = router(AppState::new(), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = router(AppState::new(), Duration::from_secs(30));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
