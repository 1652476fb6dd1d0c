use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{admin, leaderboard, participants, settings};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Full application router: API routes, Swagger UI and CORS.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/leaderboard", leaderboard::routes::routes())
        .nest("/participants", participants::routes::routes())
        .nest("/settings", settings::routes::routes())
        .nest("/admin", admin::routes::routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_openapi_document_lists_every_endpoint() {
        let response = app(fixtures::state().await)
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let document: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let paths = document["paths"].as_object().unwrap();
        for path in [
            "/api/leaderboard",
            "/api/leaderboard/summary",
            "/api/leaderboard/categories/{category}",
            "/api/participants/{participant_id}/history",
            "/api/settings",
            "/api/settings/defaults",
            "/api/admin/snapshot/reload",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app(fixtures::state().await)
            .oneshot(Request::builder().uri("/api/scores").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
