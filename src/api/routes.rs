//! API Routes
//!
//! Configures the Axum router with all server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, load_handler, meta_acquisition_handler, meta_descendant_handler,
    meta_descendants_handler, meta_materials_handler, meta_missions_handler, meta_module_handler,
    meta_modules_handler, meta_patterns_handler, meta_stat_handler, meta_stats_handler,
    meta_title_handler, meta_weapon_handler, meta_weapons_handler, save_handler,
    user_descendant_handler, user_info_handler, user_ouid_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/save` - Persist a build payload, returns its share id
/// - `GET /api/load/:id` - Return a stored build payload
/// - `GET /api/user/{ouid,info,descendant}` - Cached per-user lookups
/// - `GET /api/meta/{descendant,title,module,weapon,stat}` - Single-entity metadata
/// - `GET /api/meta/{modules,weapons,descendants,stats,patterns,materials,acquisition,missions}`
///   - Full collection dumps
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/save", post(save_handler))
        .route("/api/load/:id", get(load_handler))
        .route("/api/user/ouid", get(user_ouid_handler))
        .route("/api/user/info", get(user_info_handler))
        .route("/api/user/descendant", get(user_descendant_handler))
        .route("/api/meta/descendant", get(meta_descendant_handler))
        .route("/api/meta/title", get(meta_title_handler))
        .route("/api/meta/module", get(meta_module_handler))
        .route("/api/meta/weapon", get(meta_weapon_handler))
        .route("/api/meta/stat", get(meta_stat_handler))
        .route("/api/meta/modules", get(meta_modules_handler))
        .route("/api/meta/weapons", get(meta_weapons_handler))
        .route("/api/meta/descendants", get(meta_descendants_handler))
        .route("/api/meta/stats", get(meta_stats_handler))
        .route("/api/meta/patterns", get(meta_patterns_handler))
        .route("/api/meta/materials", get(meta_materials_handler))
        .route("/api/meta/acquisition", get(meta_acquisition_handler))
        .route("/api/meta/missions", get(meta_missions_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let config = Config {
            database_path: dir
                .path()
                .join("builds.db")
                .to_string_lossy()
                .into_owned(),
            ..Config::default()
        };
        let state = AppState::from_config(&config).unwrap();
        (dir, create_router(state))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_dir, app) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_save_endpoint() {
        let (_dir, app) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/save")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"data":{"gridId":"1","boxes":[]}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_load_not_found() {
        let (_dir, app) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/load/nonexist1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
