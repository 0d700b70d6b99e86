// src/server/routes.rs
//! Axum router configuration for the kettle server
//!
//! The public router carries read-only recipe endpoints plus export, which
//! writes nothing. Everything that touches the recipe directory for writing
//! sits on the admin router, which is served on its own listener.

use crate::server::handlers::{admin, recipes};
use crate::server::ServerState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Create the public router
pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        .route("/v1/recipes", get(recipes::list_recipes))
        // Static segment wins over :slug
        .route("/v1/recipes/export", post(recipes::export_recipe))
        .route("/v1/recipes/:slug", get(recipes::get_recipe))
        .route("/v1/recipes/:slug/download", get(recipes::download_recipe))
        .route("/v1/recipes/:slug/label.svg", get(recipes::recipe_label))
        .route(
            "/v1/recipes/:slug/fermentation",
            get(recipes::recipe_fermentation),
        )
        .layer(body_limit(state.config.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Create the admin router
pub fn create_admin_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/admin/recipes", post(admin::create_recipe))
        .route("/v1/admin/recipes/:slug", put(admin::update_recipe))
        .route("/v1/admin/import", post(admin::import_recipes))
        .route("/v1/admin/stats", get(admin::stats))
        .layer(body_limit(state.config.max_upload_bytes))
        .with_state(state)
}

/// Replaces axum's 2 MB default on every body extractor
fn body_limit(max_bytes: Option<usize>) -> DefaultBodyLimit {
    match max_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{write_recipe, Fermentable, Recipe};
    use crate::server::{ServerConfig, ServerState};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_state(dir: &tempfile::TempDir) -> Arc<ServerState> {
        let config = ServerConfig {
            recipe_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        Arc::new(ServerState::new(config))
    }

    fn sample_recipe() -> Recipe {
        Recipe {
            name: "Test Bitter".to_string(),
            version: 1,
            recipe_type: "All Grain".to_string(),
            batch_size: 20.0,
            boil_size: 25.0,
            boil_time: 60.0,
            og: Some(1.040),
            fg: Some(1.010),
            fermentables: vec![Fermentable {
                name: "Maris Otter".to_string(),
                amount: 3.5,
                fermentable_type: "Grain".to_string(),
                yield_percentage: 81.0,
                color: 3.0,
            }],
            ..Default::default()
        }
    }

    fn seed_recipe(dir: &tempfile::TempDir, slug: &str) {
        std::fs::write(
            dir.path().join(format!("{}.xml", slug)),
            write_recipe(&sample_recipe()),
        )
        .unwrap();
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let dir = tempfile::tempdir().unwrap();
        seed_recipe(&dir, "bitter");
        let app = create_router(test_state(&dir));

        let response = app.clone().oneshot(get_request("/v1/recipes")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listing: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(listing[0]["slug"], "bitter");
        assert_eq!(listing[0]["name"], "Test Bitter");
        assert_eq!(listing[0]["type"], "All Grain");

        let response = app.oneshot(get_request("/v1/recipes/bitter")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let recipe: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(recipe["batchSize"], 20.0);
        assert_eq!(recipe["fermentables"][0]["name"], "Maris Otter");
        assert_eq!(recipe["yeasts"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_missing_recipe_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app.oneshot(get_request("/v1/recipes/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_download_is_attachment() {
        let dir = tempfile::tempdir().unwrap();
        seed_recipe(&dir, "bitter");
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(get_request("/v1/recipes/bitter/download"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"bitter.xml\""
        );
        assert!(body_string(response).await.contains("<NAME>Test Bitter</NAME>"));
    }

    #[tokio::test]
    async fn test_export_validates() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let recipe = serde_json::to_value(sample_recipe()).unwrap();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/v1/recipes/export", &recipe))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"test-bitter.xml\""
        );
        assert!(body_string(response).await.contains("<OG>1.040</OG>"));
        // Nothing persisted
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        let mut unnamed = sample_recipe();
        unnamed.name = String::new();
        let recipe = serde_json::to_value(unnamed).unwrap();
        let response = app
            .oneshot(json_request("POST", "/v1/recipes/export", &recipe))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_export_accepts_large_body() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let mut recipe = sample_recipe();
        recipe.notes = Some("a".repeat(3 * 1024 * 1024));
        let recipe = serde_json::to_value(recipe).unwrap();
        let response = app
            .oneshot(json_request("POST", "/v1/recipes/export", &recipe))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.len() > 3 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_export_honors_configured_limit() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            recipe_dir: dir.path().to_path_buf(),
            max_upload_bytes: Some(1024),
            ..Default::default()
        };
        let app = create_router(Arc::new(ServerState::new(config)));

        let mut recipe = sample_recipe();
        recipe.notes = Some("a".repeat(4096));
        let recipe = serde_json::to_value(recipe).unwrap();
        let response = app
            .oneshot(json_request("POST", "/v1/recipes/export", &recipe))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_label_svg() {
        let dir = tempfile::tempdir().unwrap();
        seed_recipe(&dir, "bitter");
        let app = create_router(test_state(&dir));

        let response = app
            .clone()
            .oneshot(get_request("/v1/recipes/bitter/label.svg?language=de"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        let svg = body_string(response).await;
        assert!(svg.contains("Test Bitter"));
        assert!(svg.contains("Alk."));

        let response = app
            .oneshot(get_request("/v1/recipes/bitter/label.svg?language=xx"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fermentation_series() {
        let dir = tempfile::tempdir().unwrap();
        seed_recipe(&dir, "bitter");
        let app = create_router(test_state(&dir));

        let response = app
            .clone()
            .oneshot(get_request(
                "/v1/recipes/bitter/fermentation?days=2&interval_hours=12&seed=5",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["slug"], "bitter");
        assert_eq!(body["readings"].as_array().unwrap().len(), 5);
        assert_eq!(body["readings"][0]["gravity"], 1.04);

        let response = app
            .oneshot(get_request("/v1/recipes/bitter/fermentation?interval_hours=0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_save_and_update() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let admin = create_admin_router(state.clone());
        let public = create_router(state.clone());

        let recipe = serde_json::to_value(sample_recipe()).unwrap();
        let response = admin
            .clone()
            .oneshot(json_request("POST", "/v1/admin/recipes", &recipe))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["slug"], "test-bitter");
        // No yeast
        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);

        let mut renamed = sample_recipe();
        renamed.name = "Renamed Bitter".to_string();
        let recipe = serde_json::to_value(renamed).unwrap();
        let response = admin
            .oneshot(json_request("PUT", "/v1/admin/recipes/test-bitter", &recipe))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = public
            .oneshot(get_request("/v1/recipes/test-bitter"))
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["name"], "Renamed Bitter");
        assert_eq!(state.metrics.snapshot().recipes_written, 2);
    }

    #[tokio::test]
    async fn test_admin_import() {
        let dir = tempfile::tempdir().unwrap();
        let admin = create_admin_router(test_state(&dir));

        let boundary = "KETTLEBOUNDARY";
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"files\"; filename=\"stout.xml\"\r\n\
             Content-Type: application/xml\r\n\r\n\
             <RECIPES><RECIPE><NAME>Stout</NAME></RECIPE></RECIPES>\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"files\"; filename=\"notes.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             hello\r\n\
             --{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method("POST")
            .uri("/v1/admin/import")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = admin.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let report: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(report["count"], 1);
        assert_eq!(report["written"][0], "stout.xml");
        assert_eq!(report["skipped"][0]["filename"], "notes.txt");
        assert!(dir.path().join("stout.xml").exists());
        assert!(!dir.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_admin_routes_not_public() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app.oneshot(get_request("/v1/admin/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
