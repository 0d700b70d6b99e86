// src/server/handlers/admin.rs
//! Admin handlers: save, overwrite, import and stats
//!
//! Served on the admin listener only.

use super::{blocking, error_response, json_error};
use crate::recipe::{validate_recipe, Recipe};
use crate::server::ServerState;
use crate::store::{IncomingFile, SkippedFile};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Response for a saved recipe
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub slug: String,
    pub warnings: Vec<String>,
}

/// Response for an import batch
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub count: usize,
    pub written: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

/// Save a new recipe under a slug derived from its name
///
/// POST /v1/admin/recipes
pub async fn create_recipe(
    State(state): State<Arc<ServerState>>,
    Json(recipe): Json<Recipe>,
) -> Response {
    state.metrics.record_request();
    let warnings = match validate_recipe(&recipe) {
        Ok(warnings) => warnings,
        Err(e) => return error_response(&state.metrics, e),
    };

    let store = state.store.clone();
    match blocking(&state.metrics, move || store.save(&recipe)).await {
        Ok(slug) => {
            state.metrics.record_written();
            (StatusCode::CREATED, Json(SaveResponse { slug, warnings })).into_response()
        }
        Err(resp) => resp,
    }
}

/// Overwrite the recipe stored under `slug`
///
/// PUT /v1/admin/recipes/:slug
pub async fn update_recipe(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    Json(recipe): Json<Recipe>,
) -> Response {
    state.metrics.record_request();
    let warnings = match validate_recipe(&recipe) {
        Ok(warnings) => warnings,
        Err(e) => return error_response(&state.metrics, e),
    };

    let store = state.store.clone();
    let key = slug.clone();
    match blocking(&state.metrics, move || store.save_as(&key, &recipe)).await {
        Ok(()) => {
            state.metrics.record_written();
            Json(SaveResponse { slug, warnings }).into_response()
        }
        Err(resp) => resp,
    }
}

/// Import recipe files, one multipart part per file
///
/// POST /v1/admin/import
pub async fn import_recipes(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> Response {
    state.metrics.record_request();
    let mut files = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed import upload: {}", e);
                return json_error(StatusCode::BAD_REQUEST, "bad_upload", e.body_text());
            }
        };

        let filename = field
            .file_name()
            .or(field.name())
            .unwrap_or_default()
            .to_string();
        match field.bytes().await {
            Ok(bytes) => files.push(IncomingFile::new(filename, bytes.to_vec())),
            Err(e) => {
                warn!("Failed to read upload '{}': {}", filename, e);
                return json_error(StatusCode::BAD_REQUEST, "bad_upload", e.body_text());
            }
        }
    }

    info!("Importing {} uploaded file(s)", files.len());
    let store = state.store.clone();
    match blocking(&state.metrics, move || Ok(store.ingest(files))).await {
        Ok(report) => {
            state.metrics.record_imported(report.count() as u64);
            Json(ImportResponse {
                count: report.count(),
                written: report.written,
                skipped: report.skipped,
            })
            .into_response()
        }
        Err(resp) => resp,
    }
}

/// Metrics snapshot
///
/// GET /v1/admin/stats
pub async fn stats(State(state): State<Arc<ServerState>>) -> Response {
    Json(state.metrics.snapshot()).into_response()
}
