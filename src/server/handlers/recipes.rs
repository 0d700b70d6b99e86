// src/server/handlers/recipes.rs
//! Public recipe handlers: listing, detail, download, export, label and
//! fermentation data

use super::{attachment_name, blocking, json_error, not_found};
use crate::fermentation::{simulate, FermentationProfile, Reading};
use crate::label::{render_svg, LabelContent, Language};
use crate::recipe::{validate_recipe, write_recipe, Recipe};
use crate::server::ServerState;
use crate::store::slugify;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Longest simulated fermentation served over HTTP
const MAX_FERMENTATION_DAYS: u32 = 90;

/// List all recipes
///
/// GET /v1/recipes
pub async fn list_recipes(State(state): State<Arc<ServerState>>) -> Response {
    state.metrics.record_request();
    let store = state.store.clone();
    match blocking(&state.metrics, move || Ok(store.list())).await {
        Ok(summaries) => Json(summaries).into_response(),
        Err(resp) => resp,
    }
}

/// Load a recipe for a handler, answering 404 for unknown slugs
async fn load_recipe(state: &ServerState, slug: &str) -> Result<Recipe, Response> {
    let store = state.store.clone();
    let key = slug.to_string();
    match blocking(&state.metrics, move || store.load(&key)).await? {
        Some(recipe) => {
            state.metrics.record_served();
            Ok(recipe)
        }
        None => {
            debug!("Recipe not found: {}", slug);
            state.metrics.record_not_found();
            Err(not_found(slug))
        }
    }
}

/// Get one recipe as JSON
///
/// GET /v1/recipes/:slug
pub async fn get_recipe(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    state.metrics.record_request();
    match load_recipe(&state, &slug).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(resp) => resp,
    }
}

/// Download the recipe file as stored
///
/// GET /v1/recipes/:slug/download
pub async fn download_recipe(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    state.metrics.record_request();
    let store = state.store.clone();
    let key = slug.clone();
    let content = match blocking(&state.metrics, move || store.raw(&key)).await {
        Ok(Some(content)) => content,
        Ok(None) => {
            state.metrics.record_not_found();
            return not_found(&slug);
        }
        Err(resp) => return resp,
    };

    state.metrics.record_served();
    xml_attachment(&slug, content)
}

/// Validate and write a recipe without saving it
///
/// POST /v1/recipes/export
pub async fn export_recipe(
    State(state): State<Arc<ServerState>>,
    Json(recipe): Json<Recipe>,
) -> Response {
    state.metrics.record_request();
    let warnings = match validate_recipe(&recipe) {
        Ok(warnings) => warnings,
        Err(e) => return super::error_response(&state.metrics, e),
    };
    for warning in &warnings {
        debug!("Export of '{}': {}", recipe.name, warning);
    }

    info!("Exporting recipe '{}'", recipe.name);
    state.metrics.record_export();
    xml_attachment(&slugify(&recipe.name), write_recipe(&recipe))
}

fn xml_attachment(stem: &str, content: String) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "application/xml; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", attachment_name(stem)),
        ),
    ];
    (StatusCode::OK, headers, content).into_response()
}

#[derive(Debug, Deserialize)]
pub struct LabelQuery {
    pub language: Option<String>,
}

/// Render the bottle label
///
/// GET /v1/recipes/:slug/label.svg?language=de
pub async fn recipe_label(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    Query(query): Query<LabelQuery>,
) -> Response {
    state.metrics.record_request();
    let mut design = state.config.label.clone();
    if let Some(language) = query.language.as_deref() {
        match language.parse::<Language>() {
            Ok(language) => design.language = language,
            Err(msg) => return json_error(StatusCode::BAD_REQUEST, "invalid_language", msg),
        }
    }

    let recipe = match load_recipe(&state, &slug).await {
        Ok(recipe) => recipe,
        Err(resp) => return resp,
    };

    let svg = render_svg(&LabelContent::from_recipe(&recipe), &design);
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

#[derive(Debug, Deserialize)]
pub struct FermentationQuery {
    pub days: Option<u32>,
    pub interval_hours: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct FermentationResponse {
    pub slug: String,
    pub profile: FermentationProfile,
    pub readings: Vec<Reading>,
}

/// Simulated fermentation readings for charting
///
/// GET /v1/recipes/:slug/fermentation?days=14&interval_hours=6&seed=1
pub async fn recipe_fermentation(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
    Query(query): Query<FermentationQuery>,
) -> Response {
    state.metrics.record_request();
    if query.days.is_some_and(|d| d == 0 || d > MAX_FERMENTATION_DAYS) {
        return json_error(
            StatusCode::BAD_REQUEST,
            "invalid_query",
            format!("days must be between 1 and {}", MAX_FERMENTATION_DAYS),
        );
    }
    if query.interval_hours == Some(0) {
        return json_error(
            StatusCode::BAD_REQUEST,
            "invalid_query",
            "interval_hours must be at least 1",
        );
    }

    let recipe = match load_recipe(&state, &slug).await {
        Ok(recipe) => recipe,
        Err(resp) => return resp,
    };

    let mut profile = FermentationProfile::from_recipe(&recipe, &state.config.fermentation);
    if let Some(days) = query.days {
        profile.days = days;
    }
    if let Some(interval) = query.interval_hours {
        profile.interval_hours = interval;
    }
    profile.seed = query.seed;

    let readings = simulate(&profile, chrono::Utc::now());
    Json(FermentationResponse {
        slug,
        profile,
        readings,
    })
    .into_response()
}
