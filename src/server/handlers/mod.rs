// src/server/handlers/mod.rs
//! HTTP request handlers for the kettle server

pub mod admin;
pub mod recipes;

use crate::error::Error;
use crate::server::ServerMetrics;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// JSON error body `{"error": code, "message": text}`
pub(crate) fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let body = serde_json::json!({
        "error": code,
        "message": message.into(),
    });
    (status, Json(body)).into_response()
}

pub(crate) fn not_found(slug: &str) -> Response {
    json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("Recipe '{}' not found", slug),
    )
}

/// Map a library error to a response
///
/// Filesystem failures are logged and answered with a generic message.
pub(crate) fn error_response(metrics: &ServerMetrics, err: Error) -> Response {
    match err {
        Error::InvalidRecipe(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_recipe", msg)
        }
        Error::InvalidPath(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_path", msg),
        other => {
            error!("Request failed: {}", other);
            metrics.record_error();
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "The recipe store could not complete the request",
            )
        }
    }
}

/// Run filesystem work off the async runtime
pub(crate) async fn blocking<T, F>(metrics: &ServerMetrics, f: F) -> Result<T, Response>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(error_response(metrics, e)),
        Err(e) => {
            error!("Blocking task failed: {}", e);
            metrics.record_error();
            Err(json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "The recipe store could not complete the request",
            ))
        }
    }
}

/// Filename safe to put inside a quoted Content-Disposition value
pub(crate) fn attachment_name(stem: &str) -> String {
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.xml", safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_name() {
        assert_eq!(attachment_name("pale-ale"), "pale-ale.xml");
        assert_eq!(attachment_name("Märzen \"Fest\""), "M_rzen__Fest_.xml");
    }

    #[test]
    fn test_error_status() {
        let metrics = ServerMetrics::new();
        let resp = error_response(&metrics, Error::InvalidRecipe("no name".into()));
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = error_response(&metrics, Error::IoError("disk on fire".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(metrics.snapshot().errors, 1);
    }
}
