// Centralized error handling for the pass service

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while issuing a single pass.
///
/// All of these are fatal for the member being processed only; the
/// batch driver records them and moves on.
#[derive(Error, Debug)]
pub enum IssueError {
    #[error("Verification URL exceeds code capacity: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("Asset missing or unusable: {path}: {reason}")]
    AssetMissing { path: PathBuf, reason: String },

    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the public membership check endpoint.
///
/// Every variant resolves to a definite HTML response; the check
/// surface never propagates a fault to the caller.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Missing or blank hash parameter")]
    MalformedInput,

    #[error("No member found for the presented hash")]
    NotFound,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        use crate::handlers::pages::{render_page, PAGE_RED};

        let (status, title, message) = match &self {
            CheckError::MalformedInput => {
                (StatusCode::BAD_REQUEST, "Fehler", "Ung&uuml;ltige Anfrage!")
            }
            CheckError::NotFound => (StatusCode::NOT_FOUND, "Kein Mitglied", "Kein Mitglied!"),
            CheckError::RateLimited => {
                (StatusCode::TOO_MANY_REQUESTS, "Fehler", "Zu viele Anfragen!")
            }
            CheckError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Fehler", "Interner Fehler!")
            }
        };

        (status, Html(render_page(PAGE_RED, title, message))).into_response()
    }
}

/// Errors for API-key guarded admin endpoints
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Failed to reload roster: {0}")]
    RosterReload(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        use crate::models::admin::ErrorResponse;
        use axum::response::Json;

        let (status, error) = match &self {
            AdminError::InvalidApiKey => (StatusCode::UNAUTHORIZED, self.to_string()),
            AdminError::RosterReload(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}
