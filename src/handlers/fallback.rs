use crate::handlers::pages::{render_page, PAGE_RED};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Catch-all for unmatched routes; same red page a failed check gets
pub async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render_page(PAGE_RED, "Fehler", "Seite nicht gefunden!")),
    )
        .into_response()
}
