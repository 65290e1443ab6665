// Public membership check endpoint

use crate::core::error::CheckError;
use crate::core::state::AppState;
use crate::handlers::pages::{escape_display_text, render_page, PAGE_GREEN};
use crate::utils::time::current_timestamp;
use crate::verify::service::verify;
use axum::{
    extract::{ConnectInfo, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    #[serde(default)]
    pub hash: Option<String>,
}

/// Membership check
///
/// GET /membercheck?hash=<identifier>
///
/// Scanned from a pass; answers with a full-screen green page for a
/// current member and a red page otherwise. The result page never
/// reveals why a hash did not match.
pub async fn membercheck_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<CheckQuery>,
) -> Result<Response, CheckError> {
    if !state.rate_limiter.allow(addr.ip(), current_timestamp()) {
        state.metrics.record_blocked();
        warn!(ip = %addr.ip(), "Rate limit exceeded on member check");
        return Err(CheckError::RateLimited);
    }

    let hash = params.hash.as_deref().unwrap_or("");
    if hash.trim().is_empty() {
        state.metrics.record_malformed();
        debug!(ip = %addr.ip(), "Member check without hash parameter");
        return Err(CheckError::MalformedInput);
    }

    let roster = state.roster.snapshot();
    let result = verify(hash, &roster);

    if !result.matched {
        state.metrics.record_unmatched();
        debug!(ip = %addr.ip(), "Member check did not match");
        return Err(CheckError::NotFound);
    }

    state.metrics.record_matched();

    let name = escape_display_text(&format!(
        "{} {}",
        result.first_name.unwrap_or_default(),
        result.last_name.unwrap_or_default()
    ));
    let club = escape_display_text(&state.config.verify.club_name);
    let message = format!("{name} ist aktuell Mitglied des {club}!");

    Ok((
        StatusCode::OK,
        Html(render_page(PAGE_GREEN, "Mitglied best\u{e4}tigt", &message)),
    )
        .into_response())
}
