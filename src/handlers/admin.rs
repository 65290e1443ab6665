use crate::core::error::AdminError;
use crate::core::state::AppState;
use crate::models::admin::{ApiKeyQuery, ReloadResponse};
use crate::roster::source::load_roster;
use crate::utils::auth::verify_api_key;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Reload the roster from disk and swap it in atomically
///
/// POST /reload?api_key=<key>
pub async fn reload_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
) -> Result<Response, AdminError> {
    if !verify_api_key(&params.api_key, &state.config.admin.api_key) {
        warn!("Unauthorized roster reload attempt");
        return Err(AdminError::InvalidApiKey);
    }

    let path = state.config.roster.csv_path.clone();
    let snapshot = tokio::task::spawn_blocking(move || load_roster(&path))
        .await
        .map_err(|e| AdminError::RosterReload(e.to_string()))?
        .map_err(|e| AdminError::RosterReload(e.to_string()))?;

    let members = snapshot.len();
    state.roster.swap(snapshot);
    info!(members = members, "Roster reloaded");

    Ok((
        StatusCode::OK,
        Json(ReloadResponse {
            success: true,
            members,
        }),
    )
        .into_response())
}
