// Metrics endpoint

use crate::core::error::AdminError;
use crate::core::state::AppState;
use crate::models::admin::ApiKeyQuery;
use crate::utils::auth::verify_api_key;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

/// Returns JSON with service statistics: check counts by outcome,
/// match rate, blocked requests, roster size, uptime and requests
/// per second.
///
/// Requires a valid API key.
pub async fn metrics_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
) -> Result<Response, AdminError> {
    if !verify_api_key(&params.api_key, &state.config.admin.api_key) {
        warn!("Unauthorized metrics access attempt");
        return Err(AdminError::InvalidApiKey);
    }

    let snapshot = state.metrics.get_snapshot(state.roster.len());

    Ok((StatusCode::OK, Json(snapshot)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::cache::RosterCache;

    fn test_state() -> Arc<AppState> {
        let config = toml::from_str(
            r#"
                [server]
                port = 3000

                [roster]
                csv_path = "members.csv"

                [verify]
                base_url = "https://verify.example.org/membercheck"
                club_name = "RML"

                [assets]
                font_path = "assets/DejaVuSans.ttf"

                [admin]
                api_key = "test-admin-key"
            "#,
        )
        .unwrap();

        Arc::new(AppState::new(config, RosterCache::default()))
    }

    #[tokio::test]
    async fn test_metrics_requires_api_key() {
        let result = metrics_handler(
            State(test_state()),
            Query(ApiKeyQuery {
                api_key: "wrong-key".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AdminError::InvalidApiKey)));
    }

    #[tokio::test]
    async fn test_metrics_with_valid_key() {
        let state = test_state();
        state.metrics.record_matched();

        let response = metrics_handler(
            State(state),
            Query(ApiKeyQuery {
                api_key: "test-admin-key".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
