//! Host reachability check.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use poc_api_core::require;

use crate::error::ApiError;
use crate::schema::queries::QueryParams;
use crate::state::AppState;

/// Pings `host` once through the shell and returns the captured stdout.
///
/// `GET /api/ping`
pub async fn ping(
    State(state): State<AppState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(query) = query?;
    let host = require(query.get("host"), "host")?;
    state.service.ping(&host).await
}
