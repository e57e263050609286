//! Administrative endpoints.

use axum::extract::State;
use axum::Json;

use poc_api_core::EnvironmentSnapshot;

use crate::state::AppState;

/// Dumps every environment variable of the server process.
///
/// `GET /api/admin/env`
pub async fn environment(State(state): State<AppState>) -> Json<EnvironmentSnapshot> {
    let snapshot = state.service.environment();
    tracing::debug!(vars = snapshot.var_count(), "environment dump");
    Json(snapshot)
}
