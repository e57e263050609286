//! Simulated user lookup.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

use poc_api_core::{messages, require};

use crate::error::ApiError;
use crate::schema::queries::QueryParams;

/// Returns the SQL that a naive lookup of `id` would run. Nothing is
/// executed.
///
/// `GET /api/users`
pub async fn get_user(
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(query) = query?;
    let id = require(query.get("id"), "id")?;
    tracing::debug!(%id, "simulated users query");
    Ok(messages::users_query(&id))
}
