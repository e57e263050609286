//! Greeting handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::response::Html;

use poc_api_core::{messages, require};

use crate::error::ApiError;
use crate::schema::queries::QueryParams;

/// Greets `name`, or the world when it is absent or empty.
///
/// `GET /api/hello`
pub async fn hello(query: Result<Query<QueryParams>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query?;
    let name = query.get("name");
    tracing::debug!(name = ?name, "hello");
    Ok(messages::hello(name.as_deref()))
}

/// Welcomes `username` inside an unescaped HTML heading.
///
/// `GET /api/greet`
pub async fn greet(
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let Query(query) = query?;
    let username = require(query.get("username"), "username")?;
    tracing::debug!(%username, "greet");
    Ok(Html(messages::welcome_fragment(&username)))
}
