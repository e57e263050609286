//! Router assembly for the demonstration API.
//!
//! [`build_router`] wires every handler to the path listed for it in
//! [`poc_api_core::routes`], with request tracing as the only middleware.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use poc_api_core::routes;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// No header-setting layers are installed; `/api/public` in particular must
/// go out without security headers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HELLO, get(handlers::greeting::hello))
        .route(routes::HEALTH, get(handlers::status::health))
        .route(routes::USERS, get(handlers::users::get_user))
        .route(routes::ADMIN_ENV, get(handlers::admin::environment))
        .route(routes::GREET, get(handlers::greeting::greet))
        .route(routes::PING, get(handlers::ping::ping))
        .route(routes::PUBLIC, get(handlers::status::public))
        .fallback(handlers::status::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
