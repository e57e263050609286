//! HTTP server for the poc-api demonstration service.
//!
//! Exposes a handful of GET endpoints under `/api`, several of which are
//! deliberately vulnerable (SQL injection, command injection, reflected XSS,
//! environment disclosure, missing security headers) for security training.
//! This crate contains the router, handlers, configuration, error mapping
//! and server lifecycle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod schema;
pub mod server;
pub mod service;
pub mod state;
