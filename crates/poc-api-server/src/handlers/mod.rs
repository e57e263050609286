//! HTTP handler modules for the demonstration API.
//!
//! Handlers are thin: they unpack the query string, delegate to
//! `poc_api_core` or the [`DemoService`](crate::service::DemoService), and
//! return the body. None of them validate, escape, or add headers.

pub mod admin;
pub mod greeting;
pub mod ping;
pub mod status;
pub mod users;
