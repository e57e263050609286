//! API schema types for request definitions.
//!
//! Every endpoint takes its input from the query string. Parameters are
//! looked up by name so that absence is reported through [`ApiError`] with
//! a structured body instead of the framework's plain-text rejection.
//!
//! [`ApiError`]: crate::error::ApiError

pub mod queries;
