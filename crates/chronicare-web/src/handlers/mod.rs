//! HTTP handlers for all web routes.

pub mod advisor;
pub mod api;
