//! chronicare-web — Web front end for Chronicare
//! Provides the chronic-condition advisor:
//!   - Free-text condition form with care recommendations
//!   - Per-condition solution chart and dataset overview chart
//!   - JSON API mirroring the page

pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
