//! Weekly shift roster engine.
//!
//! This crate assigns employees to Morning, Afternoon and Evening shifts over
//! a fixed Monday-to-Sunday week. A greedy pass honours stated preferences,
//! then a randomized backfill drafts free employees into any shift still
//! below the staffing minimum. CSV, terminal and HTTP adapters feed and
//! render the engine.

#![warn(missing_docs)]

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduling;
