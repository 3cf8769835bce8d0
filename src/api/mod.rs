//! HTTP API module for the shift roster.
//!
//! This module provides the REST endpoint that schedules a posted roster
//! and returns the resulting report as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, ScheduleRequest};
pub use response::ApiError;
pub use state::AppState;
