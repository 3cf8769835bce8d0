//! Scheduling logic for the shift roster engine.
//!
//! This module contains the two passes that fill the weekly grid, the
//! greedy preference pass and the randomized coverage backfill, and the
//! [`Scheduler`] that runs them in order over one set of employees.

mod assignment;
mod backfill;
mod engine;
mod preference_pass;

pub use backfill::{backfill_pool, run_backfill_pass};
pub use engine::Scheduler;
pub use preference_pass::run_preference_pass;
