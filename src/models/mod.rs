//! Core data models for the shift roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
mod employee;
mod schedule;
mod schedule_report;
mod shift;

pub use day::{Day, ParseDayError};
pub use employee::{DEFAULT_MAX_DAYS_PER_WEEK, Employee};
pub use schedule::{DEFAULT_MIN_STAFF_PER_SHIFT, ScheduleGrid};
pub use schedule_report::{AssignmentPhase, AssignmentRecord, CoverageShortfall, ScheduleReport};
pub use shift::ShiftKind;
