//! Adapters between the scheduling engine and the outside world.
//!
//! These modules translate CSV files and terminal input into [`Employee`]
//! records and render or export the results. The engine itself never touches
//! files or terminals.
//!
//! [`Employee`]: crate::models::Employee

pub mod console;
pub mod csv_export;
pub mod csv_import;
pub mod interactive;
