//! Schedule report models.
//!
//! This module contains the [`ScheduleReport`] type and its associated
//! structures that capture everything a scheduling run produced: the grid,
//! an ordered log of assignments and the slots left under-staffed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Day, ScheduleGrid, ShiftKind};

/// The pass that produced an assignment.
///
/// # Example
///
/// ```
/// use shift_roster::models::AssignmentPhase;
///
/// let phase = AssignmentPhase::Backfill;
/// assert_eq!(serde_json::to_string(&phase).unwrap(), "\"backfill\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPhase {
    /// Greedy first-fit pass over stated preferences.
    Preference,
    /// Randomized coverage top-up that ignores preferences.
    Backfill,
}

/// One assignment, in the order the engine made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// The assigned employee's name.
    pub employee: String,
    /// The day of the assignment.
    pub day: Day,
    /// The assigned shift.
    pub shift: ShiftKind,
    /// Which pass made the assignment.
    pub phase: AssignmentPhase,
}

/// A slot that finished the run below the required head count.
///
/// # Example
///
/// ```
/// use shift_roster::models::{CoverageShortfall, Day, ShiftKind};
///
/// let shortfall = CoverageShortfall {
///     day: Day::Monday,
///     shift: ShiftKind::Morning,
///     assigned: 1,
///     required: 2,
/// };
/// assert_eq!(shortfall.missing(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageShortfall {
    /// The day of the under-staffed slot.
    pub day: Day,
    /// The shift of the under-staffed slot.
    pub shift: ShiftKind,
    /// How many employees the slot ended with.
    pub assigned: usize,
    /// How many employees the slot needed.
    pub required: usize,
}

impl CoverageShortfall {
    /// Returns how many more employees the slot needed.
    pub fn missing(&self) -> usize {
        self.required.saturating_sub(self.assigned)
    }
}

/// The complete result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
    /// The seed of the random generator, when the caller supplied one.
    pub seed: Option<u64>,
    /// The final schedule grid.
    pub schedule: ScheduleGrid,
    /// Every assignment in the order it was made.
    pub assignments: Vec<AssignmentRecord>,
    /// Slots left with fewer employees than required.
    pub shortfalls: Vec<CoverageShortfall>,
    /// Total run duration in microseconds.
    pub duration_us: u64,
}

impl ScheduleReport {
    /// Returns true if no slot was left under-staffed.
    pub fn is_fully_covered(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Returns the assignments made to the named employee.
    pub fn assignments_for<'a>(
        &'a self,
        employee: &'a str,
    ) -> impl Iterator<Item = &'a AssignmentRecord> + 'a {
        self.assignments
            .iter()
            .filter(move |record| record.employee == employee)
    }

    /// Returns the number of assignments made by the given pass.
    pub fn count_by_phase(&self, phase: AssignmentPhase) -> usize {
        self.assignments
            .iter()
            .filter(|record| record.phase == phase)
            .count()
    }
}
