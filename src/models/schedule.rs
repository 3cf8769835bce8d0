//! The weekly schedule grid.
//!
//! [`ScheduleGrid`] maps each (day, shift) slot to the names assigned to it,
//! in assignment order. Only the scheduling engine writes to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Day, ShiftKind};

/// The default number of employees each slot should hold.
pub const DEFAULT_MIN_STAFF_PER_SHIFT: usize = 2;

/// Day → shift → ordered employee names.
///
/// All 21 schedulable slots exist from construction. The grid never checks
/// capacity; that is the engine's job.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Day, ScheduleGrid, ShiftKind};
///
/// let grid = ScheduleGrid::new();
/// assert_eq!(grid.iter().count(), 21);
/// assert!(grid.cell(Day::Monday, ShiftKind::Morning).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleGrid {
    cells: BTreeMap<Day, BTreeMap<ShiftKind, Vec<String>>>,
}

impl ScheduleGrid {
    /// Creates a grid with every slot empty.
    pub fn new() -> Self {
        let cells = Day::ALL
            .into_iter()
            .map(|day| {
                let shifts = ShiftKind::SCHEDULABLE
                    .into_iter()
                    .map(|shift| (shift, Vec::new()))
                    .collect();
                (day, shifts)
            })
            .collect();
        Self { cells }
    }

    /// Returns the names assigned to a slot, in assignment order.
    pub fn cell(&self, day: Day, shift: ShiftKind) -> &[String] {
        self.cells
            .get(&day)
            .and_then(|shifts| shifts.get(&shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of names in a slot.
    pub fn len(&self, day: Day, shift: ShiftKind) -> usize {
        self.cell(day, shift).len()
    }

    /// Appends a name to a slot.
    pub(crate) fn push(&mut self, day: Day, shift: ShiftKind, name: &str) {
        debug_assert!(shift.is_schedulable());
        self.cells
            .entry(day)
            .or_default()
            .entry(shift)
            .or_default()
            .push(name.to_string());
    }

    /// Iterates every schedulable slot in week order, Morning to Evening.
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftKind, &[String])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            ShiftKind::SCHEDULABLE
                .into_iter()
                .map(move |shift| (day, shift, self.cell(day, shift)))
        })
    }

    /// Returns the total number of assignments across all slots.
    pub fn total_assignments(&self) -> usize {
        self.iter().map(|(_, _, names)| names.len()).sum()
    }
}

impl Default for ScheduleGrid {
    fn default() -> Self {
        Self::new()
    }
}
