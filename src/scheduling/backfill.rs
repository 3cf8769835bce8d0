//! Phase 2: the minimum-coverage backfill.
//!
//! Every slot still below the staffing minimum is topped up by drafting
//! employees at random from everyone who is free that day and under the
//! weekly cap. Preferences are deliberately ignored here: coverage wins.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{
    AssignmentPhase, AssignmentRecord, CoverageShortfall, Day, Employee, ScheduleGrid, ShiftKind,
};

use super::assignment::record_assignment;

/// Returns the indices of employees who can be drafted on `day`.
///
/// An employee qualifies when they hold no shift that day and are under the
/// weekly cap. Indices are in employee order, so a seeded generator always
/// picks the same person from the same pool.
pub fn backfill_pool(employees: &[Employee], day: Day) -> Vec<usize> {
    employees
        .iter()
        .enumerate()
        .filter(|(_, employee)| employee.is_available(day))
        .map(|(idx, _)| idx)
        .collect()
}

/// Runs the backfill pass and returns the slots it could not fill.
///
/// Days are visited in week order and shifts Morning to Evening. For each
/// slot below `policy.min_staff_per_shift`, one employee is chosen uniformly
/// at random from [`backfill_pool`] and assigned, until the slot is full or
/// the pool is empty. An empty pool logs a warning and records a
/// [`CoverageShortfall`]; the pass then moves on to the next slot.
pub fn run_backfill_pass<R: Rng + ?Sized>(
    employees: &mut [Employee],
    grid: &mut ScheduleGrid,
    policy: &PolicyConfig,
    rng: &mut R,
    log: &mut Vec<AssignmentRecord>,
) -> EngineResult<Vec<CoverageShortfall>> {
    let mut shortfalls = Vec::new();
    let mut drafted = 0;

    for day in Day::ALL {
        for shift in ShiftKind::SCHEDULABLE {
            while grid.len(day, shift) < policy.min_staff_per_shift {
                let pool = backfill_pool(employees, day);
                let Some(&idx) = pool.choose(rng) else {
                    let shortfall = CoverageShortfall {
                        day,
                        shift,
                        assigned: grid.len(day, shift),
                        required: policy.min_staff_per_shift,
                    };
                    warn!(
                        day = %day,
                        shift = %shift,
                        assigned = shortfall.assigned,
                        required = shortfall.required,
                        "Cannot meet minimum coverage for {} {}",
                        day,
                        shift
                    );
                    shortfalls.push(shortfall);
                    break;
                };

                record_assignment(
                    &mut employees[idx],
                    grid,
                    log,
                    day,
                    shift,
                    AssignmentPhase::Backfill,
                )?;
                drafted += 1;
            }
        }
    }

    info!(
        assignments = drafted,
        shortfalls = shortfalls.len(),
        "Backfill pass complete"
    );
    Ok(shortfalls)
}
