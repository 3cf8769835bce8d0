//! Phase 1: the greedy preference pass.
//!
//! Employees are visited in insertion order, days in week order and shifts
//! Morning, Afternoon, Evening. An employee takes the first preferred shift
//! of each day whose slot still has room. This is first-fit, not an optimal
//! matching.

use tracing::info;

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{AssignmentPhase, AssignmentRecord, Day, Employee, ScheduleGrid, ShiftKind};

use super::assignment::record_assignment;

/// Runs the preference pass and returns how many assignments it made.
///
/// A slot accepts preference assignments while it holds fewer than
/// `policy.min_staff_per_shift` names. Once an employee is placed on a day,
/// [`Employee::can_work`] is false for the rest of that day's shifts.
///
/// # Example
///
/// ```
/// use shift_roster::config::PolicyConfig;
/// use shift_roster::models::{Day, Employee, ScheduleGrid, ShiftKind};
/// use shift_roster::scheduling::run_preference_pass;
///
/// let mut alice = Employee::new("Alice");
/// alice.add_preference(Day::Monday, ShiftKind::Afternoon);
/// alice.add_preference(Day::Monday, ShiftKind::Morning);
/// let mut employees = vec![alice];
/// let mut grid = ScheduleGrid::new();
/// let mut log = Vec::new();
///
/// let made = run_preference_pass(&mut employees, &mut grid, &PolicyConfig::default(), &mut log)
///     .unwrap();
///
/// // Morning is tried first, regardless of the order preferences were given in.
/// assert_eq!(made, 1);
/// assert_eq!(grid.cell(Day::Monday, ShiftKind::Morning), &["Alice".to_string()]);
/// assert!(grid.cell(Day::Monday, ShiftKind::Afternoon).is_empty());
/// ```
pub fn run_preference_pass(
    employees: &mut [Employee],
    grid: &mut ScheduleGrid,
    policy: &PolicyConfig,
    log: &mut Vec<AssignmentRecord>,
) -> EngineResult<usize> {
    let mut made = 0;

    for employee in employees.iter_mut() {
        for day in Day::ALL {
            for shift in ShiftKind::SCHEDULABLE {
                if employee.can_work(day, shift)
                    && grid.len(day, shift) < policy.min_staff_per_shift
                {
                    record_assignment(
                        employee,
                        grid,
                        log,
                        day,
                        shift,
                        AssignmentPhase::Preference,
                    )?;
                    made += 1;
                }
            }
        }
    }

    info!(assignments = made, "Preference pass complete");
    Ok(made)
}
