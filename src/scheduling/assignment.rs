//! The single write path shared by both scheduling passes.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AssignmentPhase, AssignmentRecord, Day, Employee, ScheduleGrid, ShiftKind};

/// Assigns `employee` to `(day, shift)`, updating the employee, the grid and
/// the assignment log together.
///
/// The employee is updated first; if it rejects the assignment nothing else
/// changes.
pub(crate) fn record_assignment(
    employee: &mut Employee,
    grid: &mut ScheduleGrid,
    log: &mut Vec<AssignmentRecord>,
    day: Day,
    shift: ShiftKind,
    phase: AssignmentPhase,
) -> EngineResult<()> {
    employee.assign(day, shift)?;
    grid.push(day, shift, employee.name());

    debug!(
        employee = employee.name(),
        day = %day,
        shift = %shift,
        phase = ?phase,
        days_worked = employee.days_worked(),
        "Assigned shift"
    );

    log.push(AssignmentRecord {
        employee: employee.name().to_string(),
        day,
        shift,
        phase,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assignment_updates_all_three() {
        let mut employee = Employee::new("Alice");
        let mut grid = ScheduleGrid::new();
        let mut log = Vec::new();

        record_assignment(
            &mut employee,
            &mut grid,
            &mut log,
            Day::Thursday,
            ShiftKind::Evening,
            AssignmentPhase::Backfill,
        )
        .unwrap();

        assert_eq!(employee.assigned_shift(Day::Thursday), Some(ShiftKind::Evening));
        assert_eq!(grid.cell(Day::Thursday, ShiftKind::Evening), &["Alice".to_string()]);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].phase, AssignmentPhase::Backfill);
    }

    #[test]
    fn test_rejected_assignment_leaves_grid_untouched() {
        let mut employee = Employee::new("Alice");
        let mut grid = ScheduleGrid::new();
        let mut log = Vec::new();
        employee.assign(Day::Monday, ShiftKind::Morning).unwrap();

        let result = record_assignment(
            &mut employee,
            &mut grid,
            &mut log,
            Day::Monday,
            ShiftKind::Afternoon,
            AssignmentPhase::Preference,
        );

        assert!(result.is_err());
        assert_eq!(grid.total_assignments(), 0);
        assert!(log.is_empty());
    }
}
