//! Console rendering of a generated schedule.

use std::fmt::Write;

use crate::models::{Day, ScheduleGrid, ScheduleReport, ShiftKind};

/// Renders the weekly grid as plain text, one block per day.
///
/// # Example
///
/// ```
/// use shift_roster::adapters::console::render_schedule;
/// use shift_roster::models::ScheduleGrid;
///
/// let text = render_schedule(&ScheduleGrid::new());
/// assert!(text.contains("Monday:\n"));
/// assert!(text.contains("Evening: No assignments\n"));
/// ```
pub fn render_schedule(grid: &ScheduleGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nWeekly Schedule:");
    let _ = writeln!(out, "{}", "=".repeat(80));

    for day in Day::ALL {
        let _ = writeln!(out, "\n{}:", day);
        let _ = writeln!(out, "{}", "-".repeat(40));
        for shift in ShiftKind::SCHEDULABLE {
            let _ = writeln!(out, "{}: {}", shift, format_names(grid.cell(day, shift)));
        }
    }
    out
}

/// Renders the coverage summary: a success line or one line per short slot.
pub fn render_coverage_summary(report: &ScheduleReport) -> String {
    let mut out = String::new();
    if report.is_fully_covered() {
        let _ = writeln!(out, "\nEvery shift has at least the minimum staff.");
        return out;
    }

    let _ = writeln!(
        out,
        "\nWarning: {} shift(s) could not meet minimum coverage:",
        report.shortfalls.len()
    );
    for shortfall in &report.shortfalls {
        let _ = writeln!(
            out,
            "  - {} {}: {} of {} assigned",
            shortfall.day, shortfall.shift, shortfall.assigned, shortfall.required
        );
    }
    out
}

/// Prints the schedule and coverage summary to stdout.
pub fn print_report(report: &ScheduleReport) {
    print!("{}", render_schedule(&report.schedule));
    print!("{}", render_coverage_summary(report));
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "No assignments".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoverageShortfall;
    use chrono::Utc;
    use uuid::Uuid;

    fn report_with(grid: ScheduleGrid, shortfalls: Vec<CoverageShortfall>) -> ScheduleReport {
        ScheduleReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            seed: None,
            schedule: grid,
            assignments: vec![],
            shortfalls,
            duration_us: 0,
        }
    }

    #[test]
    fn test_render_lists_names_in_order() {
        let mut grid = ScheduleGrid::new();
        grid.push(Day::Tuesday, ShiftKind::Afternoon, "Bob");
        grid.push(Day::Tuesday, ShiftKind::Afternoon, "Alice");

        let text = render_schedule(&grid);
        assert!(text.contains("Tuesday:\n----------------------------------------\n"));
        assert!(text.contains("Afternoon: Bob, Alice\n"));
        assert!(text.contains("Morning: No assignments\n"));
    }

    #[test]
    fn test_render_has_header_and_every_day() {
        let text = render_schedule(&ScheduleGrid::new());
        assert!(text.starts_with("\nWeekly Schedule:\n"));
        assert!(text.contains(&"=".repeat(80)));
        for day in Day::ALL {
            assert!(text.contains(&format!("{}:\n", day)));
        }
        assert_eq!(text.matches("No assignments").count(), 21);
    }

    #[test]
    fn test_summary_when_fully_covered() {
        let text = render_coverage_summary(&report_with(ScheduleGrid::new(), vec![]));
        assert!(text.contains("Every shift has at least the minimum staff."));
    }

    #[test]
    fn test_summary_lists_shortfalls() {
        let shortfalls = vec![CoverageShortfall {
            day: Day::Sunday,
            shift: ShiftKind::Evening,
            assigned: 1,
            required: 2,
        }];
        let text = render_coverage_summary(&report_with(ScheduleGrid::new(), shortfalls));
        assert!(text.contains("1 shift(s) could not meet minimum coverage"));
        assert!(text.contains("  - Sunday Evening: 1 of 2 assigned"));
    }
}
