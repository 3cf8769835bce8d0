//! CSV export of the roster.
//!
//! The export uses the import layout (`Name,Monday,...,Sunday`) with one
//! shift code per day. [`ExportMode`] decides what that code means.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::adapters::csv_import::NAME_HEADER;
use crate::config::ExportMode;
use crate::error::EngineResult;
use crate::models::{Day, Employee, ShiftKind};

/// Returns the shift code exported for `employee` on `day`.
///
/// # Example
///
/// ```
/// use shift_roster::adapters::csv_export::export_code;
/// use shift_roster::config::ExportMode;
/// use shift_roster::models::{Day, Employee, ShiftKind};
///
/// let mut employee = Employee::new("Alice");
/// employee.add_preference(Day::Monday, ShiftKind::Evening);
/// employee.assign(Day::Monday, ShiftKind::Morning).unwrap();
///
/// assert_eq!(export_code(&employee, Day::Monday, ExportMode::Assignments), ShiftKind::Morning);
/// assert_eq!(export_code(&employee, Day::Monday, ExportMode::Preferences), ShiftKind::Evening);
/// assert_eq!(export_code(&employee, Day::Tuesday, ExportMode::Assignments), ShiftKind::NoShift);
/// ```
pub fn export_code(employee: &Employee, day: Day, mode: ExportMode) -> ShiftKind {
    let shift = match mode {
        ExportMode::Assignments => employee.assigned_shift(day),
        ExportMode::Preferences => employee.first_preference(day),
    };
    shift.unwrap_or(ShiftKind::NoShift)
}

/// Writes the roster as CSV to `writer`.
pub fn write_roster<W: Write>(
    writer: W,
    employees: &[Employee],
    mode: ExportMode,
) -> EngineResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    let header = std::iter::once(NAME_HEADER).chain(Day::ALL.iter().map(|d| d.name()));
    writer.write_record(header)?;

    for employee in employees {
        let mut row = Vec::with_capacity(Day::ALL.len() + 1);
        row.push(employee.name().to_string());
        for day in Day::ALL {
            row.push(export_code(employee, day, mode).code().to_string());
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the roster as CSV to the file at `path`, replacing it.
pub fn save_roster<P: AsRef<Path>>(
    path: P,
    employees: &[Employee],
    mode: ExportMode,
) -> EngineResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_roster(file, employees, mode)?;
    info!(
        path = %path.display(),
        employees = employees.len(),
        mode = ?mode,
        "Exported roster"
    );
    Ok(())
}
