//! CSV import of employee preferences.
//!
//! The file layout is fixed: a `Name` column followed by one column per day,
//! Monday to Sunday, each holding a shift code (`M`, `A`, `E` or `N`). The
//! whole file is validated before any [`Employee`] is built, so a malformed
//! file never yields a partial roster.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Day, Employee, ShiftKind};

/// Header text of the first column.
pub const NAME_HEADER: &str = "Name";

/// Columns per row: the name plus seven days.
pub const EXPECTED_COLUMNS: usize = 1 + Day::ALL.len();

/// One validated row of the import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// The employee's name, trimmed and non-empty.
    pub name: String,
    /// The shift code given for each day, Monday first.
    pub shifts: [ShiftKind; 7],
}

impl EmployeeRecord {
    /// Builds the employee, dropping `N` days.
    pub fn into_employee(self) -> Employee {
        let mut employee = Employee::new(self.name);
        for (day, shift) in Day::ALL.into_iter().zip(self.shifts) {
            employee.add_preference(day, shift);
        }
        employee
    }
}

/// Loads employees from the CSV file at `path`.
///
/// # Errors
///
/// - [`EngineError::InputNotFound`] if the file does not exist
/// - [`EngineError::EmptyInput`] if it has no header row
/// - a format error for the first malformed header or row
pub fn load_employees<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => EngineError::InputNotFound {
            path: source.clone(),
        },
        _ => EngineError::Io(err),
    })?;

    let employees = read_employees(file, &source)?;
    info!(path = %source, employees = employees.len(), "Imported employee preferences");
    Ok(employees)
}

/// Reads employees from any CSV source. `source` names it in errors.
pub fn read_employees<R: Read>(reader: R, source: &str) -> EngineResult<Vec<Employee>> {
    let records = parse_records(reader, source)?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.name.as_str()) {
            warn!(name = %record.name, "Duplicate employee name; both entries are kept");
        }
    }

    Ok(records
        .into_iter()
        .map(EmployeeRecord::into_employee)
        .collect())
}

/// Validates the whole CSV source and returns its rows.
///
/// Rows are numbered by line, 1 for the header, and columns from 1 for
/// `Name`. Fields are trimmed. A blank line is an empty row and is rejected.
///
/// # Example
///
/// ```
/// use shift_roster::adapters::csv_import::parse_records;
/// use shift_roster::models::ShiftKind;
///
/// let data = "Name,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday\n\
///             Bob,M,m,M,M,M,N,n\n";
/// let records = parse_records(data.as_bytes(), "inline").unwrap();
/// assert_eq!(records[0].name, "Bob");
/// assert_eq!(records[0].shifts[1], ShiftKind::Morning);
/// assert_eq!(records[0].shifts[6], ShiftKind::NoShift);
/// ```
pub fn parse_records<R: Read>(
    mut reader: R,
    source: &str,
) -> EngineResult<Vec<EmployeeRecord>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let lines = record_lines(&text)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = reader
        .records()
        .enumerate()
        .map(|(idx, row)| (lines.get(idx).copied().unwrap_or(idx + 1), row));

    let header = match rows.next() {
        Some((_, row)) => row?,
        None => {
            return Err(EngineError::EmptyInput {
                path: source.to_string(),
            });
        }
    };
    validate_header(&header)?;

    let mut records = Vec::new();
    for (line, row) in rows {
        records.push(parse_row(&row?, line)?);
    }
    Ok(records)
}

/// Returns the line each record starts on, or an empty-row error for the
/// first blank line. Line breaks inside quoted fields continue a record.
fn record_lines(text: &str) -> EngineResult<Vec<usize>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let body = text.strip_suffix('\n').unwrap_or(text);
    let mut starts = Vec::new();
    let mut in_quotes = false;
    for (idx, line) in body.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !in_quotes {
            if line.is_empty() {
                return Err(EngineError::ColumnCount {
                    row: idx + 1,
                    expected: EXPECTED_COLUMNS,
                    found: 0,
                });
            }
            starts.push(idx + 1);
        }
        if line.matches('"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }
    }
    Ok(starts)
}

fn validate_header(header: &StringRecord) -> EngineResult<()> {
    if header.len() != EXPECTED_COLUMNS {
        return Err(EngineError::ColumnCount {
            row: 1,
            expected: EXPECTED_COLUMNS,
            found: header.len(),
        });
    }

    let expected = std::iter::once(NAME_HEADER).chain(Day::ALL.iter().map(|d| d.name()));
    for (idx, (found, expected)) in header.iter().zip(expected).enumerate() {
        if found != expected {
            return Err(EngineError::InvalidHeader {
                column: idx + 1,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

fn parse_row(row: &StringRecord, row_number: usize) -> EngineResult<EmployeeRecord> {
    if row.len() != EXPECTED_COLUMNS {
        return Err(EngineError::ColumnCount {
            row: row_number,
            expected: EXPECTED_COLUMNS,
            found: row.len(),
        });
    }

    let name = &row[0];
    if name.is_empty() {
        return Err(EngineError::EmptyName { row: row_number });
    }

    let mut shifts = [ShiftKind::NoShift; 7];
    for (idx, slot) in shifts.iter_mut().enumerate() {
        let column = idx + 2;
        let code = &row[idx + 1];
        *slot = ShiftKind::from_code(code).ok_or_else(|| EngineError::InvalidShiftCode {
            row: row_number,
            column,
            code: code.to_string(),
        })?;
    }

    Ok(EmployeeRecord {
        name: name.to_string(),
        shifts,
    })
}
