//! Flat file readers for observed success counts.
//!
//! Two plain data sources feed the [estimation](crate::estimation)
//! functions: a text file with one count per line and a comma-separated
//! file with a named integer column. Both return the counts in file order.

use std::fs;
use std::path::Path;

use crate::errors::DataError;

/// The column name [read_select_code_csv] looks for when none is given.
pub const DEFAULT_SELECT_CODE_COLUMN: &str = "selectCode";

/// Reads a text file with one non-negative integer per line.
///
/// Blank lines (and lines of only whitespace) are skipped. Any other line
/// that does not parse as a `u64` fails with [DataError::Parse], reporting
/// its 1-based line number.
pub fn read_counts_file(path: impl AsRef<Path>) -> Result<Vec<u64>, DataError> {
    let content: String = fs::read_to_string(path)?;

    let mut counts: Vec<u64> = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed: &str = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<u64>() {
            Ok(value) => counts.push(value),
            Err(_) => {
                return Err(DataError::Parse {
                    line: index + 1,
                    content: trimmed.to_string(),
                });
            }
        }
    }

    return Ok(counts);
}

/// Reads one integer column out of a comma-separated file with a header
/// row.
///
/// ## Inputs:
///
/// 1. `path`: the csv file. The first row must be the header.
/// 2. `column`: (optional) the name of the column to read. The default is
///    [DEFAULT_SELECT_CODE_COLUMN] (`"selectCode"`).
///
/// ## Results
///
/// The column values in row order, or:
///  - [DataError::Io] if the file cannot be read.
///  - [DataError::MissingColumn] if the header does not contain `column`
///    (also for a completely empty file).
///  - [DataError::RaggedRow] if a row has fewer cells than needed.
///  - [DataError::Parse] if a cell does not contain a non-negative integer.
pub fn read_select_code_csv(
    path: impl AsRef<Path>,
    column: Option<&str>,
) -> Result<Vec<u64>, DataError> {
    let content: String = fs::read_to_string(path)?;
    let column_name: &str = column.unwrap_or(DEFAULT_SELECT_CODE_COLUMN);

    let mut lines = content.lines().enumerate();

    let header: &str = match lines.next() {
        Some((_, h)) => h,
        None => return Err(DataError::MissingColumn(column_name.to_string())),
    };

    let column_index: usize = match header.split(',').map(str::trim).position(|h| h == column_name)
    {
        Some(i) => i,
        None => return Err(DataError::MissingColumn(column_name.to_string())),
    };

    let mut values: Vec<u64> = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let cell: &str = match line.split(',').map(str::trim).nth(column_index) {
            Some(c) => c,
            None => return Err(DataError::RaggedRow(index + 1)),
        };

        match cell.parse::<u64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                return Err(DataError::Parse {
                    line: index + 1,
                    content: cell.to_string(),
                });
            }
        }
    }

    return Ok(values);
}
