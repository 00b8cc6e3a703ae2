//! CSV loading for regression data sets.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//! - Blank lines are skipped
//! - The last column is the target, every column before it is a feature

use std::path::Path;

use crate::data::dataset::{Dataset, Sample};
use crate::error::{PerceptronError, Result};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads and parses a CSV file into a `Dataset`.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    parse_csv(&text)
}

/// Parses CSV text into a `Dataset`.
///
/// Row numbers in errors are 1-based and count data rows only.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let mut lines = text.lines().peekable();

    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut samples = Vec::new();

    for (row_idx, line) in lines.filter(|l| !l.trim().is_empty()).enumerate() {
        let row = row_idx + 1;
        let cells = parse_csv_row(line.trim());

        if cells.len() < 2 {
            return Err(PerceptronError::Csv {
                row,
                message: format!("expected at least 2 columns (features + target), got {}", cells.len()),
            });
        }

        let mut features = parse_floats(&cells, row)?;
        let target = features.remove(features.len() - 1);
        samples.push(Sample::new(features, target));
    }

    if samples.is_empty() {
        return Err(PerceptronError::Csv {
            row: 0,
            message: "CSV contains no data rows after parsing".into(),
        });
    }

    Dataset::new(samples)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Splits a single row on commas, honouring double quotes.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], row: usize) -> Result<Vec<f64>> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| PerceptronError::Csv {
                row,
                message: format!("'{}' is not a valid number", c.trim()),
            })
        })
        .collect()
}
