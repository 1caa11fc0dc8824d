//! Participant roster handling: normalization and tabular import.

use crate::error::Result;
use std::path::Path;

/// Hard cap on the number of participants a chart can seat.
pub const MAX_SEATS: usize = 43;

/// Trims raw entries, drops blanks and caps the list at [`MAX_SEATS`].
pub fn normalize_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| {
            let trimmed = s.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .take(MAX_SEATS)
        .collect()
}

/// Imports participant names from the second column of a CSV table.
///
/// The first row is treated as a header and skipped; blank cells are dropped.
/// Any I/O or format failure is returned as an error with no partial output.
pub fn import_table(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(cell) = record.get(1) {
            names.push(cell.to_string());
        }
    }
    Ok(normalize_names(names))
}
