//! The results listing: seats sorted by number in a fixed-column grid.

use crate::model::{ResultsCellLayout, ResultsGridLayout};
use kuji_core::Assignment;

pub const DEFAULT_RESULT_COLUMNS: usize = 3;

/// Lays out the results listing. Cells fill column-major: the first `rows`
/// entries go down the first column, the next `rows` down the second.
pub fn layout_results_grid(assignment: &Assignment, columns: usize) -> ResultsGridLayout {
    let columns = columns.max(1);
    let total = assignment.seats.len();
    let rows = total.div_ceil(columns);

    let mut cells = Vec::with_capacity(total);
    for (idx, seat) in assignment.sorted_by_number().into_iter().enumerate() {
        cells.push(ResultsCellLayout {
            number: seat.number,
            name: seat.name.clone(),
            row: idx % rows,
            column: idx / rows,
        });
    }

    ResultsGridLayout {
        total,
        columns,
        rows,
        cells,
    }
}
