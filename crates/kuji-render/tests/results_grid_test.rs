use kuji_core::{Assignment, Seat};
use kuji_render::results::{DEFAULT_RESULT_COLUMNS, layout_results_grid};

fn assignment(pairs: &[(u32, &str)]) -> Assignment {
    Assignment {
        seats: pairs
            .iter()
            .map(|(number, name)| Seat {
                number: *number,
                name: (*name).to_string(),
            })
            .collect(),
    }
}

#[test]
fn seven_seats_in_three_columns_fill_column_major() {
    // Shuffled input order; the grid must sort by seat number first.
    let assignment = assignment(&[
        (4, "D"),
        (1, "A"),
        (7, "G"),
        (2, "B"),
        (6, "F"),
        (3, "C"),
        (5, "E"),
    ]);
    let grid = layout_results_grid(&assignment, DEFAULT_RESULT_COLUMNS);

    assert_eq!(grid.total, 7);
    assert_eq!(grid.columns, 3);
    assert_eq!(grid.rows, 3);

    let numbers: Vec<u32> = grid.cells.iter().map(|c| c.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);

    // Seats 1-3 run down the first column, 4-6 the second, 7 tops the third.
    assert_eq!((grid.cells[0].row, grid.cells[0].column), (0, 0));
    assert_eq!((grid.cells[2].row, grid.cells[2].column), (2, 0));
    assert_eq!((grid.cells[3].row, grid.cells[3].column), (0, 1));
    assert_eq!((grid.cells[6].row, grid.cells[6].column), (0, 2));
}

#[test]
fn column_count_is_clamped_to_at_least_one() {
    let grid = layout_results_grid(&assignment(&[(1, "A"), (2, "B")]), 0);
    assert_eq!(grid.columns, 1);
    assert_eq!(grid.rows, 2);
    assert_eq!((grid.cells[1].row, grid.cells[1].column), (1, 0));
}

#[test]
fn empty_assignment_yields_an_empty_grid() {
    let grid = layout_results_grid(&Assignment { seats: Vec::new() }, 3);
    assert_eq!(grid.total, 0);
    assert_eq!(grid.rows, 0);
    assert!(grid.cells.is_empty());
}
