//! Per-tick movement rule for fluid cells.

use rand::Rng;

use crate::grid::{CellState, Grid};

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub fell: usize,
    pub moved_left: usize,
    pub moved_right: usize,
}

impl StepReport {
    pub fn moves(&self) -> usize {
        self.fell + self.moved_left + self.moved_right
    }
}

/// Advances the grid by one tick.
///
/// Cells are visited row-major and the grid is mutated during the scan, so
/// fluid that falls into the next row is visited again later in the same
/// pass and can keep falling. A column of empty cells is crossed in a
/// single tick. Each fluid cell then tries, in order:
/// 1. fall into the empty cell below,
/// 2. with probability `side_probability`, slide into an empty left neighbor,
/// 3. with probability `side_probability`, slide into an empty right neighbor.
///
/// `side_probability` must lie in `[0, 1]`.
pub fn step<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, side_probability: f64) -> StepReport {
    let mut report = StepReport::default();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let (r, c) = (row as i64, col as i64);
            if grid.get_checked(r, c) != Some(CellState::Fluid) {
                continue;
            }

            if grid.get_checked(r + 1, c) == Some(CellState::Empty) {
                move_fluid(grid, (row, col), (row + 1, col));
                report.fell += 1;
                continue;
            }

            if rng.gen_bool(side_probability) && grid.get_checked(r, c - 1) == Some(CellState::Empty) {
                move_fluid(grid, (row, col), (row, col - 1));
                report.moved_left += 1;
                continue;
            }

            if rng.gen_bool(side_probability) && grid.get_checked(r, c + 1) == Some(CellState::Empty) {
                move_fluid(grid, (row, col), (row, col + 1));
                report.moved_right += 1;
            }
        }
    }

    report
}

// The destination is empty, so swapping moves the fluid.
fn move_fluid(grid: &mut Grid, from: (usize, usize), to: (usize, usize)) {
    grid.swap_cells(from, to);
}
