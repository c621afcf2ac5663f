use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimError};

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Solid,
    Fluid,
}

impl CellState {
    pub fn as_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Solid => '#',
            CellState::Fluid => '~',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Solid),
            '~' => Some(CellState::Fluid),
            _ => None,
        }
    }
}

/// Grid coordinate. `row` grows downward, `col` grows rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Number of cells in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    pub empty: usize,
    pub solid: usize,
    pub fluid: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.empty + self.solid + self.fluid
    }
}

/// Fixed-size rectangular array of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell `Empty`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_bounds(row as i64, col as i64));
        }
        Ok(row * self.cols + col)
    }

    pub(crate) fn out_of_bounds(&self, row: i64, col: i64) -> SimError {
        SimError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Neighbor lookup that treats anything past the edge as absent.
    #[inline]
    pub fn get_checked(&self, row: i64, col: i64) -> Option<CellState> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.cells[row as usize * self.cols + col as usize])
    }

    /// Exchanges two cells. Both positions must be inside the grid.
    pub(crate) fn swap_cells(&mut self, a: (usize, usize), b: (usize, usize)) {
        debug_assert!(a.0 < self.rows && a.1 < self.cols);
        debug_assert!(b.0 < self.rows && b.1 < self.cols);
        self.cells.swap(a.0 * self.cols + a.1, b.0 * self.cols + b.1);
    }

    /// Row-major iteration over every cell.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (GridPos::new(i % cols, i / cols), state))
    }

    pub fn census(&self) -> Census {
        self.cells
            .iter()
            .fold(Census::default(), |mut acc, state| {
                match state {
                    CellState::Empty => acc.empty += 1,
                    CellState::Solid => acc.solid += 1,
                    CellState::Fluid => acc.fluid += 1,
                }
                acc
            })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|c| c.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = SimError;

    /// Parses `.`/`#`/`~` rows. Blank lines are skipped; rows must have equal width.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let width = line.chars().count();
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(SimError::Parse {
                        line: line_no + 1,
                        reason: format!("expected {expected} cells, found {width}"),
                    });
                }
                Some(_) => {}
            }
            for c in line.chars() {
                let state = CellState::from_char(c).ok_or_else(|| SimError::Parse {
                    line: line_no + 1,
                    reason: format!("unknown cell character {c:?}"),
                })?;
                cells.push(state);
            }
            rows += 1;
        }

        let cols = cols.ok_or_else(|| SimError::Parse {
            line: 0,
            reason: "grid text has no rows".to_string(),
        })?;

        Ok(Self { rows, cols, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert!(grid.iter().all(|(_, s)| s == CellState::Empty));
        assert_eq!(grid.census().empty, 24);
    }

    #[test]
    fn set_then_get() -> Result<()> {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 1, CellState::Fluid)?;
        grid.set(0, 0, CellState::Solid)?;
        assert_eq!(grid.get(2, 1)?, CellState::Fluid);
        assert_eq!(grid.get(0, 0)?, CellState::Solid);
        assert_eq!(grid.get(1, 1)?, CellState::Empty);
        Ok(())
    }

    #[test]
    fn access_outside_extent_fails() {
        let mut grid = Grid::new(3, 5);
        assert!(matches!(
            grid.get(3, 0),
            Err(SimError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 5 })
        ));
        assert!(matches!(grid.get(0, 5), Err(SimError::OutOfBounds { .. })));
        assert!(matches!(
            grid.set(10, 10, CellState::Solid),
            Err(SimError::OutOfBounds { .. })
        ));
        assert_eq!(grid.census().empty, 15);
    }

    #[test]
    fn checked_neighbor_lookup() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.get_checked(0, 0), Some(CellState::Empty));
        assert_eq!(grid.get_checked(-1, 0), None);
        assert_eq!(grid.get_checked(0, 2), None);
    }

    #[test]
    fn iter_is_row_major() {
        let grid = Grid::new(2, 3);
        let positions: Vec<_> = grid.iter().map(|(p, _)| (p.row, p.col)).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn text_form_parses_and_prints() -> Result<()> {
        let text = "..~\n#..\n";
        let grid: Grid = text.parse()?;
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(0, 2)?, CellState::Fluid);
        assert_eq!(grid.get(1, 0)?, CellState::Solid);
        assert_eq!(grid.to_string(), text);
        Ok(())
    }

    #[test]
    fn ragged_or_unknown_text_is_rejected() {
        assert!(matches!(
            "...\n..".parse::<Grid>(),
            Err(SimError::Parse { line: 2, .. })
        ));
        assert!(matches!(".x.".parse::<Grid>(), Err(SimError::Parse { .. })));
        assert!(matches!("\n\n".parse::<Grid>(), Err(SimError::Parse { .. })));
    }
}
