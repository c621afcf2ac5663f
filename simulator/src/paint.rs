//! User-driven cell mutations.

use rand::Rng;

use crate::error::{Result, SimError};
use crate::grid::{CellState, Grid, GridPos};
use crate::mode::Mode;

/// Offsets `(dx, dy)` with `dx² + dy² <= radius²`, listed row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscMask {
    offsets: Vec<(i32, i32)>,
}

impl DiscMask {
    pub fn new(radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(SimError::InvalidConfig(format!(
                "spread radius must be non-negative, got {radius}"
            )));
        }
        let r2 = i64::from(radius) * i64::from(radius);
        let mut offsets = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if i64::from(dx).pow(2) + i64::from(dy).pow(2) <= r2 {
                    offsets.push((dx, dy));
                }
            }
        }
        Ok(Self { offsets })
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }
}

/// Operation applied at the pointer's cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    StampSolid,
    Erase,
    SpreadFluid,
}

impl From<Mode> for PaintOp {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Solid => PaintOp::StampSolid,
            Mode::Fluid => PaintOp::SpreadFluid,
            Mode::Deletion => PaintOp::Erase,
        }
    }
}

pub fn stamp_solid(grid: &mut Grid, target: GridPos) -> Result<()> {
    grid.set(target.row, target.col, CellState::Solid)
}

pub fn erase(grid: &mut Grid, target: GridPos) -> Result<()> {
    grid.set(target.row, target.col, CellState::Empty)
}

/// Turns empty cells under `mask` into fluid, each with probability `fill_probability`.
///
/// The target must be on the grid; the mask itself wraps around the edges,
/// so painting near a border also paints the opposite border. Returns the
/// number of cells filled.
pub fn spread_fluid<R: Rng + ?Sized>(
    grid: &mut Grid,
    target: GridPos,
    mask: &DiscMask,
    fill_probability: f64,
    rng: &mut R,
) -> Result<usize> {
    // Bounds check happens before wrapping.
    grid.get(target.row, target.col)?;

    let rows = grid.rows() as i64;
    let cols = grid.cols() as i64;
    let mut filled = 0;

    for &(dx, dy) in mask.offsets() {
        let row = (target.row as i64 + i64::from(dy)).rem_euclid(rows) as usize;
        let col = (target.col as i64 + i64::from(dx)).rem_euclid(cols) as usize;
        if grid.get(row, col)? != CellState::Empty {
            continue;
        }
        if rng.gen_bool(fill_probability) {
            grid.set(row, col, CellState::Fluid)?;
            filled += 1;
        }
    }

    Ok(filled)
}

/// Applies `op` at `target`. Returns the number of cells whose state changed.
pub fn apply<R: Rng + ?Sized>(
    op: PaintOp,
    grid: &mut Grid,
    target: GridPos,
    mask: &DiscMask,
    fill_probability: f64,
    rng: &mut R,
) -> Result<usize> {
    match op {
        PaintOp::StampSolid | PaintOp::Erase => {
            let before = grid.get(target.row, target.col)?;
            if op == PaintOp::StampSolid {
                stamp_solid(grid, target)?;
            } else {
                erase(grid, target)?;
            }
            Ok(usize::from(grid.get(target.row, target.col)? != before))
        }
        PaintOp::SpreadFluid => spread_fluid(grid, target, mask, fill_probability, rng),
    }
}
