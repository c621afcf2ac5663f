use cellfluid_simulator::{CellState, Grid, Mode};

use crate::renderer::Instance;

pub const LINE_THICKNESS: f32 = 2.0;
pub const COLOR_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const COLOR_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

const SWATCH_SIZE: f32 = 24.0;
const SWATCH_MARGIN: f32 = 12.0;

pub fn rgb(c: [u8; 3]) -> [f32; 4] {
    [
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
        1.0,
    ]
}

/// Cells reuse the colors of the modes that paint them.
pub fn cell_color(state: CellState) -> Option<[f32; 4]> {
    match state {
        CellState::Empty => None,
        CellState::Solid => Some(rgb(Mode::Solid.display().color)),
        CellState::Fluid => Some(rgb(Mode::Fluid.display().color)),
    }
}

/// One filled quad per non-empty cell.
pub fn push_cells(out: &mut Vec<Instance>, grid: &Grid, cell_size: f32) {
    let half = cell_size * 0.5;
    for (pos, state) in grid.iter() {
        let Some(color) = cell_color(state) else {
            continue;
        };
        out.push(Instance {
            center_px: [
                pos.col as f32 * cell_size + half,
                pos.row as f32 * cell_size + half,
            ],
            half_size_px: [half, half],
            color,
        });
    }
}

/// A horizontal line at every row edge and a vertical line at every column
/// edge, each centred on the edge and spanning the whole viewport.
pub fn push_gridlines(
    out: &mut Vec<Instance>,
    rows: usize,
    cols: usize,
    cell_size: f32,
    viewport: [f32; 2],
) {
    let [width, height] = viewport;
    let half_thickness = LINE_THICKNESS * 0.5;

    for row in 0..rows {
        out.push(Instance {
            center_px: [width * 0.5, row as f32 * cell_size],
            half_size_px: [width * 0.5, half_thickness],
            color: COLOR_BLACK,
        });
    }
    for col in 0..cols {
        out.push(Instance {
            center_px: [col as f32 * cell_size, height * 0.5],
            half_size_px: [half_thickness, height * 0.5],
            color: COLOR_BLACK,
        });
    }
}

/// Outlined square in the top-left corner showing the active mode's color.
pub fn push_mode_swatch(out: &mut Vec<Instance>, mode: Mode) {
    let half = SWATCH_SIZE * 0.5;
    let center = [SWATCH_MARGIN + half, SWATCH_MARGIN + half];
    out.push(Instance {
        center_px: center,
        half_size_px: [half + LINE_THICKNESS, half + LINE_THICKNESS],
        color: COLOR_BLACK,
    });
    out.push(Instance {
        center_px: center,
        half_size_px: [half, half],
        color: rgb(mode.display().color),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_occupied_cells_are_drawn() -> anyhow::Result<()> {
        let grid: Grid = "
            .#.
            ~..
        "
        .parse()?;
        let mut out = Vec::new();
        push_cells(&mut out, &grid, 10.0);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].center_px, [15.0, 5.0]);
        assert_eq!(out[0].color, rgb(Mode::Solid.display().color));
        assert_eq!(out[1].center_px, [5.0, 15.0]);
        assert_eq!(out[1].half_size_px, [5.0, 5.0]);
        assert_eq!(out[1].color, rgb(Mode::Fluid.display().color));
        Ok(())
    }

    #[test]
    fn one_line_per_row_and_column() {
        let mut out = Vec::new();
        push_gridlines(&mut out, 72, 128, 10.0, [1280.0, 720.0]);

        assert_eq!(out.len(), 72 + 128);
        let last_row = out[71];
        assert_eq!(last_row.center_px, [640.0, 710.0]);
        assert_eq!(last_row.half_size_px, [640.0, 1.0]);
        let first_col = out[72];
        assert_eq!(first_col.center_px, [0.0, 360.0]);
        assert_eq!(first_col.half_size_px, [1.0, 360.0]);
        assert!(out.iter().all(|i| i.color == COLOR_BLACK));
    }

    #[test]
    fn swatch_follows_the_mode() {
        let mut out = Vec::new();
        push_mode_swatch(&mut out, Mode::Deletion);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].color, COLOR_BLACK);
        assert_eq!(out[1].color, rgb(Mode::Deletion.display().color));
    }
}
