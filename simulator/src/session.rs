//! A running simulation: grid, active mode, RNG and queued input.

use std::collections::VecDeque;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::automaton::{self, StepReport};
use crate::config::SimConfig;
use crate::error::Result;
use crate::grid::{Census, CellState, Grid, GridPos};
use crate::mode::{Mode, ModeDisplay};
use crate::paint::{self, DiscMask, PaintOp};

/// Input delivered by the rendering/input collaborator. Positions are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { x: i64, y: i64 },
    PointerMove { x: i64, y: i64 },
    PointerUp,
    AdvanceMode,
}

/// Outcome of one [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub tick: u64,
    pub events: usize,
    pub painted: usize,
    pub step: StepReport,
}

pub struct Session {
    config: SimConfig,
    grid: Grid,
    mode: Mode,
    mask: DiscMask,
    rng: StdRng,
    pointer_held: bool,
    pending: VecDeque<InputEvent>,
    ticks: u64,
}

impl Session {
    /// Validates `config` and creates an all-empty grid.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: SimConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let mask = DiscMask::new(config.spread_radius)?;
        let grid = Grid::new(config.num_rows(), config.num_cols());
        info!(
            "session started: {}x{} cells ({}px), radius {}, seed {:?}",
            grid.cols(),
            grid.rows(),
            config.cell_size,
            config.spread_radius,
            config.seed
        );
        Ok(Self {
            config,
            grid,
            mode: Mode::default(),
            mask,
            rng,
            pointer_held: false,
            pending: VecDeque::new(),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup. Not for use mid-tick.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mode_display(&self) -> ModeDisplay {
        self.mode.display()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn census(&self) -> Census {
        self.grid.census()
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Every cell with its state, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, CellState)> + '_ {
        self.grid.iter()
    }

    /// Converts a pixel position into the cell under it.
    pub fn cell_at_pixel(&self, x: i64, y: i64) -> Result<GridPos> {
        let size = i64::from(self.config.cell_size);
        let col = x.div_euclid(size);
        let row = y.div_euclid(size);
        if !self.grid.in_bounds(row, col) {
            return Err(self.grid.out_of_bounds(row, col));
        }
        Ok(GridPos::new(col as usize, row as usize))
    }

    /// Queues an event for the next tick.
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    pub fn advance_mode(&mut self) -> Mode {
        self.mode = self.mode.next();
        debug!("mode -> {}", self.mode.display().label);
        self.mode
    }

    /// Applies the active mode's paint operation at a cell.
    pub fn paint(&mut self, target: GridPos) -> Result<usize> {
        paint::apply(
            PaintOp::from(self.mode),
            &mut self.grid,
            target,
            &self.mask,
            self.config.spread_fill_probability,
            &mut self.rng,
        )
    }

    /// Handles one event immediately. Returns the number of cells changed.
    ///
    /// A pointer position off the grid is an error; the pointer still counts
    /// as pressed so a drag that re-enters the grid keeps painting.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<usize> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_held = true;
                let target = self.cell_at_pixel(x, y)?;
                self.paint(target)
            }
            InputEvent::PointerMove { x, y } => {
                if !self.pointer_held {
                    return Ok(0);
                }
                let target = self.cell_at_pixel(x, y)?;
                self.paint(target)
            }
            InputEvent::PointerUp => {
                self.pointer_held = false;
                Ok(0)
            }
            InputEvent::AdvanceMode => {
                self.advance_mode();
                Ok(0)
            }
        }
    }

    /// Runs one automaton step without touching queued input.
    pub fn step(&mut self) -> StepReport {
        automaton::step(
            &mut self.grid,
            &mut self.rng,
            self.config.side_move_probability,
        )
    }

    /// Drains queued input, then advances the automaton once.
    ///
    /// Stops at the first rejected event; events behind it stay queued and
    /// the automaton does not advance.
    pub fn tick(&mut self) -> Result<TickReport> {
        let mut report = TickReport::default();

        while let Some(event) = self.pending.pop_front() {
            report.events += 1;
            report.painted += self.handle_event(event)?;
        }

        report.step = self.step();
        self.ticks += 1;
        report.tick = self.ticks;
        Ok(report)
    }
}
