use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;
pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_SPREAD_RADIUS: i32 = 1;
pub const DEFAULT_SIDE_MOVE_PROBABILITY: f64 = 0.1;
pub const DEFAULT_SPREAD_FILL_PROBABILITY: f64 = 0.7;
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// Session parameters, fixed when the session starts.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    pub spread_radius: i32,
    pub side_move_probability: f64,
    pub spread_fill_probability: f64,
    /// Ticks per second for drivers that run in real time.
    pub tick_rate: f64,
    /// Seed for the session RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            spread_radius: DEFAULT_SPREAD_RADIUS,
            side_move_probability: DEFAULT_SIDE_MOVE_PROBABILITY,
            spread_fill_probability: DEFAULT_SPREAD_FILL_PROBABILITY,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Grid height in cells.
    pub fn num_rows(&self) -> usize {
        if self.cell_size == 0 {
            return 0;
        }
        (self.viewport_height / self.cell_size) as usize
    }

    /// Grid width in cells.
    pub fn num_cols(&self) -> usize {
        if self.cell_size == 0 {
            return 0;
        }
        (self.viewport_width / self.cell_size) as usize
    }

    /// Rejects settings that would only fail later, mid-tick.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(invalid("cell_size must be positive"));
        }
        if self.num_rows() == 0 || self.num_cols() == 0 {
            return Err(invalid(format!(
                "viewport {}x{} is smaller than one {}px cell",
                self.viewport_width, self.viewport_height, self.cell_size
            )));
        }
        if self.spread_radius < 0 {
            return Err(invalid(format!(
                "spread_radius must be non-negative, got {}",
                self.spread_radius
            )));
        }
        let max_radius = self.num_rows().max(self.num_cols());
        if self.spread_radius as usize > max_radius {
            return Err(invalid(format!(
                "spread_radius {} exceeds the larger grid dimension ({max_radius} cells)",
                self.spread_radius
            )));
        }
        check_probability("side_move_probability", self.side_move_probability)?;
        check_probability("spread_fill_probability", self.spread_fill_probability)?;
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(invalid(format!(
                "tick_rate must be a positive finite number, got {}",
                self.tick_rate
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(invalid(format!("{name} must be within [0, 1], got {p}")));
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> SimError {
    SimError::InvalidConfig(msg.into())
}
