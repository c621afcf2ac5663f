//! Command-line overrides shared by the simulator and visualizer binaries.

use std::path::PathBuf;

use clap::Args;

use crate::config::SimConfig;
use crate::error::Result;

#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// JSON file with session settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Fluid brush radius in cells
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<i32>,

    /// Chance per tick that a resting fluid cell tries each side
    #[arg(long)]
    pub side_prob: Option<f64>,

    /// Chance that the fluid brush fills each empty cell it covers
    #[arg(long)]
    pub fill_prob: Option<f64>,

    /// Simulation ticks per second
    #[arg(long)]
    pub tick_rate: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ConfigArgs {
    /// Loads the config file (or defaults) and applies flag overrides.
    ///
    /// The result is not validated; `Session::new` does that.
    pub fn resolve(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)?,
            None => SimConfig::default(),
        };

        if let Some(v) = self.width {
            config.viewport_width = v;
        }
        if let Some(v) = self.height {
            config.viewport_height = v;
        }
        if let Some(v) = self.cell_size {
            config.cell_size = v;
        }
        if let Some(v) = self.radius {
            config.spread_radius = v;
        }
        if let Some(v) = self.side_prob {
            config.side_move_probability = v;
        }
        if let Some(v) = self.fill_prob {
            config.spread_fill_probability = v;
        }
        if let Some(v) = self.tick_rate {
            config.tick_rate = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn no_flags_gives_defaults() -> Result<()> {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.config.resolve()?, SimConfig::default());
        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> Result<()> {
        let cli = TestCli::parse_from([
            "test",
            "--cell-size",
            "20",
            "--radius",
            "3",
            "--fill-prob",
            "1",
            "--seed",
            "9",
        ]);
        let config = cli.config.resolve()?;
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.spread_radius, 3);
        assert_eq!(config.spread_fill_probability, 1.0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.viewport_width, SimConfig::default().viewport_width);
        Ok(())
    }

    #[test]
    fn negative_radius_parses_so_validation_can_reject_it() -> Result<()> {
        let cli = TestCli::parse_from(["test", "--radius", "-1"]);
        let config = cli.config.resolve()?;
        assert!(config.validate().is_err());
        Ok(())
    }
}
