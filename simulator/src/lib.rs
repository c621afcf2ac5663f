// Library root

pub mod automaton;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod mode;
pub mod paint;
pub mod session;

// Primary API
pub use automaton::{step, StepReport};
pub use cli::ConfigArgs;
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use grid::{Census, CellState, Grid, GridPos};
pub use mode::{display, Mode, ModeDisplay};
pub use paint::{DiscMask, PaintOp};
pub use session::{InputEvent, Session, TickReport};
