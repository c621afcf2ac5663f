//! Turns window mouse events into session pointer events.

use cellfluid_simulator::InputEvent;

/// Left-button state as seen by the window.
///
/// A press only reaches the session once the cursor is over the grid. A
/// press made off-grid, or before the first cursor position arrives, is
/// delivered as a `PointerDown` at the first on-grid position of the drag.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<(i64, i64)>,
    held: bool,
    delivered: bool,
}

impl PointerTracker {
    pub fn moved(&mut self, x: i64, y: i64, on_grid: bool) -> Option<InputEvent> {
        self.cursor = Some((x, y));
        if !(self.held && on_grid) {
            return None;
        }
        if self.delivered {
            Some(InputEvent::PointerMove { x, y })
        } else {
            self.delivered = true;
            Some(InputEvent::PointerDown { x, y })
        }
    }

    pub fn left(&mut self) {
        self.cursor = None;
    }

    /// `on_grid` tests a pixel position against the grid.
    pub fn pressed(&mut self, on_grid: impl Fn(i64, i64) -> bool) -> Option<InputEvent> {
        self.held = true;
        self.delivered = false;
        let (x, y) = self.cursor.filter(|&(x, y)| on_grid(x, y))?;
        self.delivered = true;
        Some(InputEvent::PointerDown { x, y })
    }

    pub fn released(&mut self) -> Option<InputEvent> {
        let delivered = self.delivered;
        self.held = false;
        self.delivered = false;
        delivered.then_some(InputEvent::PointerUp)
    }
}
