//! Click-drag rectangle creation.
//!
//! ```text
//! Idle --down--> Anchored --move--> Previewing --move--> Previewing
//!   ^                |                   |
//!   +------up--------+-------up----------+
//! ```
//!
//! Every pointer-up returns to `Idle`. The drag only produces a rectangle when
//! both axis deltas are strictly greater than the threshold.

use crate::geometry::Point;
use crate::model::Rectangle;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawState {
    #[default]
    Idle,
    Anchored {
        anchor: Point,
    },
    Previewing {
        anchor: Point,
        preview: Rectangle,
    },
}

/// Result of a pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// No drag was in progress, or the canvas was busy with a drag/resize.
    Ignored,
    /// The drag was too small on at least one axis.
    Discarded,
    Committed(Rectangle),
}

#[derive(Debug, Clone)]
pub struct DrawMachine {
    state: DrawState,
    threshold: f64,
}

impl Default for DrawMachine {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl DrawMachine {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: DrawState::Idle,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            DrawState::Idle => None,
            DrawState::Anchored { anchor } | DrawState::Previewing { anchor, .. } => Some(anchor),
        }
    }

    pub fn preview(&self) -> Option<&Rectangle> {
        match &self.state {
            DrawState::Previewing { preview, .. } => Some(preview),
            _ => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state != DrawState::Idle
    }

    /// Anchors a new drag at `at`. Refused while a drag or resize owns the pointer.
    pub fn pointer_down(&mut self, at: Point, interacting: bool) -> bool {
        if interacting {
            return false;
        }
        self.state = DrawState::Anchored { anchor: at };
        true
    }

    /// Updates the preview. Without an anchor this does nothing.
    pub fn pointer_move(&mut self, at: Point) -> Option<&Rectangle> {
        let anchor = self.anchor()?;
        self.state = DrawState::Previewing {
            anchor,
            preview: Rectangle::from_points(anchor, at),
        };
        self.preview()
    }

    /// Finishes the drag and returns to `Idle`.
    pub fn pointer_up(&mut self, at: Point, interacting: bool) -> DrawOutcome {
        let state = std::mem::take(&mut self.state);
        let anchor = match state {
            DrawState::Idle => return DrawOutcome::Ignored,
            DrawState::Anchored { anchor } | DrawState::Previewing { anchor, .. } => anchor,
        };
        if interacting {
            return DrawOutcome::Ignored;
        }

        if (at.x - anchor.x).abs() > self.threshold && (at.y - anchor.y).abs() > self.threshold {
            DrawOutcome::Committed(Rectangle::from_points(anchor, at))
        } else {
            DrawOutcome::Discarded
        }
    }

    /// Drops the anchor and preview.
    pub fn cancel(&mut self) {
        self.state = DrawState::Idle;
    }
}
