//! Pointer and touch input in client (window) coordinates.
//!
//! Touch events are reduced to the equivalent pointer event before they reach
//! the draw machine: start and move read the first active touch, end reads the
//! first changed touch because the lifted finger is no longer active.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub client: Point,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Down,
            client: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            client: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Up,
            client: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Touches still on the surface.
    pub touches: Vec<Point>,
    /// Touches that changed in this event.
    pub changed_touches: Vec<Point>,
}

impl TouchEvent {
    /// The pointer event this touch stands for, or `None` when the list it
    /// reads from is empty.
    pub fn to_pointer(&self) -> Option<PointerEvent> {
        let (phase, source) = match self.phase {
            TouchPhase::Start => (PointerPhase::Down, &self.touches),
            TouchPhase::Move => (PointerPhase::Move, &self.touches),
            TouchPhase::End => (PointerPhase::Up, &self.changed_touches),
        };
        source.first().map(|&client| PointerEvent { phase, client })
    }
}

/// Any input the canvas accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
}

impl InputEvent {
    pub fn to_pointer(&self) -> Option<PointerEvent> {
        match self {
            Self::Pointer(event) => Some(*event),
            Self::Touch(event) => event.to_pointer(),
        }
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        Self::Touch(event)
    }
}
