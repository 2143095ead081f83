//! Annotation records.

use serde::{Deserialize, Serialize};

use crate::geometry::{normalize, Bounds, Point};

/// Stable identifier assigned when a rectangle is created.
///
/// Identity never depends on position: deleting a rectangle leaves every
/// other identifier valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RectId(pub u64);

impl std::fmt::Display for RectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user-drawn rectangle in display coordinates.
///
/// The corners keep the order they were drawn in; use [`Rectangle::bounds`]
/// for anything that needs a top-left origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub hide: bool,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            name: None,
            hide: false,
        }
    }

    pub fn from_points(first: Point, second: Point) -> Self {
        Self::new(first.x, first.y, second.x, second.y)
    }

    /// Top-left + size form.
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::new(bounds.x, bounds.y, bounds.right(), bounds.bottom())
    }

    pub fn first(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn second(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn bounds(&self) -> Bounds {
        normalize(self.first(), self.second())
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// Same corners, geometry only. Used to compare shapes while ignoring metadata.
    pub fn corners(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }
}

/// Partial update for a rectangle. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectPatch {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    /// `Some(None)` resets to the positional label.
    pub name: Option<Option<String>>,
    pub hide: Option<bool>,
}

impl RectPatch {
    /// Replace both corners.
    pub fn corners(first: Point, second: Point) -> Self {
        Self {
            x1: Some(first.x),
            y1: Some(first.y),
            x2: Some(second.x),
            y2: Some(second.y),
            ..Default::default()
        }
    }

    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            ..Default::default()
        }
    }

    pub fn hide(hide: bool) -> Self {
        Self {
            hide: Some(hide),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produces the patched rectangle; `rect` itself is not modified.
    pub fn apply(&self, rect: &Rectangle) -> Rectangle {
        Rectangle {
            x1: self.x1.unwrap_or(rect.x1),
            y1: self.y1.unwrap_or(rect.y1),
            x2: self.x2.unwrap_or(rect.x2),
            y2: self.y2.unwrap_or(rect.y2),
            name: match &self.name {
                Some(name) => name.clone(),
                None => rect.name.clone(),
            },
            hide: self.hide.unwrap_or(rect.hide),
        }
    }
}
