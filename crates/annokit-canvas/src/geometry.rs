//! Geometry helpers shared by the canvas, the draw machine and export.
//!
//! Display space is the fitted on-screen image; original space is the source image
//! in its own pixels. The two differ by a single uniform scale factor.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

use crate::model::Rectangle;

/// A point in display (container-local) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned box with a top-left origin and non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive hit test, grown by `tolerance` on every side.
    pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
        point.x >= self.x - tolerance
            && point.x <= self.right() + tolerance
            && point.y >= self.y - tolerance
            && point.y <= self.bottom() + tolerance
    }
}

/// Bounds spanned by two corners, independent of drag direction.
pub fn normalize(p1: Point, p2: Point) -> Bounds {
    Bounds {
        x: p1.x.min(p2.x),
        y: p1.y.min(p2.y),
        width: (p2.x - p1.x).abs(),
        height: (p2.y - p1.y).abs(),
    }
}

fn usable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Uniform fit-to-box scale: `min(box_w / image_w, box_h / image_h)`.
///
/// Missing image dimensions (zero, negative, NaN) count as 1 so an unready
/// image never divides by zero.
pub fn scale_factor(image_width: f64, image_height: f64, box_width: f64, box_height: f64) -> f64 {
    let (scale_width, scale_height) = axis_scales(image_width, image_height, box_width, box_height);
    scale_width.min(scale_height)
}

fn axis_scales(image_width: f64, image_height: f64, box_width: f64, box_height: f64) -> (f64, f64) {
    (
        box_width / usable(image_width),
        box_height / usable(image_height),
    )
}

/// Converts display coordinates to source-image pixels.
pub fn to_original_space(rect: &Rectangle, scale: f64) -> Rectangle {
    let scale = usable(scale);
    Rectangle {
        x1: rect.x1 / scale,
        y1: rect.y1 / scale,
        x2: rect.x2 / scale,
        y2: rect.y2 / scale,
        ..rect.clone()
    }
}

/// Converts source-image pixels back to display coordinates.
pub fn to_display_space(rect: &Rectangle, scale: f64) -> Rectangle {
    let scale = usable(scale);
    Rectangle {
        x1: rect.x1 * scale,
        y1: rect.y1 * scale,
        x2: rect.x2 * scale,
        y2: rect.y2 * scale,
        ..rect.clone()
    }
}

/// Fit-to-box scale for one image, recomputed whenever the image or its readiness changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitScale {
    /// `box_width / image_width`
    pub scale_width: f64,
    /// `box_height / image_height`
    pub scale_height: f64,
    /// The smaller of the two; applied to both axes.
    pub scale: f64,
    /// Displayed image width.
    pub stage_width: f64,
    /// Displayed image height.
    pub stage_height: f64,
}

impl FitScale {
    /// `image` is `None` while the image is still loading.
    pub fn compute(image: Option<(f64, f64)>, box_width: f64, box_height: f64) -> Self {
        let (width, height) = image.unwrap_or((1.0, 1.0));
        let (width, height) = (usable(width), usable(height));
        let (scale_width, scale_height) = axis_scales(width, height, box_width, box_height);
        let scale = scale_width.min(scale_height);
        Self {
            scale_width,
            scale_height,
            scale,
            stage_width: width * scale,
            stage_height: height * scale,
        }
    }
}
