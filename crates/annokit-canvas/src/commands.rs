use crate::geometry::Point;
use crate::model::{RectId, RectPatch, Rectangle};
use crate::rect_store::RectStore;

/// Geometry edits produced by the drag and resize handles.
///
/// Commands are plain values: they describe the final position reported by
/// the renderer and are turned into a [`RectPatch`] against the rectangle as
/// it is stored now.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformCommand {
    Move(MoveRect),
    Resize(ResizeRect),
}

/// Drag ended with the rectangle's top-left corner at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRect {
    pub id: RectId,
    pub x: f64,
    pub y: f64,
}

/// Resize ended with the top-left corner at `(x, y)` and the node scaled by
/// `scale_x` / `scale_y` relative to its stored size.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRect {
    pub id: RectId,
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl TransformCommand {
    pub fn id(&self) -> RectId {
        match self {
            TransformCommand::Move(cmd) => cmd.id,
            TransformCommand::Resize(cmd) => cmd.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TransformCommand::Move(_) => "Move Rectangle",
            TransformCommand::Resize(_) => "Resize Rectangle",
        }
    }

    /// Corner update for `rect`. The result is always normalized (first corner
    /// top-left). A resize never goes below `min_size` on either axis.
    pub fn to_patch(&self, rect: &Rectangle, min_size: f64) -> RectPatch {
        let (x, y, width, height) = match self {
            TransformCommand::Move(cmd) => (cmd.x, cmd.y, rect.width(), rect.height()),
            TransformCommand::Resize(cmd) => (
                cmd.x,
                cmd.y,
                (rect.width() * cmd.scale_x.abs()).max(min_size),
                (rect.height() * cmd.scale_y.abs()).max(min_size),
            ),
        };
        RectPatch::corners(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Applies the command to the store. Stale identifiers are ignored.
    pub fn apply(&self, store: &mut RectStore, min_size: f64) -> bool {
        let patch = match store.get(self.id()) {
            Some(rect) => self.to_patch(rect, min_size),
            None => {
                tracing::debug!("{} skipped: {} no longer exists", self.name(), self.id());
                return false;
            }
        };
        store.update(self.id(), &patch)
    }
}
