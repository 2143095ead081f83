use serde::Serialize;

use crate::geometry::Bounds;
use crate::model::RectId;

/// One visible rectangle as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRect {
    pub id: RectId,
    pub bounds: Bounds,
    pub label: String,
    pub selected: bool,
    /// Resize handles are attached to the selected rectangle only.
    pub show_handles: bool,
}

/// One row of the sidebar list. Hidden rectangles are listed too.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: RectId,
    pub label: String,
    pub hidden: bool,
    pub selected: bool,
}
