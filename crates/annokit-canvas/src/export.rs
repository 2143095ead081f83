//! Annotation snapshot written to the log on demand.

use serde::Serialize;

use crate::geometry::{to_original_space, FitScale};
use crate::image_source::ImageInfo;
use crate::model::Rectangle;
use crate::rect_store::RectStore;

/// The working set in both coordinate spaces, plus the scale that links them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationExport {
    /// `None` while the image is still loading.
    pub original_width: Option<f64>,
    pub original_height: Option<f64>,
    pub scale_width: f64,
    pub scale_height: f64,
    pub scaled_rectangles: Vec<Rectangle>,
    pub original_size_rectangles: Vec<Rectangle>,
}

impl AnnotationExport {
    pub fn build(store: &RectStore, image: &ImageInfo, fit: &FitScale) -> Self {
        let scaled_rectangles = store.rectangles();
        let original_size_rectangles = scaled_rectangles
            .iter()
            .map(|rect| to_original_space(rect, fit.scale))
            .collect();
        let dimensions = image.dimensions();

        Self {
            original_width: dimensions.map(|(width, _)| width),
            original_height: dimensions.map(|(_, height)| height),
            scale_width: fit.scale_width,
            scale_height: fit.scale_height,
            scaled_rectangles,
            original_size_rectangles,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
