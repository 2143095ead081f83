//! Annotation session: one image source, one working set, saved results per image.
//!
//! This module is split into submodules:
//! - `navigation`: switching images and the unsaved-change policy
//! - `document`: save, clear, delete, rename, hide and export

mod document;
mod navigation;

pub use navigation::NavigationOutcome;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use annokit_core::{AppEvent, EventBus, StatusBoard};
use annokit_settings::{CanvasSettings, Config, NavigationSettings};

use crate::canvas::{Canvas, ListEntry, RenderedRect};
use crate::commands::TransformCommand;
use crate::geometry::{Bounds, FitScale, Point};
use crate::image_source::{ImageInfo, ImageSource};
use crate::input::InputEvent;
use crate::model::{RectId, RectPatch, Rectangle};
use crate::rect_store::RectStore;

/// Whether the working set differs from what was last saved.
///
/// The flag is session-wide, not per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// Nothing happened since the session started or since edits were discarded.
    #[default]
    Untouched,
    /// The working set has edits that are not saved.
    Unsaved,
    /// The last action was a save.
    Saved,
}

/// Session state for UI integration.
///
/// The working set lives in the [`Canvas`]; saved results live in a map
/// keyed by image index and are only written by [`AnnotationSession::save`].
pub struct AnnotationSession<S: ImageSource> {
    images: S,
    index: usize,
    canvas: Canvas,
    saved: HashMap<usize, RectStore>,
    save_state: SaveState,
    fit: FitScale,
    image: ImageInfo,
    canvas_settings: CanvasSettings,
    navigation: NavigationSettings,
    bus: Arc<EventBus>,
    status: StatusBoard,
}

impl<S: ImageSource> AnnotationSession<S> {
    /// Opens a session on the first image with its own event bus.
    pub fn new(images: S, config: &Config) -> Self {
        Self::with_bus(images, config, Arc::new(EventBus::new()))
    }

    /// Opens a session publishing to a shared event bus.
    pub fn with_bus(images: S, config: &Config, bus: Arc<EventBus>) -> Self {
        let status = StatusBoard::new(
            Arc::clone(&bus),
            Duration::from_millis(config.notifications.dismiss_after_ms),
        );
        let mut session = Self {
            images,
            index: 0,
            canvas: Canvas::with_settings(&config.canvas),
            saved: HashMap::new(),
            save_state: SaveState::Untouched,
            fit: FitScale::compute(None, config.canvas.box_width, config.canvas.box_height),
            image: ImageInfo::pending(),
            canvas_settings: config.canvas.clone(),
            navigation: config.navigation.clone(),
            bus,
            status,
        };
        session.refresh_image();
        tracing::debug!("Session opened with {} images", session.images.len());
        session
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn images(&self) -> &S {
        &self.images
    }

    /// Mutable access to the image source, e.g. to report a finished load.
    /// Call [`AnnotationSession::refresh_image`] afterwards.
    pub fn images_mut(&mut self) -> &mut S {
        &mut self.images
    }

    pub fn image_index(&self) -> usize {
        self.index
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.save_state == SaveState::Unsaved
    }

    pub fn fit_scale(&self) -> FitScale {
        self.fit
    }

    pub fn image_info(&self) -> ImageInfo {
        self.image
    }

    /// Saved rectangles for `index`, if that image was ever saved.
    pub fn saved_rectangles(&self, index: usize) -> Option<Vec<Rectangle>> {
        self.saved.get(&index).map(RectStore::rectangles)
    }

    /// Working-set rectangles in list order.
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.canvas.rect_store.rectangles()
    }

    pub fn is_image_loading(&self) -> bool {
        !self.image.ready
    }

    /// Re-reads the active image's readiness and recomputes the fit scale.
    pub fn refresh_image(&mut self) {
        self.image = self.images.image_info(self.index);
        self.fit = FitScale::compute(
            self.image.dimensions(),
            self.canvas_settings.box_width,
            self.canvas_settings.box_height,
        );
        if self.image.ready {
            tracing::debug!(
                "Image {} ready at {}x{}, scale {:.4}",
                self.index + 1,
                self.image.width,
                self.image.height,
                self.fit.scale
            );
        }
    }

    /// `Image {n}/{total}` counter text.
    pub fn position_label(&self) -> String {
        format!("Image {}/{}", self.index + 1, self.images.len())
    }

    /// `Image-{n}` heading text.
    pub fn image_title(&self) -> String {
        format!("Image-{}", self.index + 1)
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.canvas.set_container_origin(origin);
    }

    /// Pointer or touch input on the stage. Returns the rectangle it created.
    pub fn handle_input(&mut self, event: impl Into<InputEvent>) -> Option<RectId> {
        let created = self.canvas.handle_input(&event.into());
        if created.is_some() {
            self.mark_unsaved();
        }
        created
    }

    /// A tap on the stage at a client position: selects the topmost visible
    /// rectangle there, and always abandons a pending anchor.
    pub fn tap(&mut self, client: Point) -> Option<RectId> {
        let local = self.canvas.to_local(client);
        match self.canvas.hit_test(&local) {
            Some(id) => {
                self.canvas.select_on_canvas(id);
                Some(id)
            }
            None => {
                self.canvas.tap_background();
                None
            }
        }
    }

    pub fn select_on_canvas(&mut self, id: RectId) -> bool {
        self.canvas.select_on_canvas(id)
    }

    /// Sidebar click.
    pub fn toggle_selection(&mut self, id: RectId) -> Option<RectId> {
        self.canvas.toggle_selection(id)
    }

    pub fn selected_id(&self) -> Option<RectId> {
        self.canvas.selected_id()
    }

    pub fn begin_drag(&mut self, id: RectId) -> bool {
        self.canvas.begin_drag(id)
    }

    pub fn begin_resize(&mut self, id: RectId) -> bool {
        self.canvas.begin_resize(id)
    }

    /// Drag-end or resize-end.
    pub fn commit_transform(&mut self, command: &TransformCommand) -> bool {
        let applied = self.canvas.commit_transform(command);
        if applied {
            tracing::debug!("{} applied to {}", command.name(), command.id());
            self.mark_unsaved();
        }
        applied
    }

    pub fn bound_box(&self, old: Bounds, new: Bounds) -> Bounds {
        self.canvas.bound_box(old, new)
    }

    /// Arbitrary patch on one rectangle; stale identifiers are a no-op.
    pub fn update_rectangle(&mut self, id: RectId, patch: &RectPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let updated = self.canvas.rect_store.update(id, patch);
        if updated {
            self.mark_unsaved();
        }
        updated
    }

    /// Visible rectangles for the renderer.
    pub fn canvas_rectangles(&self) -> Vec<RenderedRect> {
        self.canvas.render_list()
    }

    /// Rubber-band preview while drawing.
    pub fn preview(&self) -> Option<Bounds> {
        self.canvas.preview()
    }

    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.canvas.list_entries()
    }

    fn mark_unsaved(&mut self) {
        self.save_state = SaveState::Unsaved;
    }

    fn emit(&self, event: impl Into<AppEvent>) {
        // Nobody listening is fine.
        self.bus.publish(event.into()).ok();
    }
}
