//! Canvas for drawing and manipulating annotation rectangles.

mod types;

pub use types::{ListEntry, RenderedRect};

use annokit_settings::CanvasSettings;

use crate::commands::TransformCommand;
use crate::draw::{DrawMachine, DrawOutcome};
use crate::geometry::{Bounds, Point};
use crate::input::{InputEvent, PointerPhase};
use crate::model::{RectId, Rectangle};
use crate::rect_store::RectStore;
use crate::selection_manager::{Interaction, SelectionManager};

/// Working-set state for the image on screen: the rectangles, the selection
/// and the in-progress drag.
///
/// Positions arrive in client coordinates and are made container-local by
/// subtracting the container origin. The image is rendered at the container
/// origin, so container-local equals display space.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub rect_store: RectStore,
    pub selection_manager: SelectionManager,
    draw: DrawMachine,
    container_origin: Point,
    min_resize: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates a canvas with the default thresholds.
    pub fn new() -> Self {
        Self::with_settings(&CanvasSettings::default())
    }

    pub fn with_settings(settings: &CanvasSettings) -> Self {
        Self {
            rect_store: RectStore::new(),
            selection_manager: SelectionManager::new(),
            draw: DrawMachine::new(settings.draw_threshold),
            container_origin: Point::default(),
            min_resize: settings.min_resize,
        }
    }

    /// Replaces the working set and clears every transient.
    pub fn load(&mut self, store: RectStore) {
        self.rect_store = store;
        self.reset_transients();
    }

    /// Drops the selection, the interaction and any half-drawn rectangle.
    pub fn reset_transients(&mut self) {
        self.selection_manager.reset();
        self.draw.cancel();
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.container_origin = origin;
    }

    pub fn container_origin(&self) -> Point {
        self.container_origin
    }

    pub fn to_local(&self, client: Point) -> Point {
        client - self.container_origin
    }

    pub fn min_resize(&self) -> f64 {
        self.min_resize
    }

    pub fn draw_machine(&self) -> &DrawMachine {
        &self.draw
    }

    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing()
    }

    pub fn preview(&self) -> Option<Bounds> {
        self.draw.preview().map(Rectangle::bounds)
    }

    pub fn selected_id(&self) -> Option<RectId> {
        self.selection_manager.selected_id()
    }

    pub fn is_interacting(&self) -> bool {
        self.selection_manager.is_interacting()
    }

    pub fn len(&self) -> usize {
        self.rect_store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rect_store.is_empty()
    }

    /// Feeds one pointer or touch event to the draw machine.
    ///
    /// Returns the identifier of the rectangle created by this event, if any.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<RectId> {
        let pointer = event.to_pointer()?;
        let at = self.to_local(pointer.client);
        let interacting = self.is_interacting();

        match pointer.phase {
            PointerPhase::Down => {
                self.draw.pointer_down(at, interacting);
                None
            }
            PointerPhase::Move => {
                self.draw.pointer_move(at);
                None
            }
            PointerPhase::Up => match self.draw.pointer_up(at, interacting) {
                DrawOutcome::Committed(rect) => {
                    let id = self.rect_store.add(rect);
                    tracing::debug!("Created rectangle {}", id);
                    Some(id)
                }
                DrawOutcome::Discarded => {
                    tracing::trace!("Drag below threshold, discarded");
                    None
                }
                DrawOutcome::Ignored => None,
            },
        }
    }

    /// Topmost visible rectangle under a container-local point.
    pub fn hit_test(&self, point: &Point) -> Option<RectId> {
        self.rect_store
            .iter()
            .rev()
            .find(|(_, rect)| !rect.hide && rect.bounds().contains(point, 0.0))
            .map(|(id, _)| id)
    }

    /// A tap on a rectangle: selects it and abandons any pending anchor.
    pub fn select_on_canvas(&mut self, id: RectId) -> bool {
        match self.rect_store.get(id) {
            Some(rect) if !rect.hide => {
                self.selection_manager.select(id);
                self.draw.cancel();
                true
            }
            _ => false,
        }
    }

    /// A tap on empty canvas: only abandons the anchor.
    pub fn tap_background(&mut self) {
        self.draw.cancel();
    }

    /// A click in the sidebar list. Hidden rectangles can be selected here,
    /// they just get no handles.
    pub fn toggle_selection(&mut self, id: RectId) -> Option<RectId> {
        if !self.rect_store.contains(id) {
            return self.selected_id();
        }
        self.selection_manager.toggle(id)
    }

    /// Rectangle the resize handles should attach to.
    pub fn transform_target(&self) -> Option<RectId> {
        let id = self.selected_id()?;
        let rect = self.rect_store.get(id)?;
        (!rect.hide).then_some(id)
    }

    pub fn begin_drag(&mut self, id: RectId) -> bool {
        self.begin(Interaction::Dragging(id))
    }

    pub fn begin_resize(&mut self, id: RectId) -> bool {
        self.begin(Interaction::Resizing(id))
    }

    fn begin(&mut self, interaction: Interaction) -> bool {
        if !self.rect_store.contains(interaction.id()) {
            return false;
        }
        self.selection_manager.begin(interaction);
        self.draw.cancel();
        true
    }

    /// Ends the drag/resize and writes the final geometry.
    pub fn commit_transform(&mut self, command: &TransformCommand) -> bool {
        self.selection_manager.end_interaction();
        command.apply(&mut self.rect_store, self.min_resize)
    }

    /// Live bound check used while a resize handle moves.
    pub fn bound_box(&self, old: Bounds, new: Bounds) -> Bounds {
        SelectionManager::bound_box(old, new, self.min_resize)
    }

    pub fn rename(&mut self, id: RectId, name: impl Into<String>) -> bool {
        self.rect_store.rename(id, name)
    }

    pub fn toggle_hidden(&mut self, id: RectId) -> Option<bool> {
        self.rect_store.toggle_hidden(id)
    }

    /// Removes a rectangle and returns the label it was shown under.
    pub fn delete(&mut self, id: RectId) -> Option<(String, Rectangle)> {
        let label = self.rect_store.label(id)?;
        let rect = self.rect_store.remove(id)?;
        self.selection_manager.forget(id);
        Some((label, rect))
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.rect_store.clear();
        self.selection_manager.reset();
        removed
    }

    /// Visible rectangles in draw order.
    pub fn render_list(&self) -> Vec<RenderedRect> {
        let target = self.transform_target();
        self.rect_store
            .iter_labelled()
            .filter(|(_, rect, _)| !rect.hide)
            .map(|(id, rect, label)| RenderedRect {
                id,
                bounds: rect.bounds(),
                label,
                selected: self.selection_manager.is_selected(id),
                show_handles: target == Some(id),
            })
            .collect()
    }

    /// Sidebar rows, hidden rectangles included.
    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.rect_store
            .iter_labelled()
            .map(|(id, rect, label)| ListEntry {
                id,
                label,
                hidden: rect.hide,
                selected: self.selection_manager.is_selected(id),
            })
            .collect()
    }
}
