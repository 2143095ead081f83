use crate::geometry::Bounds;
use crate::model::RectId;

/// A drag or resize that currently owns the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Dragging(RectId),
    Resizing(RectId),
}

impl Interaction {
    pub fn id(&self) -> RectId {
        match self {
            Interaction::Dragging(id) | Interaction::Resizing(id) => *id,
        }
    }
}

/// Tracks the single selected rectangle and any ongoing drag or resize.
///
/// `SelectionManager` is responsible for:
/// - Keeping at most one rectangle selected
/// - Distinguishing canvas clicks (select) from list clicks (toggle)
/// - Holding the interaction flag that blocks new drawing while a rectangle
///   is being dragged or resized
///
/// It only stores identifiers. Whether an identifier still exists, and whether
/// it is visible, is checked by the caller against the store.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<RectId>,
    interaction: Option<Interaction>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use annokit_canvas::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// assert!(!manager.is_interacting());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<RectId> {
        self.selected_id
    }

    pub fn set_selected_id(&mut self, id: Option<RectId>) {
        self.selected_id = id;
    }

    pub fn is_selected(&self, id: RectId) -> bool {
        self.selected_id == Some(id)
    }

    /// Canvas click: always selects, never toggles.
    pub fn select(&mut self, id: RectId) {
        self.selected_id = Some(id);
    }

    /// List click: selects, or deselects when `id` is already selected.
    ///
    /// A list click also ends any interaction. Returns the new selection.
    pub fn toggle(&mut self, id: RectId) -> Option<RectId> {
        self.selected_id = if self.is_selected(id) { None } else { Some(id) };
        self.interaction = None;
        self.selected_id
    }

    pub fn begin(&mut self, interaction: Interaction) {
        self.interaction = Some(interaction);
    }

    pub fn interaction(&self) -> Option<Interaction> {
        self.interaction
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn end_interaction(&mut self) -> Option<Interaction> {
        self.interaction.take()
    }

    /// Drops every reference to `id`, e.g. after it was deleted.
    pub fn forget(&mut self, id: RectId) {
        if self.is_selected(id) {
            self.selected_id = None;
        }
        if self.interaction.map(|i| i.id()) == Some(id) {
            self.interaction = None;
        }
    }

    /// Clears selection and interaction.
    pub fn reset(&mut self) {
        self.selected_id = None;
        self.interaction = None;
    }

    /// Live bound function for the resize handles: a proposal narrower or
    /// shorter than `min_size` keeps the previous box.
    pub fn bound_box(old: Bounds, new: Bounds, min_size: f64) -> Bounds {
        if new.width < min_size || new.height < min_size {
            old
        } else {
            new
        }
    }
}
