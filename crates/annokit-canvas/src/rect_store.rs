use std::collections::HashMap;

use crate::model::{RectId, RectPatch, Rectangle};

/// Ordered collection of rectangles keyed by stable identifier.
///
/// `RectStore` owns one image's annotations. Insertion order is the list
/// and draw order, so the last rectangle is drawn on top and wins hit tests.
///
/// Identifiers come from a per-store counter that only moves forward: a
/// removed identifier is never handed out again by the same store or by
/// any clone of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectStore {
    rects: HashMap<RectId, Rectangle>,
    order: Vec<RectId>,
    next_id: u64,
}

impl RectStore {
    pub fn new() -> Self {
        Self {
            rects: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    fn generate_id(&mut self) -> RectId {
        let id = RectId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a rectangle and returns its new identifier.
    pub fn add(&mut self, rect: Rectangle) -> RectId {
        let id = self.generate_id();
        self.rects.insert(id, rect);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: RectId) -> Option<&Rectangle> {
        self.rects.get(&id)
    }

    pub fn contains(&self, id: RectId) -> bool {
        self.rects.contains_key(&id)
    }

    /// Zero-based list position.
    pub fn position(&self, id: RectId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    /// Merges `patch` into the rectangle. Unknown identifiers are a no-op.
    pub fn update(&mut self, id: RectId, patch: &RectPatch) -> bool {
        match self.rects.get_mut(&id) {
            Some(rect) => {
                *rect = patch.apply(rect);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: RectId, name: impl Into<String>) -> bool {
        self.update(id, &RectPatch::rename(name))
    }

    /// Flips visibility and returns the new `hide` value.
    pub fn toggle_hidden(&mut self, id: RectId) -> Option<bool> {
        let rect = self.rects.get_mut(&id)?;
        rect.hide = !rect.hide;
        Some(rect.hide)
    }

    pub fn remove(&mut self, id: RectId) -> Option<Rectangle> {
        let rect = self.rects.remove(&id)?;
        self.order.retain(|&candidate| candidate != id);
        Some(rect)
    }

    /// Removes every rectangle. The identifier counter keeps counting.
    pub fn clear(&mut self) -> usize {
        let removed = self.order.len();
        self.rects.clear();
        self.order.clear();
        removed
    }

    /// Rectangles in list order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (RectId, &Rectangle)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.rects.get(&id).map(|rect| (id, rect)))
    }

    pub fn ids(&self) -> Vec<RectId> {
        self.order.clone()
    }

    /// Owned copy of the rectangles in list order.
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.iter().map(|(_, rect)| rect.clone()).collect()
    }

    /// Display label: the custom name, or `Selection-{n}` from the list position.
    pub fn label(&self, id: RectId) -> Option<String> {
        let position = self.position(id)?;
        let rect = self.rects.get(&id)?;
        Some(label_at(position, rect))
    }

    /// [`RectStore::iter`] with each rectangle's label, in one pass.
    pub fn iter_labelled(&self) -> impl Iterator<Item = (RectId, &Rectangle, String)> + '_ {
        self.iter()
            .enumerate()
            .map(|(position, (id, rect))| (id, rect, label_at(position, rect)))
    }
}

fn label_at(position: usize, rect: &Rectangle) -> String {
    match &rect.name {
        Some(name) => name.clone(),
        None => format!("Selection-{}", position + 1),
    }
}

impl FromIterator<Rectangle> for RectStore {
    fn from_iter<T: IntoIterator<Item = Rectangle>>(iter: T) -> Self {
        let mut store = RectStore::new();
        for rect in iter {
            store.add(rect);
        }
        store
    }
}
