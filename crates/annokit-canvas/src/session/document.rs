//! Document operations (save, clear, delete, rename, hide, export) for the session.

use annokit_core::{DocumentEvent, StatusLevel};

use super::{AnnotationSession, SaveState};
use crate::export::AnnotationExport;
use crate::image_source::ImageSource;
use crate::model::RectId;

impl<S: ImageSource> AnnotationSession<S> {
    /// Stores the working set as the saved result for the current image.
    pub fn save(&mut self) {
        let count = self.canvas.len();
        self.saved
            .insert(self.index, self.canvas.rect_store.clone());
        self.save_state = SaveState::Saved;

        tracing::info!("Saved {} rectangles for image {}", count, self.index + 1);
        self.emit(DocumentEvent::Saved {
            image_index: self.index,
            count,
        });
        self.status.show(StatusLevel::Success, "Saved!");
    }

    /// Removes every rectangle from the working set.
    pub fn clear_all(&mut self) {
        let removed = self.canvas.clear();
        self.mark_unsaved();

        tracing::debug!("Cleared {} rectangles on image {}", removed, self.index + 1);
        self.emit(DocumentEvent::Cleared {
            image_index: self.index,
        });
        self.status
            .show(StatusLevel::Success, "Cleared all Annotations!");
    }

    /// Deletes one rectangle. Unknown identifiers are a no-op.
    pub fn delete(&mut self, id: RectId) -> bool {
        let Some((name, _)) = self.canvas.delete(id) else {
            tracing::debug!("Delete skipped: {} no longer exists", id);
            return false;
        };
        self.mark_unsaved();

        tracing::debug!("Deleted {} ({})", name, id);
        self.status
            .show(StatusLevel::Success, format!("Deleted {}", name));
        self.emit(DocumentEvent::Deleted { name });
        true
    }

    /// Sets a custom name. Selection is left alone.
    pub fn rename(&mut self, id: RectId, name: impl Into<String>) -> bool {
        let renamed = self.canvas.rename(id, name);
        if renamed {
            self.mark_unsaved();
        }
        renamed
    }

    /// Flips visibility; returns the new `hide` value.
    pub fn toggle_hidden(&mut self, id: RectId) -> Option<bool> {
        let hidden = self.canvas.toggle_hidden(id)?;
        self.mark_unsaved();
        Some(hidden)
    }

    /// Snapshot of the working set in display and original pixels, written to
    /// the log at info level.
    pub fn log_annotations(&mut self) -> AnnotationExport {
        let export = AnnotationExport::build(&self.canvas.rect_store, &self.image, &self.fit);
        match export.to_json() {
            Ok(json) => tracing::info!("Annotations for image {}:\n{}", self.index + 1, json),
            Err(e) => tracing::warn!("Failed to serialize annotations: {}", e),
        }

        self.emit(DocumentEvent::Logged {
            count: export.scaled_rectangles.len(),
        });
        self.status
            .show(StatusLevel::Success, "Logged coordinates to console!");
        export
    }
}
