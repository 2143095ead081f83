//! Image switching for the annotation session.

use annokit_core::{Direction, NavigationEvent, Result, SessionError, StatusLevel};
use annokit_settings::{BoundsPolicy, UnsavedPolicy};

use super::{AnnotationSession, SaveState};
use crate::image_source::ImageSource;

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The active image changed (or was reloaded).
    Moved { from: usize, to: usize },
    /// Clamped at the first or last image; nothing changed.
    AtEdge,
}

fn unsaved_text(direction: Direction) -> String {
    format!(
        "Please save your changes before moving to the {} image.",
        direction
    )
}

impl<S: ImageSource> AnnotationSession<S> {
    /// Advances to the next image according to the bounds policy.
    pub fn next(&mut self) -> Result<NavigationOutcome> {
        self.step(Direction::Next)
    }

    /// Goes back to the previous image according to the bounds policy.
    pub fn previous(&mut self) -> Result<NavigationOutcome> {
        self.step(Direction::Previous)
    }

    /// Jumps to `index`, loading its saved rectangles into the working set.
    pub fn switch_image(&mut self, index: usize) -> Result<NavigationOutcome> {
        let direction = if index < self.index {
            Direction::Previous
        } else {
            Direction::Next
        };
        self.go_to(index, direction)
    }

    /// Throws away unsaved edits and reloads the saved state of the current image.
    pub fn discard_changes(&mut self) {
        self.load_working_set();
        self.save_state = SaveState::Untouched;
        tracing::debug!("Discarded edits on image {}", self.index + 1);
    }

    fn step(&mut self, direction: Direction) -> Result<NavigationOutcome> {
        let len = self.images.len();
        if len == 0 {
            return Err(SessionError::NoImages.into());
        }

        let wrap = self.navigation.bounds == BoundsPolicy::Wrap;
        let target = match direction {
            Direction::Next if self.index + 1 < len => Some(self.index + 1),
            Direction::Next if wrap => Some(0),
            Direction::Previous if self.index > 0 => Some(self.index - 1),
            Direction::Previous if wrap => Some(len - 1),
            _ => None,
        };

        match target.filter(|&target| target != self.index) {
            Some(target) => self.go_to(target, direction),
            None => {
                tracing::debug!("Already at the {} edge", direction);
                Ok(NavigationOutcome::AtEdge)
            }
        }
    }

    fn go_to(&mut self, index: usize, direction: Direction) -> Result<NavigationOutcome> {
        let len = self.images.len();
        if len == 0 {
            return Err(SessionError::NoImages.into());
        }
        if index >= len {
            tracing::warn!("Image index {} requested, only {} images", index, len);
            return Err(SessionError::ImageOutOfRange { index, len }.into());
        }

        let from = self.index;
        let had_unsaved = self.save_state == SaveState::Unsaved;
        if had_unsaved {
            let blocked = self.navigation.unsaved == UnsavedPolicy::Block;
            self.emit(NavigationEvent::UnsavedWarning {
                image_index: from,
                direction: Some(direction),
                blocked,
            });
            if blocked {
                tracing::warn!("Navigation from image {} refused: unsaved changes", from + 1);
                self.status.show(StatusLevel::Warning, unsaved_text(direction));
                return Err(SessionError::UnsavedChanges { index: from }.into());
            }
            tracing::warn!("Leaving image {} with unsaved changes", from + 1);
            self.save_state = SaveState::Untouched;
        }

        self.status.cancel();
        self.index = index;
        self.load_working_set();
        self.refresh_image();

        if had_unsaved {
            self.status.show(StatusLevel::Warning, unsaved_text(direction));
        }
        self.emit(NavigationEvent::ImageChanged { from, to: index });
        tracing::debug!("Switched image {} -> {}", from + 1, index + 1);

        Ok(NavigationOutcome::Moved { from, to: index })
    }

    fn load_working_set(&mut self) {
        let store = self.saved.get(&self.index).cloned().unwrap_or_default();
        self.canvas.load(store);
    }
}
