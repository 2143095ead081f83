//! Event type definitions for the event bus.
//!
//! The canvas core never renders anything itself; it emits these events and a
//! presentation layer turns them into toasts, banners or log lines.

use serde::{Deserialize, Serialize};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Changes to the annotation document (save, clear, delete, export)
    Document(DocumentEvent),
    /// Image navigation
    Navigation(NavigationEvent),
    /// Transient status message lifecycle
    Status(StatusEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Document(_) => EventCategory::Document,
            AppEvent::Navigation(_) => EventCategory::Navigation,
            AppEvent::Status(_) => EventCategory::Status,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Document(e) => e.description(),
            AppEvent::Navigation(e) => e.description(),
            AppEvent::Status(e) => e.description(),
        }
    }
}

impl From<DocumentEvent> for AppEvent {
    fn from(event: DocumentEvent) -> Self {
        AppEvent::Document(event)
    }
}

impl From<NavigationEvent> for AppEvent {
    fn from(event: NavigationEvent) -> Self {
        AppEvent::Navigation(event)
    }
}

impl From<StatusEvent> for AppEvent {
    fn from(event: StatusEvent) -> Self {
        AppEvent::Status(event)
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Document mutation and export events.
    Document,
    /// Image navigation events.
    Navigation,
    /// Status message events.
    Status,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Document => write!(f, "Document"),
            EventCategory::Navigation => write!(f, "Navigation"),
            EventCategory::Status => write!(f, "Status"),
        }
    }
}

/// Document events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// Working set written back to the session.
    Saved {
        /// Image index that was saved.
        image_index: usize,
        /// Number of rectangles saved.
        count: usize,
    },
    /// All rectangles removed from the working set.
    Cleared {
        /// Image index that was cleared.
        image_index: usize,
    },
    /// A single rectangle was deleted.
    Deleted {
        /// Display label of the deleted rectangle.
        name: String,
    },
    /// Annotation coordinates were exported.
    Logged {
        /// Number of rectangles in the snapshot.
        count: usize,
    },
}

impl DocumentEvent {
    fn description(&self) -> String {
        match self {
            DocumentEvent::Saved { image_index, count } => {
                format!("Saved {} rectangles on image {}", count, image_index + 1)
            }
            DocumentEvent::Cleared { image_index } => {
                format!("Cleared image {}", image_index + 1)
            }
            DocumentEvent::Deleted { name } => format!("Deleted {}", name),
            DocumentEvent::Logged { count } => format!("Logged {} rectangles", count),
        }
    }
}

/// Direction of an image navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the next image.
    Next,
    /// Towards the previous image.
    Previous,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

/// Navigation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// The active image changed.
    ImageChanged {
        /// Previous image index.
        from: usize,
        /// New image index.
        to: usize,
    },
    /// Navigation happened (or was attempted) while edits were unsaved.
    UnsavedWarning {
        /// Image index holding the unsaved edits.
        image_index: usize,
        /// Requested direction, when the request came from next/previous.
        direction: Option<Direction>,
        /// Whether the navigation was refused.
        blocked: bool,
    },
}

impl NavigationEvent {
    fn description(&self) -> String {
        match self {
            NavigationEvent::ImageChanged { from, to } => {
                format!("Image {} -> {}", from + 1, to + 1)
            }
            NavigationEvent::UnsavedWarning {
                image_index,
                blocked,
                ..
            } => {
                if *blocked {
                    format!("Navigation blocked: unsaved changes on image {}", image_index + 1)
                } else {
                    format!("Unsaved changes on image {} discarded", image_index + 1)
                }
            }
        }
    }
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    /// Operation completed.
    Success,
    /// Something needs the user's attention.
    Warning,
}

/// Status message events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusEvent {
    /// A status message became visible.
    Shown {
        /// Message generation, increases with every message.
        generation: u64,
        /// Severity.
        level: StatusLevel,
        /// Message text.
        text: String,
    },
    /// The message with this generation expired.
    Dismissed {
        /// Generation of the dismissed message.
        generation: u64,
    },
}

impl StatusEvent {
    fn description(&self) -> String {
        match self {
            StatusEvent::Shown { level, text, .. } => format!("{:?}: {}", level, text),
            StatusEvent::Dismissed { generation } => format!("Status #{} dismissed", generation),
        }
    }
}
