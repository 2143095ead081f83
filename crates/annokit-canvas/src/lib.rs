//! # AnnoKit Canvas
//!
//! Rectangle annotation over a list of images: draw boxes by click-drag,
//! select, move, resize, rename, hide and delete them, save them per image
//! and export them in the image's own pixel space.
//!
//! ## Core Components
//!
//! - **Geometry**: points, normalized bounds, fit-to-box scaling
//! - **RectStore**: ordered rectangles keyed by stable [`RectId`]
//! - **DrawMachine**: anchor / preview / commit state for click-drag creation
//! - **SelectionManager**: single selection and the drag/resize interaction flag
//! - **Canvas**: the working set for the image on screen
//! - **AnnotationSession**: image navigation, saved results, notifications
//!
//! ## Architecture
//!
//! ```text
//! AnnotationSession (per image source)
//!   ├── Canvas (working set)
//!   │     ├── RectStore
//!   │     ├── SelectionManager
//!   │     └── DrawMachine
//!   ├── saved: image index -> RectStore
//!   └── StatusBoard / EventBus (annokit-core)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use annokit_canvas::{AnnotationSession, PointerEvent, StaticImages};
//! use annokit_settings::Config;
//!
//! let images = StaticImages::uniform(2, 1800.0, 1200.0);
//! let mut session = AnnotationSession::new(images, &Config::default());
//!
//! session.handle_input(PointerEvent::down(10.0, 10.0));
//! session.handle_input(PointerEvent::moved(60.0, 60.0));
//! let id = session.handle_input(PointerEvent::up(60.0, 60.0));
//! assert!(id.is_some());
//!
//! session.save();
//! let export = session.log_annotations();
//! assert_eq!(export.original_size_rectangles[0].x2, 120.0);
//! ```

pub mod canvas;
pub mod commands;
pub mod draw;
pub mod export;
pub mod geometry;
pub mod image_source;
pub mod input;
pub mod model;
pub mod rect_store;
pub mod selection_manager;
pub mod session;

pub use canvas::{Canvas, ListEntry, RenderedRect};
pub use commands::{MoveRect, ResizeRect, TransformCommand};
pub use draw::{DrawMachine, DrawOutcome, DrawState};
pub use export::AnnotationExport;
pub use geometry::{
    normalize, scale_factor, to_display_space, to_original_space, Bounds, FitScale, Point,
};
pub use image_source::{ImageInfo, ImageSource, StaticImages};
pub use input::{InputEvent, PointerEvent, PointerPhase, TouchEvent, TouchPhase};
pub use model::{RectId, RectPatch, Rectangle};
pub use rect_store::RectStore;
pub use selection_manager::{Interaction, SelectionManager};
pub use session::{AnnotationSession, NavigationOutcome, SaveState};
