//! # AnnoKit
//!
//! Interactive rectangle annotation for image sequences: draw boxes over each
//! image, keep them per image, and export them in the image's own pixels.
//!
//! ## Architecture
//!
//! AnnoKit is organized as a workspace with multiple crates:
//!
//! 1. **annokit-core** - Errors, notification event bus, status message timer
//! 2. **annokit-settings** - Configuration file handling and validation
//! 3. **annokit-canvas** - Geometry, rectangle store, drawing, selection, session
//! 4. **annokit** - This crate: logging setup, file-backed images, command line
//!
//! A presentation layer drives an [`AnnotationSession`] with pointer/touch
//! input and renders [`AnnotationSession::canvas_rectangles`] plus the events
//! published on its [`EventBus`].

pub mod cli;
pub mod image_files;

pub use annokit_canvas::{
    AnnotationExport, AnnotationSession, Bounds, Canvas, FitScale, ImageInfo, ImageSource,
    InputEvent, MoveRect, NavigationOutcome, Point, PointerEvent, RectId, RectPatch, RectStore,
    Rectangle, RenderedRect, ResizeRect, SaveState, StaticImages, TouchEvent, TransformCommand,
};
pub use annokit_core::{
    AppEvent, DocumentEvent, Error, EventBus, EventFilter, NavigationEvent, Result, SessionError,
    StatusBoard, StatusEvent,
};
pub use annokit_settings::{Config, LoggingSettings, SettingsError};
pub use image_files::PathImageSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = env_filter(rust_log(), "info")?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging from the `[logging]` config section
///
/// `RUST_LOG` still wins over the configured level when it is set.
pub fn init_logging_with(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = env_filter(rust_log(), &settings.level)?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

fn rust_log() -> Option<String> {
    std::env::var("RUST_LOG").ok()
}

/// `RUST_LOG` directives when set and non-empty, otherwise `default_level`.
fn env_filter(
    rust_log: Option<String>,
    default_level: &str,
) -> anyhow::Result<tracing_subscriber::EnvFilter> {
    use tracing_subscriber::EnvFilter;

    let filter = match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_new(default_level)?,
    };
    Ok(filter)
}
