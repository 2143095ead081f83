//! # AnnoKit Core
//!
//! Core types shared by the AnnoKit crates.
//! Provides the error taxonomy, the notification event bus and the
//! auto-dismissing status message board.

pub mod error;
pub mod event_bus;
pub mod status;

pub use error::{Error, Result, SessionError};

pub use event_bus::{
    AppEvent, Direction, DocumentEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, NavigationEvent, StatusEvent, StatusLevel, SubscriptionId,
};

pub use status::{StatusBoard, StatusMessage};
