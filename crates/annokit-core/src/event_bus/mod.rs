//! # Event Bus Module
//!
//! Notification channel between the annotation core and whatever renders it.
//!
//! ## Usage
//!
//! ```rust
//! use annokit_core::event_bus::{AppEvent, DocumentEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Document]),
//!     |event| {
//!         if let AppEvent::Document(doc) = event {
//!             println!("document event: {:?}", doc);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Document(DocumentEvent::Deleted {
//!     name: "Selection-1".to_string(),
//! }))
//! .ok();
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
