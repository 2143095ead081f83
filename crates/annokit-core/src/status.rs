//! Transient status messages with auto-dismiss.
//!
//! At most one message is visible. Showing a new message cancels the pending
//! dismissal of the previous one, and `cancel()` (image switch, teardown) or
//! dropping the board aborts the timer task so it never fires against stale state.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::event_bus::{AppEvent, EventBus, StatusEvent, StatusLevel};

/// A visible status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Increases with every message shown by the same board.
    pub generation: u64,
    pub level: StatusLevel,
    pub text: String,
}

/// Scheduled dismissal; aborted when dropped.
#[derive(Debug)]
struct DismissTimer {
    handle: JoinHandle<()>,
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Owner of the current status message and its dismiss timer.
#[derive(Debug)]
pub struct StatusBoard {
    current: Arc<Mutex<Option<StatusMessage>>>,
    timer: Option<DismissTimer>,
    next_generation: u64,
    dismiss_after: Duration,
    bus: Arc<EventBus>,
}

impl StatusBoard {
    /// Creates a board publishing to `bus`. A zero duration disables auto-dismiss.
    pub fn new(bus: Arc<EventBus>, dismiss_after: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            timer: None,
            next_generation: 1,
            dismiss_after,
            bus,
        }
    }

    /// Shows a message, superseding any visible one. Returns its generation.
    ///
    /// The dismissal is scheduled on the ambient tokio runtime. Without a runtime
    /// the message stays until it is superseded or cancelled.
    pub fn show(&mut self, level: StatusLevel, text: impl Into<String>) -> u64 {
        self.timer = None;

        let generation = self.next_generation;
        self.next_generation += 1;
        let text = text.into();

        *self.current.lock() = Some(StatusMessage {
            generation,
            level,
            text: text.clone(),
        });
        self.bus
            .publish(AppEvent::Status(StatusEvent::Shown {
                generation,
                level,
                text,
            }))
            .ok();

        if self.dismiss_after.is_zero() {
            return generation;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let current = Arc::clone(&self.current);
                let bus = Arc::clone(&self.bus);
                let delay = self.dismiss_after;
                let handle = runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let expired = {
                        let mut slot = current.lock();
                        if slot.as_ref().is_some_and(|m| m.generation == generation) {
                            *slot = None;
                            true
                        } else {
                            false
                        }
                    };
                    if expired {
                        bus.publish(AppEvent::Status(StatusEvent::Dismissed { generation }))
                            .ok();
                    }
                });
                self.timer = Some(DismissTimer { handle });
            }
            Err(_) => {
                tracing::debug!("No async runtime; status #{} will not auto-dismiss", generation);
            }
        }

        generation
    }

    /// Currently visible message, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        self.current.lock().clone()
    }

    /// Whether a dismissal is still pending.
    pub fn is_armed(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|timer| !timer.handle.is_finished())
    }

    /// Cancels the pending dismissal and hides the current message.
    pub fn cancel(&mut self) {
        self.timer = None;
        self.current.lock().take();
    }
}
