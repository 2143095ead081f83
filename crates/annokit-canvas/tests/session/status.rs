use std::time::Duration;

use annokit_canvas::{AnnotationSession, PointerEvent, StaticImages};
use annokit_core::{AppEvent, StatusEvent};
use annokit_settings::Config;

fn session(dismiss_ms: u64) -> AnnotationSession<StaticImages> {
    let mut config = Config::default();
    config.notifications.dismiss_after_ms = dismiss_ms;
    AnnotationSession::new(StaticImages::uniform(2, 900.0, 600.0), &config)
}

#[tokio::test(start_paused = true)]
async fn test_status_auto_dismisses() {
    let mut session = session(5000);
    let mut events = session.bus().receiver();

    session.save();
    assert!(session.status().is_armed());

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(session.status().current().is_some());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(session.status().current().is_none());

    let mut dismissed = false;
    while let Ok(event) = events.try_recv() {
        if matches!(event, AppEvent::Status(StatusEvent::Dismissed { .. })) {
            dismissed = true;
        }
    }
    assert!(dismissed);
}

#[tokio::test(start_paused = true)]
async fn test_new_message_restarts_timer() {
    let mut session = session(1000);
    session.save();
    tokio::time::sleep(Duration::from_millis(800)).await;

    session.log_annotations();
    tokio::time::sleep(Duration::from_millis(800)).await;
    assert_eq!(
        session.status().current().map(|message| message.text).as_deref(),
        Some("Logged coordinates to console!")
    );

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(session.status().current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_switching_images_cancels_timer() {
    let mut session = session(1000);
    session.save();
    assert!(session.status().is_armed());

    session.next().expect("next");
    assert!(!session.status().is_armed());
    assert!(session.status().current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_unsaved_warning_survives_switch() {
    let mut session = session(1000);
    session.handle_input(PointerEvent::down(0.0, 0.0));
    session.handle_input(PointerEvent::up(50.0, 50.0));

    session.next().expect("next");
    assert!(session.status().is_armed());
    assert!(session.status().current().is_some());

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert!(session.status().current().is_none());
}
