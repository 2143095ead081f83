use std::sync::Arc;

use annokit_canvas::{
    AnnotationSession, ImageInfo, NavigationOutcome, PointerEvent, SaveState, StaticImages,
};
use annokit_core::{
    AppEvent, Direction, EventBus, EventCategory, EventFilter, NavigationEvent,
};
use annokit_settings::{BoundsPolicy, Config, UnsavedPolicy};
use parking_lot::Mutex;

fn session(count: usize) -> AnnotationSession<StaticImages> {
    AnnotationSession::new(StaticImages::uniform(count, 900.0, 600.0), &Config::default())
}

fn session_with(count: usize, config: &Config) -> AnnotationSession<StaticImages> {
    AnnotationSession::new(StaticImages::uniform(count, 900.0, 600.0), config)
}

fn draw(session: &mut AnnotationSession<StaticImages>, from: (f64, f64), to: (f64, f64)) {
    session.handle_input(PointerEvent::down(from.0, from.1));
    session.handle_input(PointerEvent::moved(to.0, to.1));
    session.handle_input(PointerEvent::up(to.0, to.1));
}

fn record_navigation(bus: &Arc<EventBus>) -> Arc<Mutex<Vec<NavigationEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Navigation]),
        move |event| {
            if let AppEvent::Navigation(event) = event {
                sink.lock().push(event);
            }
        },
    );
    seen
}

#[test]
fn test_saved_image_survives_round_trip() {
    let mut session = session(2);
    draw(&mut session, (0.0, 0.0), (50.0, 50.0));
    session.save();

    assert!(matches!(session.next(), Ok(NavigationOutcome::Moved { from: 0, to: 1 })));
    assert!(session.rectangles().is_empty());
    session.previous().expect("navigate back");

    let rects = session.rectangles();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].corners(), (0.0, 0.0, 50.0, 50.0));
    assert_eq!(session.save_state(), SaveState::Saved);
}

#[test]
fn test_unsaved_edits_are_dropped_with_warning() {
    let mut session = session(2);
    let seen = record_navigation(session.bus());

    draw(&mut session, (0.0, 0.0), (50.0, 50.0));
    session.save();
    draw(&mut session, (100.0, 100.0), (200.0, 200.0));
    assert_eq!(session.save_state(), SaveState::Unsaved);

    session.next().expect("warn policy navigates");
    assert_eq!(session.save_state(), SaveState::Untouched);
    session.previous().expect("navigate back");

    assert_eq!(session.rectangles().len(), 1);
    let events = seen.lock().clone();
    assert_eq!(
        events[0],
        NavigationEvent::UnsavedWarning {
            image_index: 0,
            direction: Some(Direction::Next),
            blocked: false,
        }
    );
    assert_eq!(events[1], NavigationEvent::ImageChanged { from: 0, to: 1 });
    assert_eq!(events.len(), 3);
}

#[test]
fn test_block_policy_refuses_navigation() {
    let mut config = Config::default();
    config.navigation.unsaved = UnsavedPolicy::Block;
    let mut session = session_with(3, &config);

    draw(&mut session, (0.0, 0.0), (50.0, 50.0));
    let err = session.next().expect_err("blocked");
    assert!(err.is_unsaved_changes());
    assert_eq!(session.image_index(), 0);
    assert_eq!(session.rectangles().len(), 1);

    session.discard_changes();
    assert!(session.rectangles().is_empty());
    assert!(matches!(
        session.next(),
        Ok(NavigationOutcome::Moved { from: 0, to: 1 })
    ));
}

#[test]
fn test_block_policy_released_by_save() {
    let mut config = Config::default();
    config.navigation.unsaved = UnsavedPolicy::Block;
    let mut session = session_with(2, &config);

    draw(&mut session, (0.0, 0.0), (50.0, 50.0));
    assert!(session.next().is_err());
    session.save();
    assert!(session.next().is_ok());
    assert_eq!(session.image_index(), 1);
}

#[test]
fn test_clamp_policy_stays_at_edges() {
    let mut session = session(2);
    assert!(matches!(session.previous(), Ok(NavigationOutcome::AtEdge)));
    session.next().expect("forward");
    assert!(matches!(session.next(), Ok(NavigationOutcome::AtEdge)));
    assert_eq!(session.image_index(), 1);
}

#[test]
fn test_wrap_policy_applies_both_ways() {
    let mut config = Config::default();
    config.navigation.bounds = BoundsPolicy::Wrap;
    let mut session = session_with(3, &config);

    assert!(matches!(
        session.previous(),
        Ok(NavigationOutcome::Moved { from: 0, to: 2 })
    ));
    assert!(matches!(
        session.next(),
        Ok(NavigationOutcome::Moved { from: 2, to: 0 })
    ));
}

#[test]
fn test_single_image_wrap_is_edge() {
    let mut config = Config::default();
    config.navigation.bounds = BoundsPolicy::Wrap;
    let mut session = session_with(1, &config);
    assert!(matches!(session.next(), Ok(NavigationOutcome::AtEdge)));
}

#[test]
fn test_switch_out_of_range() {
    let mut session = session(2);
    let err = session.switch_image(5).expect_err("out of range");
    assert!(err.is_session_error());
    assert_eq!(err.to_string(), "Image index 5 out of range (0..2)");

    let mut empty = session_with(0, &Config::default());
    assert!(empty.next().is_err());
}

#[test]
fn test_switch_resets_transients() {
    let mut session = session(2);
    draw(&mut session, (0.0, 0.0), (50.0, 50.0));
    session.save();

    let first = session.canvas().rect_store.ids()[0];
    session.toggle_selection(first);
    session.handle_input(PointerEvent::down(300.0, 300.0));
    assert!(session.canvas().is_drawing());
    session.begin_drag(first);

    session.switch_image(1).expect("switch");
    session.switch_image(0).expect("switch back");
    assert_eq!(session.selected_id(), None);
    assert!(!session.canvas().is_interacting());
    assert!(!session.canvas().is_drawing());
}

#[test]
fn test_loading_indicator_and_refresh() {
    let images = StaticImages::new(vec![ImageInfo::pending(), ImageInfo::ready(1800.0, 1200.0)]);
    let mut session = AnnotationSession::new(images, &Config::default());
    assert!(session.is_image_loading());
    assert_eq!(session.fit_scale().scale, 600.0);

    session.images_mut().set_info(0, ImageInfo::ready(450.0, 300.0));
    session.refresh_image();
    assert!(!session.is_image_loading());
    assert_eq!(session.fit_scale().scale, 2.0);

    session.next().expect("next");
    assert_eq!(session.fit_scale().scale, 0.5);
}

#[test]
fn test_position_labels() {
    let mut session = session(3);
    assert_eq!(session.position_label(), "Image 1/3");
    assert_eq!(session.image_title(), "Image-1");
    session.switch_image(2).expect("switch");
    assert_eq!(session.position_label(), "Image 3/3");
    assert_eq!(session.image_title(), "Image-3");
}
