use std::sync::Arc;

use annokit_canvas::{
    AnnotationSession, MoveRect, PointerEvent, RectId, ResizeRect, SaveState, StaticImages,
    TransformCommand,
};
use annokit_core::{AppEvent, DocumentEvent, EventBus, EventBusConfig, EventCategory};
use annokit_settings::Config;

fn session() -> AnnotationSession<StaticImages> {
    AnnotationSession::new(StaticImages::uniform(2, 1800.0, 1200.0), &Config::default())
}

fn draw(session: &mut AnnotationSession<StaticImages>, from: (f64, f64), to: (f64, f64)) -> RectId {
    session.handle_input(PointerEvent::down(from.0, from.1));
    session.handle_input(PointerEvent::moved(to.0, to.1));
    session
        .handle_input(PointerEvent::up(to.0, to.1))
        .expect("rectangle created")
}

fn status_text(session: &AnnotationSession<StaticImages>) -> Option<String> {
    session.status().current().map(|message| message.text)
}

#[test]
fn test_every_edit_marks_unsaved() {
    let mut session = session();
    assert_eq!(session.save_state(), SaveState::Untouched);

    let id = draw(&mut session, (0.0, 0.0), (40.0, 40.0));
    assert_eq!(session.save_state(), SaveState::Unsaved);

    session.save();
    assert_eq!(session.save_state(), SaveState::Saved);
    session.toggle_selection(id);
    assert_eq!(session.save_state(), SaveState::Saved);

    session.rename(id, "cat");
    assert_eq!(session.save_state(), SaveState::Unsaved);

    session.save();
    session.toggle_hidden(id);
    assert_eq!(session.save_state(), SaveState::Unsaved);

    session.save();
    assert!(session.begin_drag(id));
    session.commit_transform(&TransformCommand::Move(MoveRect { id, x: 5.0, y: 5.0 }));
    assert_eq!(session.save_state(), SaveState::Unsaved);
}

#[test]
fn test_stale_edits_change_nothing() {
    let mut session = session();
    let id = draw(&mut session, (0.0, 0.0), (40.0, 40.0));
    session.save();

    assert!(session.delete(id));
    session.save();

    assert!(!session.delete(id));
    assert!(!session.rename(id, "ghost"));
    assert_eq!(session.toggle_hidden(id), None);
    assert!(!session.commit_transform(&TransformCommand::Resize(ResizeRect {
        id,
        x: 0.0,
        y: 0.0,
        scale_x: 2.0,
        scale_y: 2.0,
    })));
    assert_eq!(session.save_state(), SaveState::Saved);
}

#[test]
fn test_save_is_a_snapshot() {
    let mut session = session();
    let id = draw(&mut session, (0.0, 0.0), (40.0, 40.0));
    session.save();
    session.rename(id, "after save");

    let saved = session.saved_rectangles(0).expect("saved");
    assert_eq!(saved[0].name, None);
    assert_eq!(session.saved_rectangles(1), None);
}

#[test]
fn test_delete_reports_label() {
    let mut session = session();
    draw(&mut session, (0.0, 0.0), (40.0, 40.0));
    let second = draw(&mut session, (50.0, 50.0), (90.0, 90.0));

    assert!(session.delete(second));
    assert_eq!(status_text(&session).as_deref(), Some("Deleted Selection-2"));
    assert_eq!(session.rectangles().len(), 1);
}

#[test]
fn test_status_texts() {
    let mut session = session();
    draw(&mut session, (0.0, 0.0), (40.0, 40.0));

    session.save();
    assert_eq!(status_text(&session).as_deref(), Some("Saved!"));
    session.clear_all();
    assert_eq!(status_text(&session).as_deref(), Some("Cleared all Annotations!"));
    session.log_annotations();
    assert_eq!(status_text(&session).as_deref(), Some("Logged coordinates to console!"));

    session.next().expect("next");
    assert_eq!(
        status_text(&session).as_deref(),
        Some("Please save your changes before moving to the next image.")
    );
}

#[test]
fn test_document_events_in_history() {
    let bus = Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    }));
    let mut session = AnnotationSession::with_bus(
        StaticImages::uniform(1, 900.0, 600.0),
        &Config::default(),
        Arc::clone(&bus),
    );

    let id = draw(&mut session, (0.0, 0.0), (40.0, 40.0));
    session.rename(id, "box");
    session.delete(id);
    session.save();
    session.clear_all();

    let documents: Vec<DocumentEvent> = bus
        .history(None)
        .into_iter()
        .filter(|event| event.category() == EventCategory::Document)
        .filter_map(|event| match event {
            AppEvent::Document(event) => Some(event),
            _ => None,
        })
        .collect();
    assert_eq!(
        documents,
        vec![
            DocumentEvent::Deleted {
                name: "box".to_string()
            },
            DocumentEvent::Saved {
                image_index: 0,
                count: 0
            },
            DocumentEvent::Cleared { image_index: 0 },
        ]
    );
}

#[test]
fn test_export_uses_original_pixels() {
    let mut session = session();
    draw(&mut session, (10.0, 20.0), (110.0, 70.0));

    let export = session.log_annotations();
    assert_eq!(export.original_width, Some(1800.0));
    assert_eq!(export.original_height, Some(1200.0));
    assert_eq!(export.scale_width, 0.5);
    assert_eq!(export.scale_height, 0.5);
    assert_eq!(
        export.original_size_rectangles[0].corners(),
        (20.0, 40.0, 220.0, 140.0)
    );
}

#[test]
fn test_render_list_and_handles() {
    let mut session = session();
    let first = draw(&mut session, (0.0, 0.0), (40.0, 40.0));
    let second = draw(&mut session, (60.0, 60.0), (20.0, 100.0));

    session.select_on_canvas(second);
    let rendered = session.canvas_rectangles();
    assert_eq!(rendered.len(), 2);
    assert!(!rendered[0].show_handles);
    assert!(rendered[1].show_handles);
    assert_eq!(rendered[1].bounds.x, 20.0);
    assert_eq!(rendered[1].bounds.height, 40.0);

    session.toggle_hidden(first);
    assert_eq!(session.canvas_rectangles().len(), 1);
    assert_eq!(session.list_entries().len(), 2);
}
