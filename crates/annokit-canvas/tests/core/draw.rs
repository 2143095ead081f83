use annokit_canvas::{Canvas, Point, PointerEvent, TouchEvent, TouchPhase};

fn drag(canvas: &mut Canvas, from: (f64, f64), to: (f64, f64)) {
    canvas.handle_input(&PointerEvent::down(from.0, from.1).into());
    canvas.handle_input(&PointerEvent::moved(to.0, to.1).into());
    canvas.handle_input(&PointerEvent::up(to.0, to.1).into());
}

#[test]
fn test_small_drag_creates_nothing() {
    let mut canvas = Canvas::new();
    drag(&mut canvas, (0.0, 0.0), (5.0, 5.0));
    assert!(canvas.is_empty());
    assert!(!canvas.is_drawing());
}

#[test]
fn test_drag_creates_one_rectangle() {
    let mut canvas = Canvas::new();
    drag(&mut canvas, (0.0, 0.0), (11.0, 11.0));

    let rects = canvas.rect_store.rectangles();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].width(), 11.0);
    assert_eq!(rects[0].height(), 11.0);
}

#[test]
fn test_exact_threshold_is_discarded() {
    let mut canvas = Canvas::new();
    drag(&mut canvas, (0.0, 0.0), (10.0, 10.0));
    assert!(canvas.is_empty());
}

#[test]
fn test_preview_follows_pointer() {
    let mut canvas = Canvas::new();
    canvas.handle_input(&PointerEvent::down(40.0, 40.0).into());
    assert_eq!(canvas.preview(), None);

    canvas.handle_input(&PointerEvent::moved(10.0, 20.0).into());
    let preview = canvas.preview().expect("previewing");
    assert_eq!((preview.x, preview.y, preview.width, preview.height), (10.0, 20.0, 30.0, 20.0));
}

#[test]
fn test_touch_drag() {
    let mut canvas = Canvas::new();
    canvas.set_container_origin(Point::new(5.0, 5.0));

    let touch = |phase: TouchPhase, at: Point| TouchEvent {
        phase,
        touches: if phase == TouchPhase::End { vec![] } else { vec![at] },
        changed_touches: vec![at],
    };
    canvas.handle_input(&touch(TouchPhase::Start, Point::new(5.0, 5.0)).into());
    canvas.handle_input(&touch(TouchPhase::Move, Point::new(35.0, 45.0)).into());
    canvas.handle_input(&touch(TouchPhase::End, Point::new(55.0, 65.0)).into());

    let rects = canvas.rect_store.rectangles();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].corners(), (0.0, 0.0, 50.0, 60.0));
}
