use annokit_canvas::{
    normalize, scale_factor, to_display_space, to_original_space, FitScale, Point, Rectangle,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -5000.0..5000.0f64
}

proptest! {
    #[test]
    fn normalize_is_symmetric(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let a = Point::new(x1, y1);
        let b = Point::new(x2, y2);
        prop_assert_eq!(normalize(a, b), normalize(b, a));
    }

    #[test]
    fn normalize_has_non_negative_size(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let bounds = normalize(Point::new(x1, y1), Point::new(x2, y2));
        prop_assert!(bounds.width >= 0.0);
        prop_assert!(bounds.height >= 0.0);
        prop_assert!(bounds.x <= x1 && bounds.x <= x2);
    }

    #[test]
    fn original_space_round_trip(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        image_w in 1.0..8000.0f64, image_h in 1.0..8000.0f64,
    ) {
        let scale = scale_factor(image_w, image_h, 900.0, 600.0);
        let rect = Rectangle::new(x1, y1, x2, y2);
        let back = to_display_space(&to_original_space(&rect, scale), scale);

        let tolerance = 1e-6 * (1.0 + x1.abs().max(y1.abs()).max(x2.abs()).max(y2.abs()));
        prop_assert!((back.x1 - x1).abs() < tolerance);
        prop_assert!((back.y1 - y1).abs() < tolerance);
        prop_assert!((back.x2 - x2).abs() < tolerance);
        prop_assert!((back.y2 - y2).abs() < tolerance);
    }

    #[test]
    fn fitted_image_stays_inside_box(image_w in 1.0..8000.0f64, image_h in 1.0..8000.0f64) {
        let fit = FitScale::compute(Some((image_w, image_h)), 900.0, 600.0);
        prop_assert!(fit.stage_width <= 900.0 + 1e-9);
        prop_assert!(fit.stage_height <= 600.0 + 1e-9);
    }
}

#[test]
fn test_unready_image_uses_fallback() {
    let fit = FitScale::compute(None, 900.0, 600.0);
    assert_eq!(fit.scale_width, 900.0);
    assert_eq!(fit.scale_height, 600.0);
    assert_eq!(fit.scale, 600.0);
}

#[test]
fn test_invalid_scale_leaves_coordinates() {
    let rect = Rectangle::new(10.0, 10.0, 20.0, 20.0);
    assert_eq!(to_original_space(&rect, 0.0), rect);
    assert_eq!(to_original_space(&rect, f64::INFINITY), rect);
}
