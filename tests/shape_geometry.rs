use egui::{Pos2, Rect, Vec2, pos2, vec2};
use figure_editor::geometry::{compute_bounds, contains_point};
use figure_editor::shape::factory::{ShapeDefaults, create_shape};
use figure_editor::transform::{self, Cardinal, Handle};
use figure_editor::{Geometry, Shape, ShapeKind, ShapeStyle};

fn create(kind: ShapeKind, anchor: Pos2) -> Shape {
    create_shape(kind, anchor, "label", &ShapeDefaults::default())
}

fn assert_close(a: Pos2, b: Pos2) {
    assert!((a - b).length() < 1e-3, "{:?} != {:?}", a, b);
}

#[test]
fn test_factory_geometry() {
    let anchor = pos2(10.0, 20.0);

    let rect = create(ShapeKind::Rectangle, anchor);
    assert_eq!(
        rect.geometry.vertices(),
        &[pos2(10.0, 20.0), pos2(110.0, 20.0), pos2(110.0, 120.0), pos2(10.0, 120.0)]
    );

    let triangle = create(ShapeKind::Triangle, anchor);
    assert_eq!(
        triangle.geometry.vertices(),
        &[pos2(10.0, 20.0), pos2(110.0, 120.0), pos2(-90.0, 120.0)]
    );

    let right = create(ShapeKind::RightTriangle, anchor);
    assert_eq!(
        right.geometry.vertices(),
        &[pos2(10.0, 20.0), pos2(10.0, 120.0), pos2(110.0, 120.0)]
    );

    let rhombus = create(ShapeKind::Rhombus, Pos2::ZERO);
    assert_eq!(
        rhombus.geometry.vertices(),
        &[pos2(0.0, -50.0), pos2(50.0, 0.0), pos2(0.0, 50.0), pos2(-50.0, 0.0)]
    );

    let trapezoid = create(ShapeKind::Trapezoid, Pos2::ZERO);
    assert_eq!(
        trapezoid.geometry.vertices(),
        &[pos2(25.0, 0.0), pos2(75.0, 0.0), pos2(100.0, 100.0), pos2(0.0, 100.0)]
    );

    let circle = create(ShapeKind::Circle, anchor);
    assert_eq!(circle.geometry.points(), vec![anchor]);
    assert_eq!(circle.geometry.extent(), Some(vec2(100.0, 100.0)));

    let ellipse = create(ShapeKind::Ellipse, anchor);
    assert_eq!(ellipse.geometry.extent(), Some(vec2(150.0, 100.0)));

    let line = create(ShapeKind::Line, anchor);
    assert_eq!(line.geometry.points(), vec![anchor, anchor]);

    let text = create(ShapeKind::Text, anchor);
    let text = text.text().unwrap();
    assert_eq!(text.content, "label");
    assert_eq!(text.font_size, 16.0);
    assert_eq!(text.font_family, "Arial");
}

#[test]
fn test_ids_are_unique() {
    let a = create(ShapeKind::Square, Pos2::ZERO);
    let b = create(ShapeKind::Square, Pos2::ZERO);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_circle_contains_its_center() {
    for diameter in [0.5, 1.0, 100.0] {
        let circle = Shape::new(
            Geometry::Circle { center: pos2(3.0, 4.0), diameter },
            ShapeStyle::default(),
        );
        assert!(contains_point(&circle, pos2(3.0, 4.0)));
    }
}

#[test]
fn test_rectangle_hit_testing() {
    let rect = create(ShapeKind::Rectangle, Pos2::ZERO);
    assert!(contains_point(&rect, pos2(50.0, 50.0)));
    assert!(!contains_point(&rect, pos2(150.0, 50.0)));
}

#[test]
fn test_ellipse_hit_testing() {
    let ellipse = create(ShapeKind::Ellipse, Pos2::ZERO);
    assert!(contains_point(&ellipse, pos2(70.0, 0.0)));
    assert!(!contains_point(&ellipse, pos2(0.0, 60.0)));
    assert!(!contains_point(&ellipse, pos2(60.0, 40.0)));
}

#[test]
fn test_text_hit_box() {
    // "label": 5 chars * 16 * 0.6 = 48 wide, 19.2 tall
    let text = create(ShapeKind::Text, pos2(100.0, 100.0));
    assert!(contains_point(&text, pos2(123.0, 109.0)));
    assert!(!contains_point(&text, pos2(125.0, 100.0)));
    assert!(!contains_point(&text, pos2(100.0, 110.0)));
}

#[test]
fn test_line_hit_is_not_clamped_to_segment() {
    let line = Shape::new(
        Geometry::Line { start: pos2(0.0, 0.0), end: pos2(10.0, 0.0) },
        ShapeStyle::default(),
    );
    assert!(contains_point(&line, pos2(5.0, 4.9)));
    assert!(!contains_point(&line, pos2(5.0, 5.0)));
    assert!(contains_point(&line, pos2(500.0, 0.0)));
}

#[test]
fn test_drag_round_trip() {
    let delta = vec2(37.5, -12.25);
    for kind in ShapeKind::ALL {
        let original = create(kind, pos2(3.0, 7.0));
        let mut shape = original.clone();
        transform::translate(&mut shape, delta);
        assert_ne!(shape, original);
        transform::translate(&mut shape, -delta);

        let restored = shape.geometry.points().into_iter().chain(shape.geometry.vertices().iter().copied());
        let expected = original.geometry.points().into_iter().chain(original.geometry.vertices().iter().copied());
        for (a, b) in restored.zip(expected) {
            assert_close(a, b);
        }
    }
}

#[test]
fn test_circle_resize_then_bounds() {
    let mut circle = Shape::new(
        Geometry::Circle { center: Pos2::ZERO, diameter: 50.0 },
        ShapeStyle::default(),
    );
    transform::resize(&mut circle, Handle::Cardinal(Cardinal::East), pos2(100.0, 0.0)).unwrap();
    assert_eq!(circle.geometry.extent(), Some(vec2(200.0, 200.0)));

    let bounds = compute_bounds([&circle]);
    assert_eq!(bounds, Rect::from_min_max(pos2(-100.0, -100.0), pos2(100.0, 100.0)));
}

#[test]
fn test_circle_vertical_handle_controls_both_axes() {
    let mut circle = create(ShapeKind::Circle, Pos2::ZERO);
    transform::resize(&mut circle, Handle::Cardinal(Cardinal::North), pos2(999.0, -30.0)).unwrap();
    assert_eq!(circle.geometry.extent(), Some(vec2(60.0, 60.0)));
}

#[test]
fn test_ellipse_handles_resize_one_axis() {
    let mut ellipse = create(ShapeKind::Ellipse, Pos2::ZERO);
    transform::resize(&mut ellipse, Handle::Cardinal(Cardinal::South), pos2(0.0, 10.0)).unwrap();
    assert_eq!(ellipse.geometry.extent(), Some(vec2(150.0, 20.0)));
    transform::resize(&mut ellipse, Handle::Cardinal(Cardinal::West), pos2(-40.0, 99.0)).unwrap();
    assert_eq!(ellipse.geometry.extent(), Some(vec2(80.0, 20.0)));
}

#[test]
fn test_polygon_vertex_resize_moves_one_vertex() {
    let mut square = create(ShapeKind::Square, Pos2::ZERO);
    transform::resize(&mut square, Handle::Vertex(2), pos2(150.0, 130.0)).unwrap();
    assert_eq!(
        square.geometry.vertices(),
        &[pos2(0.0, 0.0), pos2(100.0, 0.0), pos2(150.0, 130.0), pos2(0.0, 100.0)]
    );
}

#[test]
fn test_mismatched_handle_is_rejected() {
    let mut line = create(ShapeKind::Line, Pos2::ZERO);
    assert!(transform::resize(&mut line, Handle::Vertex(0), Pos2::ZERO).is_err());
    assert!(transform::resize(&mut line, Handle::Endpoint(2), Pos2::ZERO).is_err());

    let mut text = create(ShapeKind::Text, Pos2::ZERO);
    assert!(transform::resize(&mut text, Handle::Cardinal(Cardinal::East), Pos2::ZERO).is_err());
}

#[test]
fn test_handle_positions() {
    let circle = create(ShapeKind::Circle, pos2(50.0, 50.0));
    let handles = transform::handles(&circle);
    assert!(handles.contains(&(Handle::Cardinal(Cardinal::North), pos2(50.0, 0.0))));
    assert!(handles.contains(&(Handle::Cardinal(Cardinal::East), pos2(100.0, 50.0))));
    assert_eq!(
        transform::handle_at(&circle, pos2(2.0, 50.0), 5.0),
        Some(Handle::Cardinal(Cardinal::West))
    );
    assert_eq!(transform::handle_at(&circle, pos2(50.0, 50.0), 5.0), None);
}

#[test]
fn test_bounds_cover_all_shapes() {
    let shapes = [
        create(ShapeKind::Square, pos2(0.0, 0.0)),
        create(ShapeKind::Circle, pos2(300.0, 50.0)),
        create(ShapeKind::Text, pos2(-20.0, 400.0)),
    ];
    let bounds = compute_bounds(shapes.iter());
    assert_eq!(bounds, Rect::from_min_max(pos2(-20.0, 0.0), pos2(350.0, 400.0)));
    assert_eq!(bounds.size(), Vec2::new(370.0, 400.0));
}
