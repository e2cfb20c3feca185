use egui::{Pos2, Rect, Vec2};

use crate::shape::Shape;

/// Padding added around the shapes when framing the view
pub const VIEW_PADDING: f32 = 30.0;

/// Tight box around every point and vertex of `shapes`.
///
/// Centre-anchored kinds (circle, ellipse) also contribute their half extents
/// around the centre. Returns `Rect::NOTHING` when there is nothing to scan.
pub fn compute_bounds<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Rect {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    let mut include = |point: Pos2| {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    };

    for shape in shapes {
        let points = shape.geometry.points();
        for point in points.iter().chain(shape.geometry.vertices()) {
            include(*point);
        }
        if let (Some(extent), Some(center)) = (shape.geometry.extent(), points.first()) {
            let half = extent / 2.0;
            include(*center - half);
            include(*center + half);
        }
    }

    if min_x > max_x || min_y > max_y {
        return Rect::NOTHING;
    }
    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}

/// Coordinate frame for display and export: the shape bounds grown by
/// `padding` on every side, or a frame of `empty_size` at the origin when
/// there are no shapes.
pub fn view_box<'a>(shapes: impl IntoIterator<Item = &'a Shape>, padding: f32, empty_size: Vec2) -> Rect {
    let bounds = compute_bounds(shapes);
    if bounds == Rect::NOTHING {
        return Rect::from_min_size(Pos2::ZERO, empty_size);
    }
    bounds.expand(padding)
}
