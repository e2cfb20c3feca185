use egui::{Pos2, Rect, Vec2};

use crate::shape::{Geometry, Shape, TextGeometry};

/// Maximum perpendicular distance from a line that still counts as a hit
pub const LINE_HIT_TOLERANCE: f32 = 5.0;

// Glyph metric approximation used for text hit boxes
const TEXT_CHAR_WIDTH_FACTOR: f32 = 0.6;
const TEXT_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Whether `pos` falls on or inside `shape`
pub fn contains_point(shape: &Shape, pos: Pos2) -> bool {
    match &shape.geometry {
        Geometry::Text(text) => text_hit_box(text).contains(pos),
        Geometry::Line { start, end } => distance_to_line(pos, *start, *end) < LINE_HIT_TOLERANCE,
        Geometry::Circle { center, diameter } => {
            point_in_ellipse(pos, *center, Vec2::splat(*diameter / 2.0))
        }
        Geometry::Ellipse { center, width, height } => {
            point_in_ellipse(pos, *center, Vec2::new(*width / 2.0, *height / 2.0))
        }
        Geometry::Polygon { vertices, .. } => point_in_polygon(pos, vertices),
    }
}

/// Approximate box covered by a text shape, centred on its anchor
pub fn text_hit_box(text: &TextGeometry) -> Rect {
    let width = text.content.chars().count() as f32 * text.font_size * TEXT_CHAR_WIDTH_FACTOR;
    let height = text.font_size * TEXT_LINE_HEIGHT_FACTOR;
    Rect::from_center_size(text.anchor, Vec2::new(width, height))
}

/// Perpendicular distance from `point` to the infinite line through `a` and `b`.
///
/// Not clamped to the segment: colinear points past either endpoint are at
/// distance zero. Falls back to the distance to `a` when the endpoints coincide.
pub fn distance_to_line(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let line = b - a;
    let length = line.length();
    if length == 0.0 {
        return point.distance(a);
    }
    let to_point = point - a;
    (line.x * to_point.y - line.y * to_point.x).abs() / length
}

fn point_in_ellipse(pos: Pos2, center: Pos2, radii: Vec2) -> bool {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return false;
    }
    let dx = (pos.x - center.x) / radii.x;
    let dy = (pos.y - center.y) / radii.y;
    dx * dx + dy * dy <= 1.0
}

/// Even-odd ray casting over the closed polygon `vertices`
pub fn point_in_polygon(pos: Pos2, vertices: &[Pos2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > pos.y) != (vj.y > pos.y)
            && pos.x < (vj.x - vi.x) * (pos.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn distance_is_unclamped() {
        let d = distance_to_line(pos2(300.0, 0.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert_eq!(d, 0.0);
    }

    #[test]
    fn coincident_endpoints_measure_to_the_point() {
        let d = distance_to_line(pos2(3.0, 4.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // U shape opening upwards
        let u = [
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(10.0, 20.0),
            pos2(20.0, 20.0),
            pos2(20.0, 0.0),
            pos2(30.0, 0.0),
            pos2(30.0, 30.0),
            pos2(0.0, 30.0),
        ];
        assert!(point_in_polygon(pos2(5.0, 10.0), &u));
        assert!(!point_in_polygon(pos2(15.0, 10.0), &u));
        assert!(point_in_polygon(pos2(15.0, 25.0), &u));
    }

    #[test]
    fn degenerate_polygon_never_hits() {
        assert!(!point_in_polygon(pos2(0.0, 0.0), &[pos2(0.0, 0.0), pos2(1.0, 1.0)]));
    }
}
