use egui::{Pos2, vec2};

use super::{Geometry, PolygonKind, Shape, ShapeKind, ShapeStyle, TextGeometry};

/// Edge length / diameter of a freshly created shape
pub const DEFAULT_SIZE: f32 = 100.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Sizing parameters for new shapes
#[derive(Debug, Clone)]
pub struct ShapeDefaults {
    pub size: f32,
    pub style: ShapeStyle,
    pub font_size: f32,
    pub font_family: String,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            style: ShapeStyle::default(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

/// Create a default-sized shape of `kind` anchored at `anchor`.
///
/// `text` is only read for [`ShapeKind::Text`].
pub fn create_shape(kind: ShapeKind, anchor: Pos2, text: &str, defaults: &ShapeDefaults) -> Shape {
    Shape::new(geometry_for(kind, anchor, text, defaults), defaults.style)
}

fn geometry_for(kind: ShapeKind, anchor: Pos2, text: &str, defaults: &ShapeDefaults) -> Geometry {
    let size = defaults.size;
    if let Some(polygon) = kind.polygon_kind() {
        return Geometry::Polygon {
            polygon,
            vertices: polygon_vertices(polygon, anchor, size),
        };
    }
    match kind {
        ShapeKind::Line => Geometry::Line { start: anchor, end: anchor },
        ShapeKind::Circle => Geometry::Circle { center: anchor, diameter: size },
        ShapeKind::Ellipse => Geometry::Ellipse {
            center: anchor,
            width: size * 1.5,
            height: size,
        },
        _ => Geometry::Text(TextGeometry {
            anchor,
            content: text.to_owned(),
            font_size: defaults.font_size,
            font_family: defaults.font_family.clone(),
        }),
    }
}

fn polygon_vertices(polygon: PolygonKind, anchor: Pos2, size: f32) -> Vec<Pos2> {
    let (w, h) = (size, size);
    match polygon {
        // Clockwise from the anchor
        PolygonKind::Rectangle | PolygonKind::Square => vec![
            anchor,
            anchor + vec2(w, 0.0),
            anchor + vec2(w, h),
            anchor + vec2(0.0, h),
        ],
        // Apex at the anchor
        PolygonKind::Triangle => vec![anchor, anchor + vec2(w, h), anchor + vec2(-w, h)],
        // Right angle at the second vertex
        PolygonKind::RightTriangle => vec![anchor, anchor + vec2(0.0, h), anchor + vec2(w, h)],
        PolygonKind::Parallelogram => vec![
            anchor + vec2(w / 3.0, 0.0),
            anchor + vec2(w, 0.0),
            anchor + vec2(w - w / 3.0, h),
            anchor + vec2(0.0, h),
        ],
        // Diamond centred on the anchor
        PolygonKind::Rhombus => vec![
            anchor + vec2(0.0, -h / 2.0),
            anchor + vec2(w / 2.0, 0.0),
            anchor + vec2(0.0, h / 2.0),
            anchor + vec2(-w / 2.0, 0.0),
        ],
        PolygonKind::Trapezoid => vec![
            anchor + vec2(w / 4.0, 0.0),
            anchor + vec2(w - w / 4.0, 0.0),
            anchor + vec2(w, h),
            anchor + vec2(0.0, h),
        ],
    }
}

/// Follow the pointer while a shape is being drawn.
///
/// Lines move their second endpoint, circles take their diameter from the
/// horizontal delta only, ellipses size each axis independently. Other kinds
/// keep their default size.
pub fn update_draft(shape: &mut Shape, anchor: Pos2, pointer: Pos2) {
    let delta = pointer - anchor;
    match &mut shape.geometry {
        Geometry::Line { end, .. } => *end = pointer,
        Geometry::Circle { diameter, .. } => *diameter = 2.0 * delta.x.abs(),
        Geometry::Ellipse { width, height, .. } => {
            *width = 2.0 * delta.x.abs();
            *height = 2.0 * delta.y.abs();
        }
        Geometry::Polygon { .. } | Geometry::Text(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn factory_produces_exactly_one_representation() {
        let defaults = ShapeDefaults::default();
        for kind in ShapeKind::ALL {
            let shape = create_shape(kind, pos2(10.0, 10.0), "x", &defaults);
            let has_points = !shape.geometry.points().is_empty();
            let has_vertices = !shape.geometry.vertices().is_empty();
            assert!(has_points ^ has_vertices, "{} has both or neither", kind.name());
            assert_eq!(has_vertices, kind.polygon_kind().is_some());
            assert_eq!(shape.kind(), kind);
        }
    }

    #[test]
    fn circle_draft_uses_horizontal_delta_only() {
        let anchor = pos2(50.0, 50.0);
        let mut shape = create_shape(ShapeKind::Circle, anchor, "", &ShapeDefaults::default());
        update_draft(&mut shape, anchor, pos2(20.0, 500.0));
        assert_eq!(shape.geometry.extent(), Some(vec2(60.0, 60.0)));
    }

    #[test]
    fn polygons_ignore_draft_updates() {
        let anchor = pos2(0.0, 0.0);
        let mut shape = create_shape(ShapeKind::Trapezoid, anchor, "", &ShapeDefaults::default());
        let before = shape.clone();
        update_draft(&mut shape, anchor, pos2(300.0, 300.0));
        assert_eq!(shape, before);
    }
}
