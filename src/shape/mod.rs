use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod factory;
pub mod style;

pub use style::{DashPattern, ShapeStyle, StyleChange};

/// Stable identity of a shape, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every kind of shape the editor can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Circle,
    Ellipse,
    Triangle,
    RightTriangle,
    Rectangle,
    Square,
    Rhombus,
    Parallelogram,
    Trapezoid,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
        ShapeKind::RightTriangle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Rhombus,
        ShapeKind::Parallelogram,
        ShapeKind::Trapezoid,
        ShapeKind::Text,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
            ShapeKind::RightTriangle => "right-triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Text => "text",
        }
    }

    /// The polygon flavour for vertex-anchored kinds
    pub fn polygon_kind(&self) -> Option<PolygonKind> {
        match self {
            ShapeKind::Triangle => Some(PolygonKind::Triangle),
            ShapeKind::RightTriangle => Some(PolygonKind::RightTriangle),
            ShapeKind::Rectangle => Some(PolygonKind::Rectangle),
            ShapeKind::Square => Some(PolygonKind::Square),
            ShapeKind::Rhombus => Some(PolygonKind::Rhombus),
            ShapeKind::Parallelogram => Some(PolygonKind::Parallelogram),
            ShapeKind::Trapezoid => Some(PolygonKind::Trapezoid),
            ShapeKind::Line | ShapeKind::Circle | ShapeKind::Ellipse | ShapeKind::Text => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolygonKind {
    Triangle,
    RightTriangle,
    Rectangle,
    Square,
    Rhombus,
    Parallelogram,
    Trapezoid,
}

impl PolygonKind {
    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            PolygonKind::Triangle => ShapeKind::Triangle,
            PolygonKind::RightTriangle => ShapeKind::RightTriangle,
            PolygonKind::Rectangle => ShapeKind::Rectangle,
            PolygonKind::Square => ShapeKind::Square,
            PolygonKind::Rhombus => ShapeKind::Rhombus,
            PolygonKind::Parallelogram => ShapeKind::Parallelogram,
            PolygonKind::Trapezoid => ShapeKind::Trapezoid,
        }
    }

    /// Rectangles and squares export as axis-aligned boxes
    pub fn is_box(&self) -> bool {
        matches!(self, PolygonKind::Rectangle | PolygonKind::Square)
    }
}

/// Text content and font of a text shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGeometry {
    pub anchor: Pos2,
    pub content: String,
    pub font_size: f32,
    pub font_family: String,
}

/// Kind-specific geometry. Point-anchored kinds carry their anchor points,
/// polygon kinds carry a closed vertex list in factory winding order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Line { start: Pos2, end: Pos2 },
    Circle { center: Pos2, diameter: f32 },
    Ellipse { center: Pos2, width: f32, height: f32 },
    Polygon { polygon: PolygonKind, vertices: Vec<Pos2> },
    Text(TextGeometry),
}

impl Geometry {
    /// Anchor points of point-anchored kinds: both line endpoints, or the
    /// single centre/anchor. Empty for polygons.
    pub fn points(&self) -> Vec<Pos2> {
        match self {
            Geometry::Line { start, end } => vec![*start, *end],
            Geometry::Circle { center, .. } | Geometry::Ellipse { center, .. } => vec![*center],
            Geometry::Text(text) => vec![text.anchor],
            Geometry::Polygon { .. } => Vec::new(),
        }
    }

    /// Polygon vertices; empty for point-anchored kinds
    pub fn vertices(&self) -> &[Pos2] {
        match self {
            Geometry::Polygon { vertices, .. } => vertices,
            _ => &[],
        }
    }

    /// Width and height of centre-anchored kinds
    pub fn extent(&self) -> Option<Vec2> {
        match self {
            Geometry::Circle { diameter, .. } => Some(Vec2::splat(*diameter)),
            Geometry::Ellipse { width, height, .. } => Some(Vec2::new(*width, *height)),
            _ => None,
        }
    }

    /// The point a drag is measured against: the first anchor point or the
    /// first vertex.
    pub fn reference_point(&self) -> Option<Pos2> {
        match self {
            Geometry::Line { start, .. } => Some(*start),
            Geometry::Circle { center, .. } | Geometry::Ellipse { center, .. } => Some(*center),
            Geometry::Text(text) => Some(text.anchor),
            Geometry::Polygon { vertices, .. } => vertices.first().copied(),
        }
    }
}

/// One vector primitive in a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    pub style: ShapeStyle,
    pub geometry: Geometry,
}

impl Shape {
    pub fn new(geometry: Geometry, style: ShapeStyle) -> Self {
        Self {
            id: ShapeId::new(),
            style,
            geometry,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        match &self.geometry {
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Ellipse { .. } => ShapeKind::Ellipse,
            Geometry::Polygon { polygon, .. } => polygon.shape_kind(),
            Geometry::Text(_) => ShapeKind::Text,
        }
    }

    pub fn text(&self) -> Option<&TextGeometry> {
        match &self.geometry {
            Geometry::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextGeometry> {
        match &mut self.geometry {
            Geometry::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Apply a style choice. Returns false when the choice does not apply
    /// to this kind (font size on a non-text shape).
    pub fn apply_style(&mut self, change: StyleChange) -> bool {
        match change {
            StyleChange::StrokeColor(color) => self.style.stroke_color = color,
            StyleChange::StrokeWidth(width) => self.style.stroke_width = width.max(0.0),
            StyleChange::Dash(dash) => self.style.dash = dash,
            StyleChange::Fill(color) => self.style.fill = color,
            StyleChange::Opacity(opacity) => self.style.opacity = opacity.clamp(0.0, 1.0),
            StyleChange::FontSize(size) => match self.text_mut() {
                Some(text) => text.font_size = size.max(1.0),
                None => return false,
            },
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_kinds_round_trip_through_shape_kind() {
        for kind in ShapeKind::ALL {
            if let Some(polygon) = kind.polygon_kind() {
                assert_eq!(polygon.shape_kind(), kind);
            }
        }
    }

    #[test]
    fn opacity_is_clamped() {
        let mut shape = Shape::new(
            Geometry::Circle { center: Pos2::ZERO, diameter: 10.0 },
            ShapeStyle::default(),
        );
        assert!(shape.apply_style(StyleChange::Opacity(3.0)));
        assert_eq!(shape.style.opacity, 1.0);
        assert!(!shape.apply_style(StyleChange::FontSize(20.0)));
    }
}
