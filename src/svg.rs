//! Standalone SVG export of a figure.

use egui::{Pos2, Rect};

use crate::shape::style::hex_color;
use crate::shape::{Geometry, Shape, ShapeStyle, TextGeometry};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialize `shapes` in z-order into an SVG document framed by `view_box`
pub fn to_svg<'a>(shapes: impl IntoIterator<Item = &'a Shape>, view_box: Rect) -> String {
    let mut svg = format!(
        r#"<svg xmlns="{}" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        SVG_NAMESPACE,
        view_box.min.x,
        view_box.min.y,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height(),
    );
    svg.push('\n');

    for shape in shapes {
        svg.push_str("  ");
        svg.push_str(&shape_element(shape));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// The SVG element for a single shape
pub fn shape_element(shape: &Shape) -> String {
    let attrs = presentation_attributes(&shape.style);
    match &shape.geometry {
        Geometry::Line { start, end } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            start.x, start.y, end.x, end.y, attrs
        ),
        Geometry::Circle { center, diameter } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            center.x,
            center.y,
            diameter / 2.0,
            attrs
        ),
        Geometry::Ellipse { center, width, height } => format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}/>"#,
            center.x,
            center.y,
            width / 2.0,
            height / 2.0,
            attrs
        ),
        Geometry::Polygon { polygon, vertices } if polygon.is_box() => {
            let rect = box_rect(vertices);
            format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                rect.min.x,
                rect.min.y,
                rect.width(),
                rect.height(),
                attrs
            )
        }
        Geometry::Polygon { vertices, .. } => {
            let points = vertices
                .iter()
                .map(|v| format!("{},{}", v.x, v.y))
                .collect::<Vec<_>>()
                .join(" ");
            format!(r#"<polygon points="{}" {}/>"#, points, attrs)
        }
        Geometry::Text(text) => text_element(text, &shape.style),
    }
}

/// Box spanned by the first and opposite (third) vertex. Missing vertices
/// collapse to the origin vertex.
fn box_rect(vertices: &[Pos2]) -> Rect {
    let origin = vertices.first().copied().unwrap_or(Pos2::ZERO);
    let opposite = vertices.get(2).copied().unwrap_or(origin);
    Rect::from_two_pos(origin, opposite)
}

fn presentation_attributes(style: &ShapeStyle) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}""#,
        hex_color(style.stroke_color),
        style.stroke_width
    );
    if let Some(dasharray) = style.dash.dasharray() {
        attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dasharray));
    }
    if style.has_fill() {
        attrs.push_str(&format!(
            r#" fill="{}" fill-opacity="{}""#,
            hex_color(style.fill),
            style.opacity.clamp(0.0, 1.0)
        ));
    } else {
        attrs.push_str(r#" fill="none""#);
    }
    attrs
}

fn text_element(text: &TextGeometry, style: &ShapeStyle) -> String {
    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-family="{}" fill="{}">{}</text>"#,
        text.anchor.x,
        text.anchor.y,
        text.font_size,
        escape_xml(&text.font_family),
        hex_color(style.stroke_color),
        escape_xml(&text.content)
    )
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{DashPattern, PolygonKind};
    use egui::pos2;

    #[test]
    fn solid_dash_is_omitted() {
        let attrs = presentation_attributes(&ShapeStyle::default());
        assert!(!attrs.contains("stroke-dasharray"));
        assert!(attrs.contains(r#"fill="none""#));

        let dashed = ShapeStyle { dash: DashPattern::Dashed, ..ShapeStyle::default() };
        assert!(presentation_attributes(&dashed).contains(r#"stroke-dasharray="5,5""#));
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn rectangle_exports_as_rect() {
        let shape = Shape::new(
            Geometry::Polygon {
                polygon: PolygonKind::Rectangle,
                vertices: vec![pos2(10.0, 20.0), pos2(110.0, 20.0), pos2(110.0, 70.0), pos2(10.0, 70.0)],
            },
            ShapeStyle::default(),
        );
        let element = shape_element(&shape);
        assert!(element.starts_with(r#"<rect x="10" y="20" width="100" height="50""#), "{element}");
    }

    #[test]
    fn malformed_box_collapses_to_zero_size() {
        let rect = box_rect(&[pos2(5.0, 5.0)]);
        assert_eq!(rect.size(), egui::Vec2::ZERO);
    }
}
