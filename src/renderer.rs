use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::editor::Editor;
use crate::shape::{DashPattern, Geometry, Shape, ShapeStyle};
use crate::transform::Handle;

// Segments used to approximate an ellipse outline
const ELLIPSE_SEGMENTS: usize = 64;

const HANDLE_FILL: Color32 = Color32::from_rgb(30, 120, 255);
const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Draws figures with an egui painter.
///
/// Shapes live in editor-local coordinates; `origin` is where the local
/// origin lands on screen.
#[derive(Debug, Clone)]
pub struct Renderer {
    handle_radius: f32,
}

impl Renderer {
    pub fn new(handle_radius: f32) -> Self {
        Self { handle_radius }
    }

    /// Paint the canvas background, every shape in z-order and the handles
    /// of the selected shape
    pub fn render(&self, painter: &Painter, canvas: Rect, editor: &Editor) {
        painter.rect_filled(canvas, 0.0, CANVAS_BACKGROUND);
        let origin = canvas.min.to_vec2();
        for shape in editor.document().shapes() {
            draw_shape(painter, shape, origin);
        }
        self.draw_handles(painter, &editor.selected_handles(), origin);
    }

    pub fn draw_handles(&self, painter: &Painter, handles: &[(Handle, Pos2)], origin: Vec2) {
        for &(handle, pos) in handles {
            let pos = pos + origin;
            match handle {
                Handle::Endpoint(_) | Handle::Cardinal(_) => {
                    painter.circle(pos, self.handle_radius / 2.0, HANDLE_FILL, Stroke::new(1.0, Color32::WHITE));
                }
                Handle::Vertex(_) => {
                    let rect = Rect::from_center_size(pos, Vec2::splat(self.handle_radius));
                    painter.rect_filled(rect, 2.0, HANDLE_FILL);
                }
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(crate::config::RESIZE_HANDLE_RADIUS)
    }
}

/// Paint one shape with the same kind-to-primitive mapping as the SVG export
pub fn draw_shape(painter: &Painter, shape: &Shape, origin: Vec2) {
    let style = &shape.style;
    let stroke = Stroke::new(style.stroke_width, style.stroke_color);
    match &shape.geometry {
        Geometry::Line { start, end } => {
            outline(painter, &[*start + origin, *end + origin], false, style);
        }
        Geometry::Circle { center, diameter } => {
            let center = *center + origin;
            let radius = diameter / 2.0;
            if style.dash == DashPattern::Solid {
                painter.circle(center, radius, style.effective_fill(), stroke);
            } else {
                let points = ellipse_points(center, Vec2::splat(radius));
                fill_polygon(painter, &points, style);
                outline(painter, &points, true, style);
            }
        }
        Geometry::Ellipse { center, width, height } => {
            let points = ellipse_points(*center + origin, Vec2::new(width / 2.0, height / 2.0));
            fill_polygon(painter, &points, style);
            outline(painter, &points, true, style);
        }
        Geometry::Polygon { vertices, .. } => {
            let points: Vec<Pos2> = vertices.iter().map(|v| *v + origin).collect();
            fill_polygon(painter, &points, style);
            outline(painter, &points, true, style);
        }
        Geometry::Text(text) => {
            painter.text(
                text.anchor + origin,
                Align2::CENTER_CENTER,
                &text.content,
                FontId::proportional(text.font_size),
                style.stroke_color,
            );
        }
    }
}

fn ellipse_points(center: Pos2, radii: Vec2) -> Vec<Pos2> {
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin())
        })
        .collect()
}

/// Fill a closed outline. egui only fills convex shapes, so a polygon made
/// concave or self-intersecting by vertex resizing keeps just its outline.
fn fill_polygon(painter: &Painter, points: &[Pos2], style: &ShapeStyle) {
    if !style.has_fill() {
        return;
    }
    if is_convex(points) {
        painter.add(egui::Shape::convex_polygon(
            points.to_vec(),
            style.effective_fill(),
            Stroke::NONE,
        ));
    } else {
        log::trace!("Skipping fill of non-convex outline ({} points)", points.len());
    }
}

/// Whether the closed outline turns the same way at every corner and winds
/// around exactly once. Collinear corners are ignored.
fn is_convex(points: &[Pos2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f32;
    let mut turning = 0.0_f32;
    for i in 0..n {
        let incoming = points[i] - points[(i + n - 1) % n];
        let outgoing = points[(i + 1) % n] - points[i];
        let cross = incoming.x * outgoing.y - incoming.y * outgoing.x;
        if cross != 0.0 {
            if sign * cross < 0.0 {
                return false;
            }
            sign = cross.signum();
        }
        turning += cross.atan2(incoming.dot(outgoing));
    }
    sign != 0.0 && (turning.abs() - std::f32::consts::TAU).abs() < 1e-3
}

fn outline(painter: &Painter, points: &[Pos2], closed: bool, style: &ShapeStyle) {
    if points.len() < 2 || style.stroke_width <= 0.0 {
        return;
    }
    let stroke = Stroke::new(style.stroke_width, style.stroke_color);
    let mut path = points.to_vec();
    if closed {
        path.push(points[0]);
    }

    let (dashes, gaps) = dash_and_gap_lengths(style.dash.segments());
    if dashes.is_empty() || gaps.is_empty() {
        painter.add(egui::Shape::line(path, stroke));
    } else {
        painter.extend(egui::Shape::dashed_line_with_offset(&path, stroke, &dashes, &gaps, 0.0));
    }
}

/// Split an alternating dash/gap pattern into egui's separate dash and gap lists
fn dash_and_gap_lengths(segments: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let dashes = segments.iter().step_by(2).copied().collect();
    let gaps = segments.iter().skip(1).step_by(2).copied().collect();
    (dashes, gaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editor::Tool;
    use crate::shape::ShapeKind;
    use egui::pos2;

    #[test]
    fn renders_every_kind() {
        let mut editor = Editor::new(EditorConfig::default());
        editor.set_text_input("x = 1");
        for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
            editor.set_tool(Tool::Draw(kind)).unwrap();
            let at = pos2(20.0 + i as f32 * 30.0, 50.0);
            editor.pointer_down(at).unwrap();
            editor.pointer_up(at + egui::vec2(15.0, 10.0)).unwrap();
        }
        assert_eq!(editor.document().len(), ShapeKind::ALL.len());

        // Text layout needs the fonts that only exist inside a frame
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(400.0, 300.0));
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            Renderer::default().render(&painter, rect, &editor);
        });
    }

    #[test]
    fn dash_dot_keeps_its_full_pattern() {
        let (dashes, gaps) = dash_and_gap_lengths(DashPattern::DashDot.segments());
        assert_eq!(dashes, [10.0, 2.0]);
        assert_eq!(gaps, [5.0, 5.0]);

        let (dashes, gaps) = dash_and_gap_lengths(DashPattern::Solid.segments());
        assert!(dashes.is_empty() && gaps.is_empty());
    }

    #[test]
    fn only_convex_outlines_are_fillable() {
        let square = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0), pos2(0.0, 10.0)];
        assert!(is_convex(&square));
        assert!(is_convex(&ellipse_points(pos2(5.0, 5.0), egui::vec2(10.0, 5.0))));

        // Opposite corner dragged inwards
        let concave = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(4.0, 4.0), pos2(0.0, 10.0)];
        assert!(!is_convex(&concave));

        // Self-intersecting bow tie
        let bow_tie = [pos2(0.0, 0.0), pos2(10.0, 10.0), pos2(10.0, 0.0), pos2(0.0, 10.0)];
        assert!(!is_convex(&bow_tie));

        let pentagram: Vec<Pos2> = (0..5)
            .map(|i| {
                let angle = (i * 2) as f32 * std::f32::consts::TAU / 5.0;
                pos2(angle.cos(), angle.sin())
            })
            .collect();
        assert!(!is_convex(&pentagram));
    }

    #[test]
    fn ellipse_outline_is_closed_loop_of_points() {
        let points = ellipse_points(pos2(0.0, 0.0), egui::vec2(10.0, 5.0));
        assert_eq!(points.len(), ELLIPSE_SEGMENTS);
        assert!((points[0].x - 10.0).abs() < 1e-4);
    }
}
