use egui::Color32;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Stroke colours offered by the style panel
pub const STROKE_COLORS: [Color32; 6] = [
    Color32::BLACK,
    Color32::from_rgb(220, 38, 38),
    Color32::from_rgb(37, 99, 235),
    Color32::from_rgb(22, 163, 74),
    Color32::from_rgb(234, 88, 12),
    Color32::from_rgb(147, 51, 234),
];

/// Fill colours offered by the style panel. The first entry is transparent.
pub const FILL_COLORS: [Color32; 6] = [
    Color32::TRANSPARENT,
    Color32::from_rgb(254, 202, 202),
    Color32::from_rgb(191, 219, 254),
    Color32::from_rgb(187, 247, 208),
    Color32::from_rgb(254, 240, 138),
    Color32::from_rgb(233, 213, 255),
];

pub const STROKE_WIDTHS: [f32; 5] = [1.0, 2.0, 3.0, 5.0, 8.0];
pub const OPACITIES: [f32; 4] = [0.25, 0.5, 0.75, 1.0];
pub const FONT_SIZES: [f32; 5] = [12.0, 16.0, 20.0, 24.0, 32.0];

/// Named stroke dash patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl DashPattern {
    pub const ALL: [DashPattern; 4] = [
        DashPattern::Solid,
        DashPattern::Dashed,
        DashPattern::Dotted,
        DashPattern::DashDot,
    ];

    /// The SVG `stroke-dasharray` value, or `None` for a solid stroke
    pub fn dasharray(&self) -> Option<&'static str> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("5,5"),
            DashPattern::Dotted => Some("2,2"),
            DashPattern::DashDot => Some("10,5,2,5"),
        }
    }

    /// Alternating dash/gap lengths used when painting on screen
    pub fn segments(&self) -> &'static [f32] {
        match self {
            DashPattern::Solid => &[],
            DashPattern::Dashed => &[5.0, 5.0],
            DashPattern::Dotted => &[2.0, 2.0],
            DashPattern::DashDot => &[10.0, 5.0, 2.0, 5.0],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashPattern::Solid => "Solid",
            DashPattern::Dashed => "Dashed",
            DashPattern::Dotted => "Dotted",
            DashPattern::DashDot => "Dash-dot",
        }
    }
}

/// Presentation attributes shared by every shape kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    pub stroke_color: Color32,
    pub stroke_width: f32,
    pub dash: DashPattern,
    /// `Color32::TRANSPARENT` means no fill
    pub fill: Color32,
    /// Fill alpha in `0.0..=1.0`
    pub opacity: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color32::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            dash: DashPattern::Solid,
            fill: Color32::TRANSPARENT,
            opacity: 1.0,
        }
    }
}

impl ShapeStyle {
    pub fn has_fill(&self) -> bool {
        self.fill.a() > 0
    }

    /// Fill colour with the shape opacity applied, as painted on screen
    pub fn effective_fill(&self) -> Color32 {
        if self.has_fill() {
            self.fill.gamma_multiply(self.opacity.clamp(0.0, 1.0))
        } else {
            Color32::TRANSPARENT
        }
    }
}

/// One discrete style choice applied to the selected shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleChange {
    StrokeColor(Color32),
    StrokeWidth(f32),
    Dash(DashPattern),
    Fill(Color32),
    Opacity(f32),
    FontSize(f32),
}

/// Format a colour as `#rrggbb`, dropping alpha
pub fn hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
