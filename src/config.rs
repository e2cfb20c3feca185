use std::fs;
use std::path::Path;

use egui::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::bounds::VIEW_PADDING;
use crate::persistence::PersistenceResult;
use crate::shape::ShapeStyle;
use crate::shape::factory::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_SIZE, ShapeDefaults};

/// Pick radius around a resize handle
pub const RESIZE_HANDLE_RADIUS: f32 = 8.0;

/// Tunable editor settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Edge length / diameter of new shapes
    pub default_shape_size: f32,
    pub handle_radius: f32,
    /// Padding around the shapes when framing the view or exporting
    pub view_padding: f32,
    /// Frame used when the figure is empty
    pub empty_view_size: Vec2,
    pub default_style: ShapeStyle,
    pub default_font_size: f32,
    pub default_font_family: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_shape_size: DEFAULT_SIZE,
            handle_radius: RESIZE_HANDLE_RADIUS,
            view_padding: VIEW_PADDING,
            empty_view_size: Vec2::new(400.0, 300.0),
            default_style: ShapeStyle::default(),
            default_font_size: DEFAULT_FONT_SIZE,
            default_font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Factory parameters derived from this config
    pub fn shape_defaults(&self) -> ShapeDefaults {
        ShapeDefaults {
            size: self.default_shape_size,
            style: self.default_style,
            font_size: self.default_font_size,
            font_family: self.default_font_family.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "view_padding": 10.0 }"#).unwrap();
        assert_eq!(config.view_padding, 10.0);
        assert_eq!(config.default_shape_size, DEFAULT_SIZE);
        assert_eq!(config.default_font_family, "Arial");
    }
}
