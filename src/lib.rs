#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod svg;
pub mod transform;

pub use app::FigureApp;
pub use command::{Command, CommandHistory};
pub use config::EditorConfig;
pub use document::Document;
pub use editor::{Editor, Tool};
pub use error::{FigureError, FigureResult};
pub use renderer::Renderer;
pub use shape::{Geometry, PolygonKind, Shape, ShapeId, ShapeKind, ShapeStyle, StyleChange};
pub use state::GestureState;
pub use transform::{Cardinal, Handle};
