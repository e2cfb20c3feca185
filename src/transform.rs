//! Drag and resize logic for individual shapes.
//!
//! Dragging is a rigid translation of every point. Resizing is driven by a
//! [`Handle`]: line endpoints and polygon vertices follow the pointer
//! directly, circle and ellipse handles sit on the cardinal points and set
//! the radius along their axis.

use egui::{Pos2, Vec2, vec2};

use crate::error::{FigureError, FigureResult};
use crate::shape::{Geometry, Shape};

/// Compass position of a circle/ellipse resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [Cardinal::North, Cardinal::South, Cardinal::East, Cardinal::West];

    pub fn is_vertical(&self) -> bool {
        matches!(self, Cardinal::North | Cardinal::South)
    }

    fn offset(&self, radii: Vec2) -> Vec2 {
        match self {
            Cardinal::North => vec2(0.0, -radii.y),
            Cardinal::South => vec2(0.0, radii.y),
            Cardinal::East => vec2(radii.x, 0.0),
            Cardinal::West => vec2(-radii.x, 0.0),
        }
    }
}

/// An interactive resize control on the selected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Line endpoint, 0 or 1
    Endpoint(usize),
    Cardinal(Cardinal),
    /// Polygon vertex index
    Vertex(usize),
}

/// Move every point of `shape` by `delta`
pub fn translate(shape: &mut Shape, delta: Vec2) {
    match &mut shape.geometry {
        Geometry::Line { start, end } => {
            *start += delta;
            *end += delta;
        }
        Geometry::Circle { center, .. } | Geometry::Ellipse { center, .. } => *center += delta,
        Geometry::Text(text) => text.anchor += delta,
        Geometry::Polygon { vertices, .. } => {
            for vertex in vertices {
                *vertex += delta;
            }
        }
    }
}

/// Offset between the pointer and the shape's reference point when a drag starts
pub fn grab_offset(shape: &Shape, pointer: Pos2) -> Vec2 {
    match shape.geometry.reference_point() {
        Some(reference) => pointer - reference,
        None => Vec2::ZERO,
    }
}

/// Continue a drag: place the reference point at `pointer - grab_offset`
pub fn drag_to(shape: &mut Shape, pointer: Pos2, grab_offset: Vec2) {
    if let Some(reference) = shape.geometry.reference_point() {
        let delta = (pointer - grab_offset) - reference;
        translate(shape, delta);
    }
}

/// Handles exposed by a shape and where they sit. Text has none.
pub fn handles(shape: &Shape) -> Vec<(Handle, Pos2)> {
    match &shape.geometry {
        Geometry::Line { start, end } => {
            vec![(Handle::Endpoint(0), *start), (Handle::Endpoint(1), *end)]
        }
        Geometry::Circle { center, diameter } => {
            cardinal_handles(*center, Vec2::splat(diameter / 2.0))
        }
        Geometry::Ellipse { center, width, height } => {
            cardinal_handles(*center, vec2(width / 2.0, height / 2.0))
        }
        Geometry::Polygon { vertices, .. } => vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (Handle::Vertex(index), *vertex))
            .collect(),
        Geometry::Text(_) => Vec::new(),
    }
}

fn cardinal_handles(center: Pos2, radii: Vec2) -> Vec<(Handle, Pos2)> {
    Cardinal::ALL
        .iter()
        .map(|cardinal| (Handle::Cardinal(*cardinal), center + cardinal.offset(radii)))
        .collect()
}

/// The handle of `shape` within `radius` of `pos`, if any. Later handles
/// are drawn on top and win when handles overlap.
pub fn handle_at(shape: &Shape, pos: Pos2, radius: f32) -> Option<Handle> {
    handles(shape)
        .into_iter()
        .rev()
        .find(|(_, at)| at.distance(pos) <= radius)
        .map(|(handle, _)| handle)
}

/// Move `handle` of `shape` to `pointer`
pub fn resize(shape: &mut Shape, handle: Handle, pointer: Pos2) -> FigureResult<()> {
    let kind = shape.kind().name();
    let invalid = || FigureError::InvalidHandle { handle, kind };

    match (&mut shape.geometry, handle) {
        (Geometry::Line { start, .. }, Handle::Endpoint(0)) => *start = pointer,
        (Geometry::Line { end, .. }, Handle::Endpoint(1)) => *end = pointer,
        (Geometry::Circle { center, diameter }, Handle::Cardinal(cardinal)) => {
            let delta = pointer - *center;
            let along = if cardinal.is_vertical() { delta.y } else { delta.x };
            *diameter = 2.0 * along.abs();
        }
        (Geometry::Ellipse { center, width, height }, Handle::Cardinal(cardinal)) => {
            let delta = pointer - *center;
            if cardinal.is_vertical() {
                *height = 2.0 * delta.y.abs();
            } else {
                *width = 2.0 * delta.x.abs();
            }
        }
        (Geometry::Polygon { vertices, .. }, Handle::Vertex(index)) => {
            let vertex = vertices.get_mut(index).ok_or_else(invalid)?;
            *vertex = pointer;
        }
        _ => return Err(invalid()),
    }
    Ok(())
}
