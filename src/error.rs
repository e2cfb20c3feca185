use thiserror::Error;

use crate::shape::ShapeId;
use crate::transform::Handle;

/// Errors returned by editor operations
#[derive(Debug, Error, PartialEq)]
pub enum FigureError {
    #[error("Shape {0} does not exist in the figure")]
    ShapeNotFound(ShapeId),

    #[error("No shape is selected")]
    NoSelection,

    /// Another gesture is still in progress; release the pointer first
    #[error("A {0} gesture is in progress")]
    GestureInProgress(&'static str),

    #[error("Handle {handle:?} does not apply to a {kind} shape")]
    InvalidHandle { handle: Handle, kind: &'static str },

    #[error("Shape {0} is not a text shape")]
    NotText(ShapeId),

    #[error("Nothing to {0}")]
    History(&'static str),
}

pub type FigureResult<T> = Result<T, FigureError>;
