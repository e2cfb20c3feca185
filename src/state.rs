//! The gesture state machine of the figure editor.
//!
//! A gesture starts on pointer press and ends on release (or an explicit
//! cancel). While one is active, tool changes and history operations are
//! refused.
//!
//! ```text
//!              press (draw tool)      ┌──────────┐
//!        ┌───────────────────────────►│ Drawing  ├──┐
//!        │                            └──────────┘  │
//! ┌──────┴─┐  press on shape          ┌──────────┐  │ release
//! │  Idle  ├─────────────────────────►│ Dragging ├──┤ / cancel
//! └──────┬─┘                          └──────────┘  │
//!        │    press on handle         ┌──────────┐  │
//!        └───────────────────────────►│ Resizing ├──┘
//!                                     └──────────┘
//! ```

use egui::{Pos2, Vec2};

use crate::shape::{Shape, ShapeId};
use crate::transform::Handle;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// A new shape is being placed; it is already in the document
    Drawing { shape_id: ShapeId, anchor: Pos2 },
    /// The selected shape follows the pointer
    Dragging {
        shape_id: ShapeId,
        grab_offset: Vec2,
        before: Shape,
    },
    /// One handle of the selected shape follows the pointer
    Resizing {
        shape_id: ShapeId,
        handle: Handle,
        before: Shape,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Drawing { .. } => "drawing",
            GestureState::Dragging { .. } => "dragging",
            GestureState::Resizing { .. } => "resizing",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, GestureState::Drawing { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, GestureState::Resizing { .. })
    }

    /// The shape the active gesture operates on
    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            GestureState::Idle => None,
            GestureState::Drawing { shape_id, .. }
            | GestureState::Dragging { shape_id, .. }
            | GestureState::Resizing { shape_id, .. } => Some(*shape_id),
        }
    }
}
