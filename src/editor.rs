use egui::{Pos2, Rect};
use log::{debug, info, warn};

use crate::command::{Command, CommandHistory};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::error::{FigureError, FigureResult};
use crate::geometry::bounds;
use crate::shape::factory;
use crate::shape::{Shape, ShapeId, ShapeKind, StyleChange};
use crate::state::GestureState;
use crate::svg;
use crate::transform::{self, Handle};

/// What a pointer press does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pick, drag and resize existing shapes
    #[default]
    Select,
    /// Place a new shape of the given kind
    Draw(ShapeKind),
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Draw(kind) => kind.name(),
        }
    }
}

/// Owns a figure and applies pointer gestures and edits to it.
///
/// All mutation of the document goes through this type; every completed
/// gesture or edit lands in the undo history.
#[derive(Debug, Default)]
pub struct Editor {
    document: Document,
    selection: Option<ShapeId>,
    state: GestureState,
    tool: Tool,
    history: CommandHistory,
    config: EditorConfig,
    text_input: String,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|id| self.document.get(id))
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    /// Text used for the next text shape
    pub fn set_text_input(&mut self, text: impl Into<String>) {
        self.text_input = text.into();
    }

    /// Swap in another figure, dropping selection, gesture and history
    pub fn replace_document(&mut self, document: Document) {
        info!("Replacing figure ({} shapes)", document.len());
        self.document = document;
        self.selection = None;
        self.state = GestureState::Idle;
        self.history.clear();
    }

    pub fn set_tool(&mut self, tool: Tool) -> FigureResult<()> {
        self.ensure_idle()?;
        debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        Ok(())
    }

    pub fn select(&mut self, id: ShapeId) -> FigureResult<()> {
        self.ensure_idle()?;
        if !self.document.contains(id) {
            return Err(FigureError::ShapeNotFound(id));
        }
        self.selection = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Handles of the selected shape, for display and picking
    pub fn selected_handles(&self) -> Vec<(Handle, Pos2)> {
        self.selected_shape().map(transform::handles).unwrap_or_default()
    }

    /// Begin a gesture at `pos` according to the current tool
    pub fn pointer_down(&mut self, pos: Pos2) -> FigureResult<()> {
        self.ensure_idle()?;
        match self.tool {
            Tool::Draw(kind) => self.begin_drawing(kind, pos),
            Tool::Select => self.begin_select_gesture(pos),
        }
        Ok(())
    }

    /// Update the active gesture with the current pointer position
    pub fn pointer_move(&mut self, pos: Pos2) -> FigureResult<()> {
        let Some(shape_id) = self.state.shape_id() else {
            return Ok(());
        };
        let shape = self
            .document
            .get_mut(shape_id)
            .ok_or(FigureError::ShapeNotFound(shape_id))?;

        match &self.state {
            GestureState::Idle => {}
            // The draft keeps its default size until the pointer leaves the anchor
            GestureState::Drawing { anchor, .. } if pos != *anchor => {
                factory::update_draft(shape, *anchor, pos)
            }
            GestureState::Drawing { .. } => {}
            GestureState::Dragging { grab_offset, .. } => transform::drag_to(shape, pos, *grab_offset),
            GestureState::Resizing { handle, .. } => transform::resize(shape, *handle, pos)?,
        }
        Ok(())
    }

    /// Finish the active gesture at `pos` and record it in the history
    pub fn pointer_up(&mut self, pos: Pos2) -> FigureResult<()> {
        if self.state.is_idle() {
            return Ok(());
        }
        let moved = self.pointer_move(pos);
        let finished = std::mem::take(&mut self.state);
        debug!("Gesture finished: {}", finished.name());

        match finished {
            GestureState::Idle => {}
            GestureState::Drawing { shape_id, .. } => {
                if let Some((index, shape)) = self.position_of(shape_id) {
                    info!("Added {} {}", shape.kind().name(), shape_id);
                    self.history.record(Command::AddShape { index, shape });
                }
            }
            GestureState::Dragging { shape_id, before, .. }
            | GestureState::Resizing { shape_id, before, .. } => {
                self.record_replace(shape_id, before);
            }
        }
        moved
    }

    /// Abort the active gesture, restoring the shape it started from.
    /// A shape still being drawn is removed. Returns whether a gesture was
    /// active.
    pub fn cancel_gesture(&mut self) -> bool {
        let cancelled = std::mem::take(&mut self.state);
        let name = cancelled.name();
        match cancelled {
            GestureState::Idle => return false,
            GestureState::Drawing { shape_id, .. } => {
                self.document.remove_shape(shape_id);
                if self.selection == Some(shape_id) {
                    self.selection = None;
                }
            }
            GestureState::Dragging { shape_id, before, .. }
            | GestureState::Resizing { shape_id, before, .. } => {
                if let Some(shape) = self.document.get_mut(shape_id) {
                    *shape = before;
                }
            }
        }
        debug!("Gesture cancelled: {}", name);
        true
    }

    pub fn delete_selected(&mut self) -> FigureResult<Shape> {
        let id = self.selection.ok_or(FigureError::NoSelection)?;
        self.delete_shape(id)
    }

    pub fn delete_shape(&mut self, id: ShapeId) -> FigureResult<Shape> {
        self.ensure_idle()?;
        let (index, shape) = self
            .document
            .remove_shape(id)
            .ok_or(FigureError::ShapeNotFound(id))?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        info!("Deleted {} {}", shape.kind().name(), id);
        self.history.record(Command::DeleteShape {
            index,
            shape: shape.clone(),
        });
        Ok(shape)
    }

    /// Apply a discrete style choice to the selected shape
    pub fn apply_style(&mut self, change: StyleChange) -> FigureResult<()> {
        self.ensure_idle()?;
        let id = self.selection.ok_or(FigureError::NoSelection)?;
        let shape = self.document.get_mut(id).ok_or(FigureError::ShapeNotFound(id))?;
        let before = shape.clone();
        if !shape.apply_style(change) {
            return Err(FigureError::NotText(id));
        }
        self.record_replace(id, before);
        Ok(())
    }

    /// Replace the content of the selected text shape
    pub fn set_text(&mut self, content: impl Into<String>) -> FigureResult<()> {
        self.ensure_idle()?;
        let id = self.selection.ok_or(FigureError::NoSelection)?;
        let shape = self.document.get_mut(id).ok_or(FigureError::ShapeNotFound(id))?;
        let before = shape.clone();
        let text = shape.text_mut().ok_or(FigureError::NotText(id))?;
        text.content = content.into();
        self.record_replace(id, before);
        Ok(())
    }

    pub fn undo(&mut self) -> FigureResult<()> {
        self.ensure_idle()?;
        self.history.undo(&mut self.document)?;
        self.drop_stale_selection();
        Ok(())
    }

    pub fn redo(&mut self) -> FigureResult<()> {
        self.ensure_idle()?;
        self.history.redo(&mut self.document)?;
        self.drop_stale_selection();
        Ok(())
    }

    /// Tight box around all shapes, `Rect::NOTHING` when empty
    pub fn bounds(&self) -> Rect {
        bounds::compute_bounds(self.document.shapes())
    }

    /// Padded frame used for display and export
    pub fn view_box(&self) -> Rect {
        bounds::view_box(
            self.document.shapes(),
            self.config.view_padding,
            self.config.empty_view_size,
        )
    }

    pub fn export_svg(&self) -> String {
        svg::to_svg(self.document.shapes(), self.view_box())
    }

    fn ensure_idle(&self) -> FigureResult<()> {
        if self.state.is_idle() {
            Ok(())
        } else {
            warn!("Rejected operation during {} gesture", self.state.name());
            Err(FigureError::GestureInProgress(self.state.name()))
        }
    }

    fn begin_drawing(&mut self, kind: ShapeKind, anchor: Pos2) {
        if kind == ShapeKind::Text && self.text_input.trim().is_empty() {
            warn!("Ignoring text placement without text");
            return;
        }
        let shape = factory::create_shape(kind, anchor, &self.text_input, &self.config.shape_defaults());
        let shape_id = shape.id();
        self.document.add_shape(shape);
        self.selection = Some(shape_id);
        self.state = GestureState::Drawing { shape_id, anchor };
        debug!("Drawing {} at {:?}", kind.name(), anchor);
    }

    fn begin_select_gesture(&mut self, pos: Pos2) {
        if let Some(selected) = self.selected_shape() {
            if let Some(handle) = transform::handle_at(selected, pos, self.config.handle_radius) {
                debug!("Resizing {} via {:?}", selected.id(), handle);
                self.state = GestureState::Resizing {
                    shape_id: selected.id(),
                    handle,
                    before: selected.clone(),
                };
                return;
            }
        }

        match self.document.shape_at(pos).and_then(|id| self.document.get(id)) {
            Some(shape) => {
                let shape_id = shape.id();
                debug!("Dragging {}", shape_id);
                self.state = GestureState::Dragging {
                    shape_id,
                    grab_offset: transform::grab_offset(shape, pos),
                    before: shape.clone(),
                };
                self.selection = Some(shape_id);
            }
            None => self.selection = None,
        }
    }

    fn position_of(&self, id: ShapeId) -> Option<(usize, Shape)> {
        let index = self.document.order().iter().position(|existing| *existing == id)?;
        let shape = self.document.get(id)?.clone();
        Some((index, shape))
    }

    fn record_replace(&mut self, id: ShapeId, before: Shape) {
        if let Some(after) = self.document.get(id) {
            if *after != before {
                self.history.record(Command::ReplaceShape {
                    before,
                    after: after.clone(),
                });
            }
        }
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection {
            if !self.document.contains(id) {
                self.selection = None;
            }
        }
    }
}
