use super::Command;
use crate::document::Document;
use crate::error::{FigureError, FigureResult};

/// Undo and redo stacks of executed commands
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Push a command whose effect is already in the document
    pub fn record(&mut self, command: Command) {
        log::debug!("Recorded command: {}", command.name());
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, document: &mut Document) -> FigureResult<()> {
        let command = self.undo_stack.pop().ok_or(FigureError::History("undo"))?;
        command.undo(document);
        self.redo_stack.push(command);
        Ok(())
    }

    pub fn redo(&mut self, document: &mut Document) -> FigureResult<()> {
        let command = self.redo_stack.pop().ok_or(FigureError::History("redo"))?;
        command.execute(document);
        self.undo_stack.push(command);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
