use crate::document::Document;
use crate::shape::Shape;

/// Undoable edits to a figure
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Put a shape into the document at a z-order position
    AddShape { index: usize, shape: Shape },

    /// Take a shape out of the document; `index` and `shape` restore it
    DeleteShape { index: usize, shape: Shape },

    /// Swap one state of a shape for another (drag, resize, style, text)
    ReplaceShape { before: Shape, after: Shape },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddShape { .. } => "Add Shape",
            Command::DeleteShape { .. } => "Delete Shape",
            Command::ReplaceShape { .. } => "Edit Shape",
        }
    }

    pub fn execute(&self, document: &mut Document) {
        match self {
            Command::AddShape { index, shape } => document.insert_shape(*index, shape.clone()),
            Command::DeleteShape { shape, .. } => {
                document.remove_shape(shape.id());
            }
            Command::ReplaceShape { after, .. } => replace(document, after),
        }
    }

    pub fn undo(&self, document: &mut Document) {
        match self {
            Command::AddShape { shape, .. } => {
                document.remove_shape(shape.id());
            }
            Command::DeleteShape { index, shape } => document.insert_shape(*index, shape.clone()),
            Command::ReplaceShape { before, .. } => replace(document, before),
        }
    }
}

fn replace(document: &mut Document, shape: &Shape) {
    if let Some(existing) = document.get_mut(shape.id()) {
        *existing = shape.clone();
    }
}
