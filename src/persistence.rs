use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;
use crate::shape::Shape;

/// Format version written into every saved figure
pub const FIGURE_FORMAT_VERSION: u32 = 1;

/// Errors that can occur while saving or loading figures and settings
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to (de)serialize figure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to access figure file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported figure version {found} (expected at most {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// On-disk form of a figure: shapes bottom to top
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureFile {
    pub version: u32,
    pub shapes: Vec<Shape>,
}

impl FigureFile {
    pub fn from_document(document: &Document) -> Self {
        Self {
            version: FIGURE_FORMAT_VERSION,
            shapes: document.snapshot(),
        }
    }

    pub fn into_document(self) -> PersistenceResult<Document> {
        if self.version > FIGURE_FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                supported: FIGURE_FORMAT_VERSION,
            });
        }
        Ok(Document::from_shapes(self.shapes))
    }
}

pub fn figure_to_json(document: &Document) -> PersistenceResult<String> {
    Ok(serde_json::to_string_pretty(&FigureFile::from_document(document))?)
}

pub fn figure_from_json(json: &str) -> PersistenceResult<Document> {
    let file: FigureFile = serde_json::from_str(json)?;
    log::info!("Loaded figure v{} with {} shapes", file.version, file.shapes.len());
    file.into_document()
}

pub fn save_figure(document: &Document, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let json = figure_to_json(document)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_figure(path: impl AsRef<Path>) -> PersistenceResult<Document> {
    let json = fs::read_to_string(path)?;
    figure_from_json(&json)
}
