// src/error.rs
use crate::render::RenderError;
use crate::source::{RecordError, SourceError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for the entire invoice generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input could not be parsed: {0}")]
    Source(#[from] SourceError),

    #[error("invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("cannot write {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template is not valid JSON: {0}")]
    Template(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PipelineError {
    /// Whether the failure is confined to a single invoice. Such errors are
    /// collected into the batch report; everything else aborts the batch.
    pub fn is_invoice_scoped(&self) -> bool {
        matches!(self, PipelineError::Record(_) | PipelineError::Render(_))
    }
}
