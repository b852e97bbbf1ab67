// src/render/mod.rs
//! Serializes positioned elements to PDF bytes with `lopdf`.

use std::io;
use std::path::Path;
use thiserror::Error;

pub mod pdf;

pub use pdf::DocumentBuilder;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(String),

    #[error("logo image could not be decoded: {0}")]
    Image(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<lopdf::Error> for RenderError {
    fn from(e: lopdf::Error) -> Self {
        RenderError::Pdf(e.to_string())
    }
}

/// A letterhead logo decoded to raw RGB, resolved once when the pipeline is
/// built and embedded into every document as an image XObject.
#[derive(Debug, Clone)]
pub struct LogoAsset {
    rgb: Vec<u8>,
    width: u32,
    height: u32,
}

impl LogoAsset {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| RenderError::Image(e.to_string()))?
            .to_rgb8();
        Ok(LogoAsset {
            width: decoded.width(),
            height: decoded.height(),
            rgb: decoded.into_raw(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, RenderError> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }
}
