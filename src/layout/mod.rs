// src/layout/mod.rs
//! Maps an invoice record and a template to absolutely positioned drawing
//! primitives, ready for the PDF renderer.

pub mod elements;
pub mod fonts;
pub mod invoice;
pub mod table;

pub use elements::{ElementStyle, LayoutElement, PositionedElement, Stroke};
pub use fonts::Font;
pub use invoice::{LOGO_RESOURCE, layout_invoice};
