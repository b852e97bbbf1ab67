// src/lib.rs
//! docket — batch invoice PDF generation for purchase-order exports.
//!
//! The pipeline reads a CSV export (one row per line item), groups rows into
//! invoices, and renders each one as a single-page, fixed-layout letter-size
//! PDF: letterhead, a details box, and an itemized table with a computed
//! total. All fixed strings and layout dimensions live in
//! [`InvoiceTemplate`], which can be overridden from JSON.
//!
//! ```no_run
//! use docket::PipelineBuilder;
//! use std::{fs::File, path::Path};
//!
//! let pipeline = PipelineBuilder::new().build();
//! let input = File::open("orders.csv").unwrap();
//! let report = pipeline.generate(input, Path::new("invoices")).unwrap();
//! println!("{} written, {} failed", report.written.len(), report.failed.len());
//! ```

pub mod error;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod template;

pub use error::PipelineError;
pub use pipeline::{BatchReport, FailedInvoice, Pipeline, PipelineBuilder};
pub use source::{Field, Invoice, LineItem, RecordError, SourceError, read_invoices};
pub use template::InvoiceTemplate;
