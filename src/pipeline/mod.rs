// src/pipeline/mod.rs
//! The batch driver: reads an export, renders every invoice independently,
//! and writes one PDF per invoice into the output directory.

use crate::error::PipelineError;
use crate::layout::layout_invoice;
use crate::render::{DocumentBuilder, LogoAsset};
use crate::source::{Invoice, read_invoices};
use crate::template::InvoiceTemplate;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Builds a [`Pipeline`], resolving the template and the logo asset once.
pub struct PipelineBuilder {
    template: InvoiceTemplate,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        PipelineBuilder { template: InvoiceTemplate::default() }
    }

    pub fn with_template(mut self, template: InvoiceTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_template_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.template = InvoiceTemplate::from_json(json)?;
        Ok(self)
    }

    pub fn with_template_file(self, path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let json = fs::read_to_string(path)?;
        self.with_template_json(&json)
    }

    /// Resolves the logo asset and finishes the pipeline. A missing or
    /// undecodable logo is logged and skipped; the letterhead renders
    /// without it.
    pub fn build(self) -> Pipeline {
        let logo = self.template.logo.as_ref().and_then(|spec| {
            match LogoAsset::load(&spec.path) {
                Ok(asset) => Some(asset),
                Err(err) => {
                    log::warn!(
                        "logo {} unavailable, rendering without it: {err}",
                        spec.path.display()
                    );
                    None
                }
            }
        });
        Pipeline { template: self.template, logo }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders invoices against one resolved template. Rendering is a pure
/// mapping from record to document bytes; only [`Pipeline::generate`]
/// touches the filesystem.
pub struct Pipeline {
    template: InvoiceTemplate,
    logo: Option<LogoAsset>,
}

impl Pipeline {
    /// Renders a single invoice to PDF bytes.
    pub fn render_invoice(&self, invoice: &Invoice) -> Result<Vec<u8>, PipelineError> {
        invoice.validate()?;
        let elements = layout_invoice(&self.template, invoice, self.logo.is_some())?;
        let (width, height) = self.template.page.size.dimensions_pt();
        let mut builder = DocumentBuilder::new(self.logo.as_ref());
        builder.add_page(width, height, &elements)?;
        Ok(builder.finish()?)
    }

    /// The deterministic output filename for an invoice.
    pub fn document_name(invoice: &Invoice) -> String {
        format!("invoice_{}.pdf", invoice.invoice_number)
    }

    /// Reads the export from `input` and writes one PDF per invoice into
    /// `out_dir`, overwriting files of the same name.
    ///
    /// Invoice-scoped failures are collected into the report and do not stop
    /// the batch; unparsable input and storage failures abort it. Bytes are
    /// rendered fully in memory before the file is created, so a failed
    /// invoice never leaves a partial document behind.
    pub fn generate<R: Read>(&self, input: R, out_dir: &Path) -> Result<BatchReport, PipelineError> {
        let invoices = read_invoices(input)?;
        fs::create_dir_all(out_dir).map_err(|source| PipelineError::Storage {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut report = BatchReport::default();
        for invoice in &invoices {
            match self.render_invoice(invoice) {
                Ok(bytes) => {
                    let path = out_dir.join(Self::document_name(invoice));
                    fs::write(&path, &bytes).map_err(|source| PipelineError::Storage {
                        path: path.clone(),
                        source,
                    })?;
                    log::info!("wrote {}", path.display());
                    report.written.push(path);
                }
                Err(error) if error.is_invoice_scoped() => {
                    log::warn!(
                        "skipping invoice `{}` (line {}): {error}",
                        invoice.invoice_number,
                        invoice.line
                    );
                    report.failed.push(FailedInvoice {
                        invoice_number: invoice.invoice_number.clone(),
                        line: invoice.line,
                        error,
                    });
                }
                Err(fatal) => return Err(fatal),
            }
        }
        Ok(report)
    }
}

/// Per-invoice outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Paths of the documents written, in source order.
    pub written: Vec<PathBuf>,
    /// Invoices whose render failed, with the reason.
    pub failed: Vec<FailedInvoice>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug)]
pub struct FailedInvoice {
    pub invoice_number: String,
    pub line: u64,
    pub error: PipelineError,
}
