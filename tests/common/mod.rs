pub mod pdf_assertions;

use docket::{Invoice, LineItem, Pipeline, PipelineBuilder, PipelineError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// A pipeline on the default template. Its logo path does not exist in the
/// test environment, so letterheads render without a logo.
pub fn default_pipeline() -> Pipeline {
    PipelineBuilder::new().build()
}

pub fn sample_invoice() -> Invoice {
    Invoice {
        invoice_number: "1001".into(),
        date: "2024-03-01".into(),
        supplier: "Acme Optical".into(),
        order_number: "PO-77".into(),
        items: vec![LineItem {
            quantity: "2".into(),
            product: "Reading glasses".into(),
            amount: "45.50".into(),
        }],
        line: 2,
    }
}

pub fn render(pipeline: &Pipeline, invoice: &Invoice) -> Result<GeneratedPdf, PipelineError> {
    let bytes = pipeline.render_invoice(invoice)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| {
        PipelineError::Render(docket::render::RenderError::Pdf(e.to_string()))
    })
}
