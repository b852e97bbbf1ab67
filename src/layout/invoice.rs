// src/layout/invoice.rs
//! The single-pass page layout: letterhead, title, details box, recipient
//! block, and the item table, top to bottom from the page margin.
//!
//! Every string, color, and block dimension comes from the template; this
//! module only knows where the blocks go relative to each other.

use crate::layout::elements::{PositionedElement, Stroke};
use crate::layout::fonts::Font;
use crate::layout::table;
use crate::source::{Invoice, RecordError};
use crate::template::{Color, InvoiceTemplate};

/// Resource name the page content refers to the logo XObject by.
pub const LOGO_RESOURCE: &str = "Im1";

// Letterhead baseline offsets below the top margin.
const COMPANY_BASELINE: f32 = 10.0;
const CREDENTIAL_BASELINE: f32 = 30.0;
const PRACTICE_BASELINE: f32 = 45.0;
const CONTACT_BASELINE: f32 = 56.0;
const FAX_BASELINE: f32 = 76.0;
const EMAIL_BASELINE: f32 = 90.0;
const WEBSITE_BASELINE: f32 = 100.0;
// The logo box hangs this far below the top margin.
const LOGO_DROP: f32 = 60.0;
// Company block text starts to the right of the logo box.
const COMPANY_INDENT: f32 = 100.0;
// Contact-detail column offsets.
const CITY_INDENT: f32 = 202.0;
const PHONE_RIGHT_INSET: f32 = 178.0;
const EMAIL_CENTER_INSET: f32 = 85.0;

/// Maps one invoice plus the template to the page's drawing primitives.
///
/// `with_logo` reflects whether the pipeline resolved a logo asset; when it
/// did not, the letterhead simply omits the image.
pub fn layout_invoice(
    template: &InvoiceTemplate,
    invoice: &Invoice,
    with_logo: bool,
) -> Result<Vec<PositionedElement>, RecordError> {
    let (page_width, _) = template.page.size.dimensions_pt();
    let margin = template.page.margin;
    let brand = &template.letterhead;
    let accent = brand.accent;

    let mut elements = Vec::new();

    // letterhead
    if with_logo {
        if let Some(spec) = &template.logo {
            elements.push(PositionedElement::image(
                LOGO_RESOURCE,
                margin,
                margin + LOGO_DROP - spec.height,
                spec.width,
                spec.height,
            ));
        }
    }
    let company_x = margin + COMPANY_INDENT;
    elements.push(PositionedElement::text_at_baseline(
        company_x,
        margin + COMPANY_BASELINE,
        brand.company_name.clone(),
        Font::HelveticaBold,
        36.0,
        accent,
    ));
    elements.push(PositionedElement::text_at_baseline(
        company_x,
        margin + CREDENTIAL_BASELINE,
        brand.credential_line.clone(),
        Font::Helvetica,
        10.0,
        Color::BLACK,
    ));
    elements.push(PositionedElement::text_at_baseline(
        company_x,
        margin + PRACTICE_BASELINE,
        brand.practice_line.clone(),
        Font::HelveticaOblique,
        9.0,
        Color::BLACK,
    ));
    elements.push(PositionedElement::text_at_baseline(
        margin + 2.0,
        margin + CONTACT_BASELINE,
        brand.street_line.clone(),
        Font::Helvetica,
        8.0,
        Color::BLACK,
    ));
    elements.push(PositionedElement::text_at_baseline(
        margin + CITY_INDENT,
        margin + CONTACT_BASELINE,
        brand.city_line.clone(),
        Font::Helvetica,
        8.0,
        Color::BLACK,
    ));
    let phone_x = page_width - margin - PHONE_RIGHT_INSET;
    elements.push(PositionedElement::text_at_baseline(
        phone_x,
        margin + CONTACT_BASELINE,
        brand.phone.clone(),
        Font::Helvetica,
        8.0,
        Color::BLACK,
    ));
    elements.push(PositionedElement::text_at_baseline(
        phone_x,
        margin + FAX_BASELINE,
        brand.fax.clone(),
        Font::Helvetica,
        8.0,
        Color::BLACK,
    ));
    let email_x = page_width / 2.0 - EMAIL_CENTER_INSET;
    elements.push(PositionedElement::text_at_baseline(
        email_x,
        margin + EMAIL_BASELINE,
        brand.email.clone(),
        Font::Helvetica,
        8.0,
        Color::BLACK,
    ));
    elements.push(PositionedElement::text_at_baseline(
        email_x,
        margin + WEBSITE_BASELINE,
        brand.website.clone(),
        Font::Helvetica,
        8.0,
        accent,
    ));

    // centered title
    let title = &template.title;
    let title_width = Font::HelveticaBold.text_width(&title.text, title.font_size);
    elements.push(PositionedElement::text_at_baseline(
        (page_width - title_width) / 2.0,
        margin + title.offset,
        title.text.clone(),
        Font::HelveticaBold,
        title.font_size,
        accent,
    ));

    // details box
    let details = &template.details;
    let details_top = margin + details.offset;
    elements.push(PositionedElement::outlined_rect(
        margin,
        details_top,
        details.width,
        details.height,
        Stroke { width: 1.0, color: Color::BLACK },
    ));
    let detail_lines = [
        format!("INVOICE:   {}", invoice.invoice_number),
        format!("DATE:      {}", invoice.date),
        format!("SUPPLIER:  {}", invoice.supplier),
        format!("ORDER NO:  {}", invoice.order_number),
    ];
    let text_x = margin + 10.0;
    for (i, line) in detail_lines.iter().enumerate() {
        elements.push(PositionedElement::text_at_baseline(
            text_x,
            details_top + 25.0 + i as f32 * details.line_pitch,
            line.clone(),
            Font::Helvetica,
            12.0,
            Color::BLACK,
        ));
    }
    for (i, line) in template.recipient.iter().enumerate() {
        elements.push(PositionedElement::text_at_baseline(
            text_x,
            details_top + 85.0 + i as f32 * details.address_pitch,
            line.clone(),
            Font::Helvetica,
            10.0,
            Color::BLACK,
        ));
    }

    // item table
    let table_top = details_top + details.height + template.table.gap;
    let rows = table::build_rows(&template.table, invoice)?;
    elements.extend(table::layout_table(&template.table, &rows, margin, table_top));

    Ok(elements)
}
