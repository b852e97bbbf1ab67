mod common;

use common::{TestResult, default_pipeline, render, sample_invoice};
use docket::{InvoiceTemplate, PipelineBuilder, PipelineError, RecordError};
use docket::source::Field;
use docket::template::LogoSpec;

#[test]
fn renders_a_valid_invoice() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = render(&default_pipeline(), &sample_invoice())?;
    assert!(!pdf.bytes.is_empty());
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "INVOICE");
    assert_pdf_contains_text!(pdf, "The Village Optician Ltd");
    assert_pdf_contains_text!(pdf, "1001");
    assert_pdf_contains_text!(pdf, "Acme Optical");
    assert_pdf_contains_text!(pdf, "Reading glasses");
    assert_pdf_contains_text!(pdf, "TOTAL");
    Ok(())
}

#[test]
fn rendering_is_deterministic() -> TestResult {
    let pipeline = default_pipeline();
    let invoice = sample_invoice();
    let first = pipeline.render_invoice(&invoice)?;
    let second = pipeline.render_invoice(&invoice)?;
    assert!(first == second, "same record and template must give identical bytes");
    Ok(())
}

#[test]
fn total_repeats_the_single_line_amount() -> TestResult {
    let pdf = render(&default_pipeline(), &sample_invoice())?;
    let text = common::pdf_assertions::extract_text(&pdf.doc);
    assert_eq!(
        text.matches("45.50").count(),
        2,
        "amount should appear in the item row and the total row:\n{text}"
    );
    Ok(())
}

#[test]
fn multi_item_invoice_gets_a_summed_total() -> TestResult {
    let mut invoice = sample_invoice();
    invoice.items.push(docket::LineItem {
        quantity: "1".into(),
        product: "Lens cloth".into(),
        amount: "4.05".into(),
    });
    let pdf = render(&default_pipeline(), &invoice)?;
    assert_pdf_contains_text!(pdf, "Lens cloth");
    assert_pdf_contains_text!(pdf, "49.55");
    Ok(())
}

#[test]
fn missing_logo_asset_is_tolerated() -> TestResult {
    let mut template = InvoiceTemplate::default();
    template.logo = Some(LogoSpec {
        path: "does/not/exist.png".into(),
        ..LogoSpec::default()
    });
    let pipeline = PipelineBuilder::new().with_template(template).build();

    let pdf = render(&pipeline, &sample_invoice())?;
    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 0);
    assert_pdf_contains_text!(pdf, "INVOICE");
    Ok(())
}

#[test]
fn resolved_logo_is_embedded_once() -> TestResult {
    let dir = tempfile::tempdir()?;
    let logo_path = dir.path().join("logo.png");
    let mut raster = image::RgbImage::new(8, 5);
    for pixel in raster.pixels_mut() {
        *pixel = image::Rgb([75, 139, 59]);
    }
    raster.save_with_format(&logo_path, image::ImageFormat::Png)?;

    let mut template = InvoiceTemplate::default();
    template.logo = Some(LogoSpec { path: logo_path, ..LogoSpec::default() });
    let pipeline = PipelineBuilder::new().with_template(template).build();

    let pdf = render(&pipeline, &sample_invoice())?;
    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 1);
    Ok(())
}

#[test]
fn missing_required_field_fails_the_render() -> TestResult {
    let mut invoice = sample_invoice();
    invoice.items[0].amount = String::new();
    match default_pipeline().render_invoice(&invoice) {
        Err(PipelineError::Record(RecordError::MissingField { field: Field::Amount, .. })) => Ok(()),
        other => panic!("expected a missing-field error, got {other:?}"),
    }
}

#[test]
fn documents_use_unembedded_helvetica() -> TestResult {
    let pdf = render(&default_pipeline(), &sample_invoice())?;
    let fonts = common::pdf_assertions::extract_font_names(&pdf.doc);
    assert_eq!(
        fonts,
        vec![
            "Helvetica".to_string(),
            "Helvetica-Bold".into(),
            "Helvetica-Oblique".into(),
        ]
    );
    Ok(())
}

#[test]
fn template_json_swaps_the_letterhead() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_template_json(r#"{ "letterhead": { "company_name": "Northern Lenses" } }"#)?
        .build();
    let pdf = render(&pipeline, &sample_invoice())?;
    assert_pdf_contains_text!(pdf, "Northern Lenses");
    Ok(())
}
