// src/main.rs
use docket::{PipelineBuilder, PipelineError};
use std::path::Path;
use std::{env, fs, process};

/// A simple CLI to render one PDF invoice per record of a purchase-order
/// export.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Renders one PDF invoice per record of a purchase-order CSV export.");
        eprintln!();
        eprintln!("Usage: {} <export.csv> <output-dir> [template.json]", args[0]);
        eprintln!();
        eprintln!("The optional template JSON overrides the built-in letterhead and");
        eprintln!("layout; any subset of fields may be given.");
        process::exit(1);
    }

    let mut builder = PipelineBuilder::new();
    if let Some(template_path) = args.get(3) {
        builder = builder.with_template_file(template_path)?;
    }
    let pipeline = builder.build();

    let input = fs::File::open(&args[1])?;
    let report = pipeline.generate(input, Path::new(&args[2]))?;

    println!("{} invoice(s) written to {}", report.written.len(), args[2]);
    if !report.is_clean() {
        eprintln!("{} invoice(s) could not be rendered:", report.failed.len());
        for failure in &report.failed {
            eprintln!("  `{}` (line {}): {}", failure.invoice_number, failure.line, failure.error);
        }
        process::exit(2);
    }
    Ok(())
}
