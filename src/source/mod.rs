// src/source/mod.rs
//! Parses tabular purchase-order exports into invoice records.
//!
//! The export is CSV with one row per line item. Consecutive rows that share
//! an `Invoice Number` are folded into a single [`Invoice`] with several
//! [`LineItem`]s; in the common case of one row per invoice the mapping is
//! exactly one row, one invoice, one document.

use itertools::Itertools;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

/// The input file cannot be parsed at all. Fatal for the whole batch.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read the export: {0}")]
    Csv(#[from] csv::Error),

    #[error("the export is missing the `{0}` column")]
    MissingColumn(&'static str),
}

/// A single record is unusable. Confined to that invoice's render.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("line {line}: required field `{field}` is empty")]
    MissingField { line: u64, field: Field },

    #[error("line {line}: amount `{value}` is not a number")]
    InvalidAmount { line: u64, value: String },
}

/// The named columns of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InvoiceNumber,
    Date,
    Supplier,
    OrderNumber,
    Quantity,
    Product,
    Amount,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::InvoiceNumber,
        Field::Date,
        Field::Supplier,
        Field::OrderNumber,
        Field::Quantity,
        Field::Product,
        Field::Amount,
    ];

    /// The column header as it appears in the export.
    pub fn column(self) -> &'static str {
        match self {
            Field::InvoiceNumber => "Invoice Number",
            Field::Date => "Date",
            Field::Supplier => "Supplier",
            Field::OrderNumber => "Order Number",
            Field::Quantity => "Quantity",
            Field::Product => "Product",
            Field::Amount => "Amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One row of the export. Values stay strings: the renderer interpolates
/// them verbatim.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Invoice Number")]
    invoice_number: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Supplier")]
    supplier: String,
    #[serde(rename = "Order Number")]
    order_number: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Amount")]
    amount: String,
}

/// One line of an invoice's item table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub quantity: String,
    pub product: String,
    pub amount: String,
}

/// One invoice: the header fields of its first row plus one line item per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub invoice_number: String,
    pub date: String,
    pub supplier: String,
    pub order_number: String,
    pub items: Vec<LineItem>,
    /// Input line of the invoice's first row, for error reporting.
    pub line: u64,
}

impl Invoice {
    /// Checks that every field the layout consumes is present.
    pub fn validate(&self) -> Result<(), RecordError> {
        self.require(Field::InvoiceNumber, &self.invoice_number)?;
        self.require(Field::Date, &self.date)?;
        self.require(Field::Supplier, &self.supplier)?;
        self.require(Field::OrderNumber, &self.order_number)?;
        for item in &self.items {
            self.require(Field::Quantity, &item.quantity)?;
            self.require(Field::Product, &item.product)?;
            self.require(Field::Amount, &item.amount)?;
        }
        Ok(())
    }

    /// The invoice total: the decimal sum of the line amounts.
    ///
    /// `Decimal` preserves scale, so a one-item invoice's total prints
    /// exactly like the line amount it was parsed from. Amounts are taken as
    /// final line totals and are never multiplied by the quantity.
    pub fn total(&self) -> Result<Decimal, RecordError> {
        let mut total = Decimal::ZERO;
        for item in &self.items {
            total += Decimal::from_str(item.amount.trim()).map_err(|_| {
                RecordError::InvalidAmount {
                    line: self.line,
                    value: item.amount.clone(),
                }
            })?;
        }
        Ok(total)
    }

    fn require(&self, field: Field, value: &str) -> Result<(), RecordError> {
        if value.trim().is_empty() {
            Err(RecordError::MissingField { line: self.line, field })
        } else {
            Ok(())
        }
    }
}

/// Reads the export and groups its rows into invoices, in source order.
pub fn read_invoices<R: Read>(reader: R) -> Result<Vec<Invoice>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for field in Field::ALL {
        if !headers.iter().any(|h| h == field.column()) {
            return Err(SourceError::MissingColumn(field.column()));
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row: Row = record.deserialize(Some(&headers))?;
        rows.push((line, row));
    }

    let grouped = rows
        .into_iter()
        .chunk_by(|(_, row)| row.invoice_number.clone());

    let mut invoices = Vec::new();
    for (invoice_number, chunk) in &grouped {
        let group: Vec<(u64, Row)> = chunk.collect();
        let (line, first) = &group[0];
        invoices.push(Invoice {
            invoice_number,
            date: first.date.clone(),
            supplier: first.supplier.clone(),
            order_number: first.order_number.clone(),
            line: *line,
            items: group
                .iter()
                .map(|(_, row)| LineItem {
                    quantity: row.quantity.clone(),
                    product: row.product.clone(),
                    amount: row.amount.clone(),
                })
                .collect(),
        });
    }
    Ok(invoices)
}
