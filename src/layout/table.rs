// src/layout/table.rs
//! Synthesis and placement of the item table.
//!
//! The table pads itself with blank rows up to the template's fill depth, so
//! a sparsely itemized invoice still presents a full-height table. It is
//! anchored at its bottom edge: invoices with more items than the fill depth
//! holds give up their padding first and then raise the table's top edge.

use crate::layout::elements::{PositionedElement, Stroke};
use crate::layout::fonts::Font;
use crate::source::{Invoice, RecordError};
use crate::template::{Color, TableLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Item,
    Padding,
    Total,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub kind: RowKind,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Builds the complete row set for an invoice: header, one row per line
/// item, blank padding up to the fill-depth capacity, and the total row.
pub fn build_rows(layout: &TableLayout, invoice: &Invoice) -> Result<Vec<TableRow>, RecordError> {
    let columns = layout.column_widths.len();
    let capacity = (layout.fill_depth / layout.row_height).floor() as usize;
    let padding = capacity.saturating_sub(2 + invoice.items.len());

    let mut rows = Vec::with_capacity(2 + invoice.items.len() + padding);
    rows.push(TableRow { kind: RowKind::Header, cells: layout.headers.clone() });
    for item in &invoice.items {
        rows.push(TableRow {
            kind: RowKind::Item,
            cells: vec![item.quantity.clone(), item.product.clone(), item.amount.clone()],
        });
    }
    for _ in 0..padding {
        rows.push(TableRow { kind: RowKind::Padding, cells: vec![String::new(); columns] });
    }
    let mut total_cells = vec![String::new(); columns];
    total_cells[columns - 2] = layout.total_label.clone();
    total_cells[columns - 1] = invoice.total()?.to_string();
    rows.push(TableRow { kind: RowKind::Total, cells: total_cells });
    Ok(rows)
}

/// Places the rows on the page. `top` is where the table top sits when the
/// rows exactly fill the template's depth; the bottom edge is fixed at
/// `top + fill_depth`, so an overfull table grows upward instead of running
/// off the page.
pub fn layout_table(
    layout: &TableLayout,
    rows: &[TableRow],
    x: f32,
    top: f32,
) -> Vec<PositionedElement> {
    let width: f32 = layout.column_widths.iter().sum();
    let height = rows.len() as f32 * layout.row_height;
    let bottom = top + layout.fill_depth;
    let table_top = bottom - height;

    let thin = Stroke { width: 0.5, color: Color::BLACK };
    let thick = Stroke { width: 1.0, color: Color::BLACK };

    let mut elements = Vec::new();

    // row backgrounds, painted before grid and text
    for (i, row) in rows.iter().enumerate() {
        let row_top = table_top + i as f32 * layout.row_height;
        let fill = match row.kind {
            RowKind::Header => Some(layout.header_background),
            RowKind::Total => Some(Color::WHITE),
            _ => None,
        };
        if let Some(fill) = fill {
            elements.push(PositionedElement::filled_rect(
                x,
                row_top,
                width,
                layout.row_height,
                fill,
            ));
        }
    }

    // inner grid: row boundaries, then column boundaries
    for i in 1..rows.len() {
        let line_y = table_top + i as f32 * layout.row_height;
        let stroke = if i == 1 { thick } else { thin };
        elements.push(PositionedElement::line(x, line_y, x + width, line_y, stroke));
    }
    let mut column_x = x;
    for column_width in &layout.column_widths[..layout.column_widths.len() - 1] {
        column_x += column_width;
        elements.push(PositionedElement::line(
            column_x,
            table_top,
            column_x,
            table_top + height,
            thin,
        ));
    }
    elements.push(PositionedElement::outlined_rect(x, table_top, width, height, thick));

    // cell text
    for (i, row) in rows.iter().enumerate() {
        let row_top = table_top + i as f32 * layout.row_height;
        let mut cell_x = x;
        for (column, content) in row.cells.iter().enumerate() {
            let cell_width = layout.column_widths[column];
            if !content.is_empty() {
                let (font, size) = cell_font(layout, row.kind, column);
                let text_width = font.text_width(content, size);
                let text_x = match cell_align(row.kind, column, layout.column_widths.len()) {
                    Align::Left => cell_x + layout.cell_padding,
                    Align::Center => cell_x + (cell_width - text_width) / 2.0,
                    Align::Right => cell_x + cell_width - layout.cell_padding - text_width,
                };
                let baseline = row_top + (layout.row_height + size * 0.7) / 2.0;
                elements.push(PositionedElement::text_at_baseline(
                    text_x,
                    baseline,
                    content.clone(),
                    font,
                    size,
                    Color::BLACK,
                ));
            }
            cell_x += cell_width;
        }
    }

    elements
}

fn cell_font(layout: &TableLayout, kind: RowKind, column: usize) -> (Font, f32) {
    match kind {
        RowKind::Header => (Font::HelveticaBold, layout.header_font_size),
        RowKind::Total if column >= 1 => (Font::HelveticaBold, layout.body_font_size),
        _ => (Font::Helvetica, layout.body_font_size),
    }
}

fn cell_align(kind: RowKind, column: usize, columns: usize) -> Align {
    match kind {
        RowKind::Header => Align::Center,
        RowKind::Total if column == columns - 1 => Align::Right,
        _ => Align::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::LayoutElement;
    use crate::source::LineItem;

    fn invoice(items: Vec<LineItem>) -> Invoice {
        Invoice {
            invoice_number: "1001".into(),
            date: "2024-03-01".into(),
            supplier: "Acme Optical".into(),
            order_number: "PO-77".into(),
            items,
            line: 2,
        }
    }

    fn item(amount: &str) -> LineItem {
        LineItem {
            quantity: "2".into(),
            product: "Reading glasses".into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn single_item_table_has_thirteen_rows() {
        let layout = TableLayout::default();
        let rows = build_rows(&layout, &invoice(vec![item("45.50")])).unwrap();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].kind, RowKind::Header);
        assert_eq!(rows[1].kind, RowKind::Item);
        assert!(rows[2..12].iter().all(|r| r.kind == RowKind::Padding));
        assert_eq!(rows[12].kind, RowKind::Total);
    }

    #[test]
    fn padding_shrinks_as_items_grow() {
        let layout = TableLayout::default();
        let rows =
            build_rows(&layout, &invoice(vec![item("1.00"), item("2.00"), item("3.00")])).unwrap();
        assert_eq!(rows.len(), 13);
        let padding = rows.iter().filter(|r| r.kind == RowKind::Padding).count();
        assert_eq!(padding, 8);
    }

    #[test]
    fn overfull_table_drops_padding_entirely() {
        let layout = TableLayout::default();
        let items = (0..14).map(|_| item("1.00")).collect();
        let rows = build_rows(&layout, &invoice(items)).unwrap();
        assert_eq!(rows.len(), 16); // header + 14 items + total
        assert!(rows.iter().all(|r| r.kind != RowKind::Padding));
    }

    #[test]
    fn total_copies_a_single_amount_exactly() {
        let layout = TableLayout::default();
        let rows = build_rows(&layout, &invoice(vec![item("45.50")])).unwrap();
        let total = rows.last().unwrap();
        assert_eq!(total.cells, vec!["".to_string(), "TOTAL".into(), "45.50".into()]);
        assert_eq!(total.cells[2], rows[1].cells[2]);
    }

    #[test]
    fn total_sums_multiple_amounts() {
        let layout = TableLayout::default();
        let rows = build_rows(&layout, &invoice(vec![item("45.50"), item("4.05")])).unwrap();
        assert_eq!(rows.last().unwrap().cells[2], "49.55");
    }

    #[test]
    fn table_top_stays_put_at_capacity_and_rises_beyond_it() {
        let layout = TableLayout::default();
        let top = 390.0;

        let rows = build_rows(&layout, &invoice(vec![item("1.00")])).unwrap();
        let elements = layout_table(&layout, &rows, 40.0, top);
        let outline = elements
            .iter()
            .find(|e| matches!(e.element, LayoutElement::Rect(_)) && e.style.stroke.is_some())
            .unwrap();
        assert!((outline.y - top).abs() < 1e-4);

        let many = (0..14).map(|_| item("1.00")).collect();
        let rows = build_rows(&layout, &invoice(many)).unwrap();
        let elements = layout_table(&layout, &rows, 40.0, top);
        let outline = elements
            .iter()
            .find(|e| matches!(e.element, LayoutElement::Rect(_)) && e.style.stroke.is_some())
            .unwrap();
        assert!(outline.y < top);
        // the bottom edge never moves
        assert!((outline.y + outline.height - (top + layout.fill_depth)).abs() < 1e-4);
    }
}
