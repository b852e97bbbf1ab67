// src/template.rs
//! The invoice template: every fixed string, color, and block dimension of
//! the rendered document, gathered in one configuration structure.
//!
//! Defaults reproduce the practice's current letterhead. A JSON file with
//! the same shape can override any subset of fields, so the template can be
//! swapped without touching layout code.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::path::PathBuf;

/// An opaque RGB color. Accepts `"#RRGGBB"` strings or `{r, g, b}` maps in
/// template JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("`{s}` is not a #RRGGBB color"));
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("`{s}` is not a #RRGGBB color"))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Color::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub size: PageSize,
    pub margin: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout { size: PageSize::Letter, margin: 40.0 }
    }
}

/// The record-independent header content: branding and contact strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    pub company_name: String,
    pub credential_line: String,
    pub practice_line: String,
    pub street_line: String,
    pub city_line: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub website: String,
    pub accent: Color,
}

impl Default for Letterhead {
    fn default() -> Self {
        Letterhead {
            company_name: "The Village Optician Ltd".into(),
            credential_line: "MICHAEL GREENBERG, BSc (Hons), MCOptom.".into(),
            practice_line: "OPHTHALMIC OPTICIAN & CONTACT LENS PRACTITIONER".into(),
            street_line: "470 BURY NEW ROAD, PRESTWICH".into(),
            city_line: "MANCHESTER, M25 1AX".into(),
            phone: "Telephone 0161 773 0069".into(),
            fax: "Fax 0161 773 0170".into(),
            email: "Email: reception@thevillageopticianltd.co.uk".into(),
            website: "www.thevillageopticianltd.co.uk".into(),
            accent: Color { r: 0x4b, g: 0x8b, b: 0x3b },
        }
    }
}

/// Placement box for the optional letterhead logo. The asset itself is
/// resolved once when the pipeline is built, never probed per render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSpec {
    pub path: PathBuf,
    pub width: f32,
    pub height: f32,
}

impl Default for LogoSpec {
    fn default() -> Self {
        LogoSpec { path: PathBuf::from("assets/logo.png"), width: 80.0, height: 50.0 }
    }
}

/// Geometry of the bordered box holding the per-record invoice metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailsBox {
    /// Distance from the top margin down to the box's top edge.
    pub offset: f32,
    pub width: f32,
    pub height: f32,
    /// Baseline pitch of the labeled detail lines.
    pub line_pitch: f32,
    /// Baseline pitch of the recipient address lines.
    pub address_pitch: f32,
}

impl Default for DetailsBox {
    fn default() -> Self {
        DetailsBox {
            offset: 200.0,
            width: 350.0,
            height: 130.0,
            line_pitch: 15.0,
            address_pitch: 12.0,
        }
    }
}

/// The centered document title between letterhead and details box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleBlock {
    pub text: String,
    /// Baseline distance from the top margin.
    pub offset: f32,
    pub font_size: f32,
}

impl Default for TitleBlock {
    fn default() -> Self {
        TitleBlock { text: "INVOICE".into(), offset: 150.0, font_size: 28.0 }
    }
}

/// Geometry and styling of the item table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub headers: Vec<String>,
    pub column_widths: Vec<f32>,
    pub row_height: f32,
    /// Vertical extent the table pads itself to with blank rows. The row
    /// capacity is `fill_depth / row_height`, rounded down.
    pub fill_depth: f32,
    /// Gap between the details box and the table top.
    pub gap: f32,
    pub total_label: String,
    pub header_background: Color,
    pub header_font_size: f32,
    pub body_font_size: f32,
    /// Horizontal inset of cell text from the cell edge.
    pub cell_padding: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        TableLayout {
            headers: vec!["Quantity".into(), "Description".into(), "Amount".into()],
            column_widths: vec![80.0, 300.0, 100.0],
            row_height: 22.0,
            fill_depth: 286.0,
            gap: 20.0,
            total_label: "TOTAL".into(),
            header_background: Color { r: 0xe5, g: 0xe5, b: 0xe5 },
            header_font_size: 12.0,
            body_font_size: 10.0,
            cell_padding: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceTemplate {
    pub page: PageLayout,
    pub letterhead: Letterhead,
    pub title: TitleBlock,
    pub details: DetailsBox,
    /// Recipient address printed below the invoice details.
    pub recipient: Vec<String>,
    pub logo: Option<LogoSpec>,
    pub table: TableLayout,
}

impl Default for InvoiceTemplate {
    fn default() -> Self {
        InvoiceTemplate {
            page: PageLayout::default(),
            letterhead: Letterhead::default(),
            title: TitleBlock::default(),
            details: DetailsBox::default(),
            recipient: vec![
                "Vista".into(),
                "18 Eli Hacohen Street".into(),
                "Jerusalem".into(),
                "9551120".into(),
            ],
            logo: Some(LogoSpec::default()),
            table: TableLayout::default(),
        }
    }
}

impl InvoiceTemplate {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_matches_the_practice_letterhead() {
        let template = InvoiceTemplate::default();
        assert_eq!(template.page.size.dimensions_pt(), (612.0, 792.0));
        assert_eq!(template.page.margin, 40.0);
        assert_eq!(template.table.column_widths, vec![80.0, 300.0, 100.0]);
        assert_eq!(template.table.row_height, 22.0);
        assert_eq!(template.title.text, "INVOICE");
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            Color::from_hex("#4B8B3B").unwrap(),
            Color { r: 0x4b, g: 0x8b, b: 0x3b }
        );
        assert!(Color::from_hex("#4B8B").is_err());
        assert!(Color::from_hex("not a color").is_err());
    }

    #[test]
    fn json_overrides_are_partial() {
        let template = InvoiceTemplate::from_json(
            r##"{
                "letterhead": { "company_name": "Northern Lenses", "accent": "#223344" },
                "recipient": ["Somewhere", "Else"],
                "table": { "fill_depth": 308.0 }
            }"##,
        )
        .unwrap();
        assert_eq!(template.letterhead.company_name, "Northern Lenses");
        assert_eq!(template.letterhead.accent, Color { r: 0x22, g: 0x33, b: 0x44 });
        assert_eq!(template.recipient, vec!["Somewhere".to_string(), "Else".to_string()]);
        assert_eq!(template.table.fill_depth, 308.0);
        // untouched sections keep their defaults
        assert_eq!(template.table.row_height, 22.0);
        assert_eq!(template.page.margin, 40.0);
    }
}
