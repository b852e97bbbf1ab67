// src/layout/fonts.rs
//! Metrics for the base-14 Helvetica family.
//!
//! The renderer references these fonts as unembedded Type1 standard fonts,
//! so layout needs its own advance widths for centering and right-alignment.
//! The tables below are the Adobe AFM widths (thousandths of an em) for the
//! printable ASCII range; Helvetica-Oblique shares the upright widths.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique];

    /// PostScript name used in the PDF font dictionary.
    pub fn base_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Resource name the content stream selects the font by.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    /// Advance width of `text` at `font_size` points.
    pub fn text_width(self, text: &str, font_size: f32) -> f32 {
        let table: &[u16; 95] = match self {
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            _ => &HELVETICA_WIDTHS,
        };
        let millis: u32 = text
            .chars()
            .map(|c| match u32::from(c) {
                cp @ 0x20..=0x7e => u32::from(table[(cp - 0x20) as usize]),
                // outside the table: fall back to an average advance
                _ => 600,
            })
            .sum();
        millis as f32 * font_size / 1000.0
    }
}

/// Helvetica.afm character widths for U+0020..=U+007E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //  !"#$%&'()*+,-./
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0123456789:;<=>?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @ABCDEFGHIJKLMNO
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // PQRSTUVWXYZ[\]^_
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `abcdefghijklmno
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // pqrstuvwxyz{|}~
];

/// Helvetica-Bold.afm character widths for U+0020..=U+007E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_linearly_with_size() {
        let at_ten = Font::Helvetica.text_width("INVOICE", 10.0);
        let at_twenty = Font::Helvetica.text_width("INVOICE", 20.0);
        assert!((at_twenty - 2.0 * at_ten).abs() < 1e-4);
    }

    #[test]
    fn space_is_278_millis() {
        assert!((Font::Helvetica.text_width(" ", 1000.0) - 278.0).abs() < 1e-3);
        assert!((Font::HelveticaBold.text_width(" ", 1000.0) - 278.0).abs() < 1e-3);
    }

    #[test]
    fn bold_runs_wider_than_upright() {
        let upright = Font::Helvetica.text_width("TOTAL", 12.0);
        let bold = Font::HelveticaBold.text_width("TOTAL", 12.0);
        assert!(bold > upright);
    }

    #[test]
    fn oblique_shares_upright_widths() {
        let upright = Font::Helvetica.text_width("Optician", 9.0);
        let oblique = Font::HelveticaOblique.text_width("Optician", 9.0);
        assert_eq!(upright, oblique);
    }
}
