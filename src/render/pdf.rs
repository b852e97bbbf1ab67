// src/render/pdf.rs
//! An in-memory PDF writer using the `lopdf` library. It builds the
//! document's object graph and serializes it on `finish()`.
//!
//! Text uses the base-14 Helvetica family as unembedded Type1 fonts with
//! WinAnsi encoding, so documents carry no font programs. The logo, when
//! present, is a shared DeviceRGB image XObject.

use crate::layout::fonts::Font;
use crate::layout::{LOGO_RESOURCE, LayoutElement, PositionedElement, Stroke};
use crate::render::{LogoAsset, RenderError};
use crate::template::Color;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Write;

pub struct DocumentBuilder {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl DocumentBuilder {
    pub fn new(logo: Option<&LogoAsset>) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in Font::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), font_id);
        }
        let mut resources = dictionary! { "Font" => font_dict };

        if let Some(asset) = logo {
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => asset.width() as i64,
                    "Height" => asset.height() as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                asset.rgb().to_vec(),
            );
            let image_id = document.add_object(stream);
            resources.set("XObject", dictionary! { LOGO_RESOURCE => image_id });
        }
        document
            .objects
            .insert(resources_id, Object::Dictionary(resources));

        // The Pages node is filled in by finish() once the kids are known.
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! { "Type" => "Pages", "Kids" => vec![], "Count" => 0 }),
        );
        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        DocumentBuilder { document, pages_id, resources_id, page_ids: Vec::new() }
    }

    pub fn add_page(
        &mut self,
        width: f32,
        height: f32,
        elements: &[PositionedElement],
    ) -> Result<(), RenderError> {
        let mut page = PageContext::new(height);
        for element in elements {
            page.draw(element);
        }
        let content = page.finish();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed = encoder.finish()?;
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Seals the document and yields its bytes. Consuming the builder makes
    /// further drawing impossible.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        if let Some(Object::Dictionary(pages)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages.set("Kids", kids);
            pages.set("Count", self.page_ids.len() as i32);
        }
        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// Accumulates the content operations of a single page, tracking font and
/// fill-color state to avoid redundant operators.
struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default)]
struct PageRenderState {
    font: Option<(Font, f32)>,
    fill_color: Option<Color>,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        PageContext {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn draw(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(&text.content, el),
            LayoutElement::Rect(_) => self.draw_rect(el),
            LayoutElement::Line(_) => self.draw_line(el),
            LayoutElement::Image(image) => self.draw_image(&image.name, el),
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: Font, size: f32) {
        if self.state.font != Some((font, size)) {
            self.op("Tf", vec![font.resource_name().into(), size.into()]);
            self.state.font = Some((font, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.op("rg", rgb_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn draw_text(&mut self, text: &str, el: &PositionedElement) {
        if text.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(el.style.font, el.style.font_size);
        self.set_fill_color(el.style.color);
        let baseline_y = el.y + el.style.font_size * 0.8;
        let pdf_y = self.page_height - baseline_y;
        self.op("Td", vec![el.x.into(), pdf_y.into()]);
        self.op("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, el: &PositionedElement) {
        let y = self.page_height - (el.y + el.height);
        if let Some(fill) = el.style.background {
            self.set_fill_color(fill);
            self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
            self.op("f", vec![]);
        }
        if let Some(stroke) = el.style.stroke {
            self.set_stroke(stroke);
            self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
            self.op("S", vec![]);
        }
    }

    fn draw_line(&mut self, el: &PositionedElement) {
        let Some(stroke) = el.style.stroke else { return };
        self.set_stroke(stroke);
        let y1 = self.page_height - el.y;
        let y2 = self.page_height - (el.y + el.height);
        self.op("m", vec![el.x.into(), y1.into()]);
        self.op("l", vec![(el.x + el.width).into(), y2.into()]);
        self.op("S", vec![]);
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.op("w", vec![stroke.width.into()]);
        self.op("RG", rgb_operands(stroke.color));
    }

    fn draw_image(&mut self, name: &str, el: &PositionedElement) {
        let y = self.page_height - (el.y + el.height);
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![
                el.width.into(),
                0.into(),
                0.into(),
                el.height.into(),
                el.x.into(),
                y.into(),
            ],
        );
        self.op("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.op("Q", vec![]);
    }
}

fn rgb_operands(color: Color) -> Vec<Object> {
    vec![
        (color.r as f32 / 255.0).into(),
        (color.g as f32 / 255.0).into(),
        (color.b as f32 / 255.0).into(),
    ]
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
