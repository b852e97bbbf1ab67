// src/layout/elements.rs
use crate::layout::fonts::Font;
use crate::template::Color;

/// A drawing primitive placed at absolute page coordinates. `x`/`y` are the
/// top-left corner in top-down coordinates; the renderer flips to the PDF's
/// bottom-up space.
#[derive(Debug, Clone)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
    pub style: ElementStyle,
}

#[derive(Debug, Clone)]
pub enum LayoutElement {
    Text(TextElement),
    Rect(RectElement),
    Line(LineElement),
    Image(ImageElement),
}

#[derive(Debug, Clone)]
pub struct TextElement {
    pub content: String,
}

/// A rectangle; filled when the style carries a background, outlined when it
/// carries a stroke.
#[derive(Debug, Clone)]
pub struct RectElement;

/// A straight stroke from `(x, y)` to `(x + width, y + height)`.
#[derive(Debug, Clone)]
pub struct LineElement;

/// Reference to an image resource registered with the document writer.
#[derive(Debug, Clone)]
pub struct ImageElement {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ElementStyle {
    pub font: Font,
    pub font_size: f32,
    pub color: Color,
    pub background: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Default for ElementStyle {
    fn default() -> Self {
        ElementStyle {
            font: Font::Helvetica,
            font_size: 10.0,
            color: Color::BLACK,
            background: None,
            stroke: None,
        }
    }
}

impl PositionedElement {
    /// A text run whose baseline sits at `baseline` (top-down coordinates).
    /// The renderer places baselines at `y + 0.8 * font_size`.
    pub fn text_at_baseline(
        x: f32,
        baseline: f32,
        content: impl Into<String>,
        font: Font,
        font_size: f32,
        color: Color,
    ) -> Self {
        let content = content.into();
        let width = font.text_width(&content, font_size);
        PositionedElement {
            x,
            y: baseline - font_size * 0.8,
            width,
            height: font_size,
            element: LayoutElement::Text(TextElement { content }),
            style: ElementStyle { font, font_size, color, ..ElementStyle::default() },
        }
    }

    pub fn filled_rect(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Self {
        PositionedElement {
            x,
            y,
            width,
            height,
            element: LayoutElement::Rect(RectElement),
            style: ElementStyle { background: Some(fill), ..ElementStyle::default() },
        }
    }

    pub fn outlined_rect(x: f32, y: f32, width: f32, height: f32, stroke: Stroke) -> Self {
        PositionedElement {
            x,
            y,
            width,
            height,
            element: LayoutElement::Rect(RectElement),
            style: ElementStyle { stroke: Some(stroke), ..ElementStyle::default() },
        }
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, stroke: Stroke) -> Self {
        PositionedElement {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
            element: LayoutElement::Line(LineElement),
            style: ElementStyle { stroke: Some(stroke), ..ElementStyle::default() },
        }
    }

    pub fn image(name: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        PositionedElement {
            x,
            y,
            width,
            height,
            element: LayoutElement::Image(ImageElement { name: name.into() }),
            style: ElementStyle::default(),
        }
    }
}
