//! Vector drawing surface with SVG output.
//!
//! Records drawing commands as SVG elements and renders them to a document
//! string. Can also embed a rendered [`Framebuffer`] as a base64 PNG image,
//! which keeps a pixel-exact copy inside a scalable document.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;
use crate::output::PngEncoder;
use crate::surface::{Framebuffer, Surface};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Font size used for SVG text elements.
const FONT_SIZE: f32 = 12.0;

/// Average glyph advance as a fraction of the font size, used to estimate
/// text width (SVG has no text measurement without a rendering pass).
const ADVANCE_RATIO: f32 = 0.6;

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Rgba,
    },
    /// Line
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        stroke: Rgba,
    },
    /// Text
    Text {
        x: i32,
        y: i32,
        text: String,
        fill: Rgba,
    },
    /// Embedded raster image (base64 PNG)
    Image {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        data: String,
    },
}

/// Vector surface that renders to an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<SvgElement>,
}

impl SvgSurface {
    /// Create a new SVG surface with the given document dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Get the document width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the document height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Recorded elements, in drawing order.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Embed a framebuffer as a base64 PNG `<image>` element.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn embed_framebuffer(&mut self, fb: &Framebuffer, x: i32, y: i32) -> Result<()> {
        let png_bytes = PngEncoder::to_bytes(fb)?;
        let base64_data = STANDARD.encode(&png_bytes);

        self.elements.push(SvgElement::Image {
            x,
            y,
            width: fb.width(),
            height: fb.height(),
            data: format!("data:image/png;base64,{base64_data}"),
        });
        Ok(())
    }

    /// Render to an SVG document string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear_rect(&mut self, area: Rect, color: Rgba) {
        // An SVG "clear" is an opaque rectangle painted over the region.
        self.fill_rect(area, color);
    }

    fn fill_rect(&mut self, area: Rect, color: Rgba) {
        if area.is_empty() {
            return;
        }
        self.elements.push(SvgElement::Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
            fill: color,
        });
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        self.elements.push(SvgElement::Line {
            x1: x0,
            y1: y0,
            x2: x1,
            y2: y1,
            stroke: color,
        });
    }

    fn draw_text(&mut self, left: i32, baseline: i32, text: &str, color: Rgba) {
        self.elements.push(SvgElement::Text {
            x: left,
            y: baseline,
            text: text.to_string(),
            fill: color,
        });
    }

    fn text_width(&self, text: &str) -> i32 {
        (text.chars().count() as f32 * FONT_SIZE * ADVANCE_RATIO).ceil() as i32
    }
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
                fill.to_css()
            )
        }
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="1"/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Text { x, y, text, fill } => {
            // Escape XML special characters
            let escaped_text = text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
            format!(
                r#"<text x="{x}" y="{y}" font-size="{FONT_SIZE}" fill="{}" font-family="sans-serif">{escaped_text}</text>"#,
                fill.to_css()
            )
        }
        SvgElement::Image {
            x,
            y,
            width,
            height,
            data,
        } => {
            format!(
                r#"<image x="{x}" y="{y}" width="{width}" height="{height}" xlink:href="{data}"/>"#
            )
        }
    }
}
