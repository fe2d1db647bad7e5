//! Histogram bar-chart renderer.
//!
//! Draws a [`Histogram`](crate::histogram::Histogram) into a rectangular area
//! of any [`Surface`]: a cleared background, an L-shaped axis, one bar per
//! bucket scaled to the available vertical space, and two labels per bar (the
//! bucket's range lower bound beneath the axis, its count above the bar).
//!
//! The renderer is stateless apart from its [`Style`]; it re-reads the
//! histogram on every call, so pairing it with a change observer that requests
//! a redraw keeps the picture current.

use crate::color::Rgba;
use crate::geometry::Rect;
use crate::histogram::{Bucket, Histogram};
use crate::surface::Surface;

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Background fill for the whole drawing area.
    pub background: Rgba,
    /// Axis line color.
    pub axis: Rgba,
    /// Label text color.
    pub text: Rgba,
    /// Bar fill color.
    pub bar: Rgba,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            axis: Rgba::BLACK,
            text: Rgba::BLACK,
            bar: Rgba::BLUE,
        }
    }
}

/// Renders a histogram into a target rectangle on a drawing surface.
///
/// # Example
///
/// ```
/// use binview::geometry::Rect;
/// use binview::histogram::Histogram;
/// use binview::render::HistogramRenderer;
/// use binview::surface::Framebuffer;
///
/// let histogram = Histogram::new(&[0, 1, 2, 10], 3).unwrap();
/// let mut surface = Framebuffer::new(250, 150).unwrap();
/// HistogramRenderer::new().render(&histogram, &mut surface, Rect::new(0, 0, 250, 150));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistogramRenderer {
    style: Style,
}

impl HistogramRenderer {
    /// Padding between the drawing area edge and the plot.
    pub const PADDING: i32 = 10;
    /// Height of one text row.
    pub const TEXT_HEIGHT: i32 = 15;
    /// Gap between a bar's top edge and its count label baseline.
    pub const LABEL_OFFSET: i32 = 10;
    /// Horizontal spacing before each bar.
    pub const BAR_GAP: i32 = 5;
    /// Range labels alternate over this many rows below the axis.
    const LABEL_ROWS: i32 = 2;

    /// Create a renderer with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom style.
    #[must_use]
    pub const fn with_style(style: Style) -> Self {
        Self { style }
    }

    /// The renderer's style.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Draw `histogram` into `area` on `surface`.
    ///
    /// When the histogram's largest bucket count is zero (no data, or every
    /// bucket empty) only the background and axis are drawn; there is no
    /// height-per-count scale to apply.
    pub fn render<S: Surface>(&self, histogram: &Histogram, surface: &mut S, area: Rect) {
        surface.clear_rect(area, self.style.background);

        let plot = Self::plot_area(area);
        surface.draw_line(
            plot.left(),
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            self.style.axis,
        );
        surface.draw_line(
            plot.left(),
            plot.bottom(),
            plot.left(),
            plot.top(),
            self.style.axis,
        );

        let max_count = histogram.max_count();
        if max_count == 0 {
            return;
        }

        let height_per_count = f64::from(plot.height) / max_count as f64;
        let total_width_per_bar = plot.width as i32 / histogram.bucket_count() as i32;
        let bar_width = total_width_per_bar - Self::BAR_GAP;

        for (index, bucket) in histogram.buckets().iter().enumerate() {
            let bar_left = plot.left() + Self::BAR_GAP + index as i32 * total_width_per_bar;
            let bar_height = (height_per_count * bucket.count() as f64).round() as i32;
            let bar_top = plot.bottom() - bar_height;
            let bar_middle = bar_left + bar_width / 2;

            surface.fill_rect(
                Rect::new(bar_left, bar_top, bar_width.max(0) as u32, bar_height as u32),
                self.style.bar,
            );
            self.draw_range_label(surface, bar_middle, plot.bottom(), index, bucket);
            self.draw_count_label(surface, bar_middle, bar_top, bucket);
        }
    }

    /// The plotting rectangle: the drawing area minus the label margins.
    ///
    /// Top margin reserves a text row for count labels, bottom margin reserves
    /// two rows for the alternating range labels.
    fn plot_area(area: Rect) -> Rect {
        area.inset(
            Self::PADDING,
            Self::PADDING + Self::LABEL_OFFSET + Self::TEXT_HEIGHT,
            Self::PADDING,
            Self::PADDING + Self::LABEL_ROWS * Self::TEXT_HEIGHT,
        )
    }

    /// Range lower-bound label below the axis, row alternating by bar index.
    fn draw_range_label<S: Surface>(
        &self,
        surface: &mut S,
        middle: i32,
        axis_y: i32,
        index: usize,
        bucket: &Bucket,
    ) {
        let label = bucket.range_min().to_string();
        let row_offset = Self::TEXT_HEIGHT * (1 + index as i32 % Self::LABEL_ROWS);
        self.draw_text_centred(surface, middle, axis_y + row_offset, &label);
    }

    /// Count label above the bar's top edge.
    fn draw_count_label<S: Surface>(
        &self,
        surface: &mut S,
        middle: i32,
        bar_top: i32,
        bucket: &Bucket,
    ) {
        let label = bucket.count().to_string();
        self.draw_text_centred(surface, middle, bar_top - Self::LABEL_OFFSET, &label);
    }

    /// Centre a text run horizontally on `middle` using the surface's measure.
    fn draw_text_centred<S: Surface>(
        &self,
        surface: &mut S,
        middle: i32,
        baseline: i32,
        text: &str,
    ) {
        let width = surface.text_width(text);
        surface.draw_text(middle - width / 2, baseline, text, self.style.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Framebuffer, SvgElement, SvgSurface};

    const AREA: Rect = Rect::new(0, 0, 200, 150);

    fn blue_pixel_count(fb: &Framebuffer) -> usize {
        fb.pixels()
            .chunks_exact(4)
            .filter(|chunk| *chunk == Rgba::BLUE.to_array())
            .count()
    }

    #[test]
    fn test_plot_area_margins() {
        let plot = HistogramRenderer::plot_area(AREA);
        assert_eq!(plot, Rect::new(10, 35, 180, 75));
    }

    #[test]
    fn test_degenerate_histogram_draws_axis_only() {
        let histogram = Histogram::new(&[], 4).unwrap();
        let mut fb = Framebuffer::new(200, 150).unwrap();
        HistogramRenderer::new().render(&histogram, &mut fb, AREA);

        assert_eq!(blue_pixel_count(&fb), 0);
        // Axis pixels present along the plot's bottom and left edges.
        assert_eq!(fb.get_pixel(10, 110), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(100, 110), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        // Everything else is background.
        assert_eq!(fb.get_pixel(100, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_bars_scale_to_plot_height() {
        // Buckets: [0,3]=3, [4,7]=0, [8,11]=1; max count 3 fills the plot.
        let histogram = Histogram::new(&[0, 1, 2, 10], 3).unwrap();
        let mut fb = Framebuffer::new(200, 150).unwrap();
        HistogramRenderer::new().render(&histogram, &mut fb, AREA);

        // Bar 0 spans x 15..70, y 35..110 (height 75 = full plot height).
        assert_eq!(fb.get_pixel(20, 36), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(69, 109), Some(Rgba::BLUE));
        // Bar 1 is empty: its column stays background below the top margin.
        assert_eq!(fb.get_pixel(100, 100), Some(Rgba::WHITE));
        // Bar 2 spans x 135..190, y 85..110 (height 25 for count 1).
        assert_eq!(fb.get_pixel(140, 90), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(140, 80), Some(Rgba::WHITE));
    }

    #[test]
    fn test_svg_geometry() {
        let histogram = Histogram::new(&[0, 1, 2, 10], 3).unwrap();
        let mut surface = SvgSurface::new(200, 150);
        HistogramRenderer::new().render(&histogram, &mut surface, AREA);

        let elements = surface.elements();

        // Cleared background covering the whole area.
        assert!(matches!(
            elements[0],
            SvgElement::Rect {
                x: 0,
                y: 0,
                width: 200,
                height: 150,
                fill: Rgba::WHITE,
            }
        ));
        // Horizontal then vertical axis along the plot edges.
        assert!(matches!(
            elements[1],
            SvgElement::Line {
                x1: 10,
                y1: 110,
                x2: 190,
                y2: 110,
                ..
            }
        ));
        assert!(matches!(
            elements[2],
            SvgElement::Line {
                x1: 10,
                y1: 110,
                x2: 10,
                y2: 35,
                ..
            }
        ));
        // First bar fills the plot height.
        assert!(matches!(
            elements[3],
            SvgElement::Rect {
                x: 15,
                y: 35,
                width: 55,
                height: 75,
                fill: Rgba::BLUE,
            }
        ));
    }

    #[test]
    fn test_labels_centred_and_alternating() {
        let histogram = Histogram::new(&[0, 1, 2, 10], 3).unwrap();
        let mut surface = SvgSurface::new(200, 150);
        HistogramRenderer::new().render(&histogram, &mut surface, AREA);

        let texts: Vec<(i32, i32, String)> = surface
            .elements()
            .iter()
            .filter_map(|element| match element {
                SvgElement::Text { x, y, text, .. } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect();

        // Two labels per bar: range then count.
        assert_eq!(texts.len(), 6);

        let half_width = surface.text_width("0") / 2;

        // Bar 0: middle 42, range label on row 1, count label above the bar.
        assert_eq!(texts[0], (42 - half_width, 125, "0".to_string()));
        assert_eq!(texts[1], (42 - half_width, 25, "3".to_string()));
        // Bar 1: middle 102, range label alternates to row 2.
        assert_eq!(texts[2], (102 - half_width, 140, "4".to_string()));
        // Bar 2: middle 162, back to row 1; count label rides its shorter bar.
        assert_eq!(texts[4], (162 - half_width, 125, "8".to_string()));
        assert_eq!(texts[5], (162 - half_width, 75, "1".to_string()));
    }

    #[test]
    fn test_custom_style() {
        let style = Style {
            background: Rgba::BLACK,
            axis: Rgba::WHITE,
            text: Rgba::WHITE,
            bar: Rgba::GREEN,
        };
        let histogram = Histogram::new(&[1, 1, 1], 1).unwrap();
        let mut fb = Framebuffer::new(200, 150).unwrap();
        HistogramRenderer::with_style(style).render(&histogram, &mut fb, AREA);

        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(20, 50), Some(Rgba::GREEN));
    }

    #[test]
    fn test_tiny_area_draws_nothing_outside() {
        // Area smaller than the margins: plot collapses to zero but the
        // renderer must not panic or divide by zero.
        let histogram = Histogram::new(&[1, 2, 3], 2).unwrap();
        let mut fb = Framebuffer::new(30, 30).unwrap();
        HistogramRenderer::new().render(&histogram, &mut fb, Rect::new(0, 0, 30, 30));
    }

    #[test]
    fn test_offset_area() {
        let histogram = Histogram::new(&[0, 1, 2, 10], 3).unwrap();
        let mut surface = SvgSurface::new(400, 300);
        HistogramRenderer::new().render(&histogram, &mut surface, Rect::new(50, 40, 200, 150));

        // Axis shifts with the area origin.
        assert!(matches!(
            surface.elements()[1],
            SvgElement::Line {
                x1: 60,
                y1: 150,
                x2: 240,
                y2: 150,
                ..
            }
        ));
    }
}
