use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::layout::anchor::TextAlign;

/// Font selection for subsequent [`DrawSurface::draw_text`] calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size_px: f64,
    pub bold: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::Arial,
            size_px: 10.0,
            bold: false,
        }
    }
}

/// Blurred, offset copy of text drawn underneath it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Canvas-style blur amount; the gaussian sigma is half of it.
    pub blur: f64,
    pub color: Rgb8,
    pub alpha: f64,
}

/// Immediate-mode 2D drawing target.
///
/// State setters (`set_*`) affect every later primitive until changed again,
/// like a canvas context. Coordinates are surface pixels with y pointing down.
/// Drawing outside the surface is clipped, never an error.
pub trait DrawSurface {
    fn canvas(&self) -> Canvas;

    /// Discard everything drawn so far and reset state to defaults.
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: Rgb8);
    fn set_stroke_color(&mut self, color: Rgb8);
    fn set_line_width(&mut self, width: f64);
    /// Multiplies the alpha of every later fill, stroke and text draw.
    fn set_opacity(&mut self, opacity: f64);
    fn set_font(&mut self, font: FontSpec);
    /// Shadow applied to later text draws; `None` disables it.
    fn set_shadow(&mut self, shadow: Option<TextShadow>);

    fn fill_rect(&mut self, rect: Rect);
    fn fill_polygon(&mut self, points: &[Point]);
    fn fill_circle(&mut self, center: Point, radius: f64);
    fn stroke_line(&mut self, from: Point, to: Point);
    /// Stroke connected segments through `points` as one open path.
    fn stroke_polyline(&mut self, points: &[Point]);
    /// Fill `text` in the current fill color with its alphabetic baseline at
    /// `baseline.y`, aligned horizontally around `baseline.x`.
    fn draw_text(&mut self, text: &str, baseline: Point, align: TextAlign);
}
