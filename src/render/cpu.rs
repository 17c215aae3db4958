use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::foundation::error::{BannerError, BannerResult};
use crate::layout::anchor::TextAlign;
use crate::render::blur::gaussian_blur_premul;
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawSurface, FontSpec, TextShadow};
use crate::render::text::{FontBook, ShapedLine, TextLayoutEngine};

/// Tolerance used when flattening circles into paths.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Software-rasterized [`DrawSurface`] backed by `vello_cpu`.
///
/// Draw calls are recorded into a render context and rasterized on
/// [`CpuSurface::frame`].
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    fonts: FontBook,
    text: TextLayoutEngine,
    font_data: std::collections::HashMap<usize, vello_cpu::peniko::FontData>,
    state: PaintState,
}

#[derive(Clone, Copy, Debug)]
struct PaintState {
    fill: Rgb8,
    stroke: Rgb8,
    line_width: f64,
    opacity: f64,
    font: FontSpec,
    shadow: Option<TextShadow>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Rgb8::BLACK,
            stroke: Rgb8::BLACK,
            line_width: 1.0,
            opacity: 1.0,
            font: FontSpec::default(),
            shadow: None,
        }
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas, fonts: FontBook) -> BannerResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(BannerError::render("surface dimensions must be > 0"));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BannerError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BannerError::render("surface height exceeds u16"))?;

        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            fonts,
            text: TextLayoutEngine::new(),
            font_data: std::collections::HashMap::new(),
            state: PaintState::default(),
        })
    }

    /// Rasterize everything drawn since the last [`DrawSurface::clear`].
    pub fn frame(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn color(&self, c: Rgb8) -> vello_cpu::peniko::Color {
        let a = (self.state.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, a)
    }

    fn prepare_fill(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let paint = self.color(self.state.fill);
        self.ctx.set_paint(paint);
    }

    fn prepare_stroke(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let paint = self.color(self.state.stroke);
        self.ctx.set_paint(paint);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(self.state.line_width)
                .with_caps(vello_cpu::kurbo::Cap::Butt)
                .with_join(vello_cpu::kurbo::Join::Miter)
                .with_miter_limit(10.0),
        );
    }

    fn font_data_for(&mut self, bytes: &Arc<Vec<u8>>, index: u32) -> vello_cpu::peniko::FontData {
        let key = Arc::as_ptr(bytes) as usize;
        self.font_data
            .entry(key)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    index,
                )
            })
            .clone()
    }

    fn fill_glyphs(
        ctx: &mut vello_cpu::RenderContext,
        font: &vello_cpu::peniko::FontData,
        line: &ShapedLine,
        origin: (f64, f64),
        paint: vello_cpu::peniko::Color,
    ) {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate(origin));
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint);
        let glyphs = line.glyphs.iter().map(|g| vello_cpu::Glyph {
            id: g.id,
            x: g.x,
            y: g.y,
        });
        ctx.glyph_run(font)
            .font_size(line.font_size)
            .fill_glyphs(glyphs);
    }

    /// Rasterize a blurred copy of `line` on its own layer and paint it in.
    fn draw_shadow(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        line: &ShapedLine,
        origin: (f64, f64),
        shadow: TextShadow,
    ) -> BannerResult<()> {
        let alpha = shadow.alpha * self.state.opacity;
        if alpha <= 0.0 {
            return Ok(());
        }

        let mut layer_ctx = vello_cpu::RenderContext::new(self.width, self.height);
        let paint = vello_cpu::peniko::Color::from_rgba8(
            shadow.color.r,
            shadow.color.g,
            shadow.color.b,
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        );
        Self::fill_glyphs(
            &mut layer_ctx,
            font,
            line,
            (origin.0 + shadow.offset_x, origin.1 + shadow.offset_y),
            paint,
        );
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        layer_ctx.flush();
        layer_ctx.render_to_pixmap(&mut layer);

        let blurred = gaussian_blur_premul(layer.data_as_u8_slice(), self.canvas, shadow.blur / 2.0)?;
        let pixmap = premul_bytes_to_pixmap(&blurred, self.width, self.height);
        let image = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(image);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn try_draw_text(&mut self, text: &str, baseline: Point, align: TextAlign) -> BannerResult<()> {
        let requested = self.state.font;
        let Some(font) = self.fonts.resolve(requested.family, requested.bold) else {
            return Ok(());
        };

        let line =
            self.text
                .shape_line(text, &font, requested.size_px as f32, requested.bold)?;
        let font_data = self.font_data_for(&font.bytes, font.index);

        let shift = match align {
            TextAlign::Left => 0.0,
            TextAlign::Center => line.width / 2.0,
            TextAlign::Right => line.width,
        };
        let origin = (baseline.x - shift, baseline.y);

        if let Some(shadow) = self.state.shadow {
            self.draw_shadow(&font_data, &line, origin, shadow)?;
        }

        let paint = self.color(self.state.fill);
        Self::fill_glyphs(&mut self.ctx, &font_data, &line, origin, paint);
        Ok(())
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.ctx.reset();
        self.state = PaintState::default();
    }

    fn set_fill_color(&mut self, color: Rgb8) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgb8) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_opacity(&mut self, opacity: f64) {
        if opacity.is_finite() {
            self.state.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    fn set_shadow(&mut self, shadow: Option<TextShadow>) {
        self.state.shadow = shadow;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.prepare_fill();
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();

        self.prepare_fill();
        self.ctx.fill_path(&path);
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        let path = kurbo::Circle::new(center, radius).to_path(CIRCLE_TOLERANCE);
        self.prepare_fill();
        self.ctx.fill_path(&bezpath_to_cpu(&path));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.stroke_polyline(&[from, to]);
    }

    fn stroke_polyline(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }

        self.prepare_stroke();
        self.ctx.stroke_path(&path);
    }

    fn draw_text(&mut self, text: &str, baseline: Point, align: TextAlign) {
        if text.is_empty() {
            return;
        }
        if let Err(e) = self.try_draw_text(text, baseline, align) {
            tracing::warn!(error = %e, text, "text draw skipped");
        }
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_bytes_to_pixmap(rgba8_premul: &[u8], width: u16, height: u16) -> vello_cpu::Pixmap {
    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();
    vello_cpu::Pixmap::from_parts_with_opacity(pixels, width, height, may_have_opacities)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
