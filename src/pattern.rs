use crate::config::model::ShapesStyle;
use crate::foundation::core::{Point, Rgb8, Rng64};
use crate::render::surface::DrawSurface;

/// Global opacity every pattern is painted at.
pub const PATTERN_OPACITY: f64 = 0.1;

const CIRCLE_COUNT: usize = 5;
const CIRCLE_MIN_RADIUS: f64 = 20.0;

const LINE_WIDTH: f64 = 2.0;
const PRIMARY_LINE_SPACING: usize = 40;
const ACCENT_LINE_SPACING: usize = 80;

const DOT_RADIUS: f64 = 4.0;
const DOT_SPACING: usize = 30;

const WAVE_ROW_SPACING: usize = 40;
const WAVE_STEP: usize = 10;
const WAVE_FREQUENCY: f64 = 0.02;
const PRIMARY_WAVE_AMPLITUDE: f64 = 15.0;
const ACCENT_WAVE_AMPLITUDE: f64 = 10.0;

/// The three config colors a pattern draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternColors {
    pub primary: Rgb8,
    pub secondary: Rgb8,
    pub accent: Rgb8,
}

/// Paint `style` over a `width` x `height` area at [`PATTERN_OPACITY`], then
/// restore full opacity.
///
/// Only [`ShapesStyle::Circles`] consumes `rng`.
pub fn paint_pattern(
    surface: &mut dyn DrawSurface,
    style: ShapesStyle,
    width: f64,
    height: f64,
    colors: PatternColors,
    rng: &mut Rng64,
) {
    surface.set_opacity(PATTERN_OPACITY);
    match style {
        ShapesStyle::Geometric => geometric(surface, width, height, colors),
        ShapesStyle::Circles => circles(surface, width, height, colors, rng),
        ShapesStyle::Lines => lines(surface, width, height, colors),
        ShapesStyle::Dots => dots(surface, width, height, colors),
        ShapesStyle::Waves => waves(surface, width, height, colors),
    }
    surface.set_opacity(1.0);
}

fn geometric(surface: &mut dyn DrawSurface, w: f64, h: f64, colors: PatternColors) {
    surface.set_fill_color(colors.primary);
    surface.fill_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w * 0.2, 0.0),
        Point::new(0.0, h * 0.3),
    ]);

    surface.set_fill_color(colors.accent);
    surface.fill_polygon(&[
        Point::new(w, h),
        Point::new(w * 0.8, h),
        Point::new(w, h * 0.7),
    ]);

    surface.set_fill_color(colors.secondary);
    surface.fill_circle(Point::new(w * 0.8, h * 0.2), h * 0.1);
}

fn circles(surface: &mut dyn DrawSurface, w: f64, h: f64, colors: PatternColors, rng: &mut Rng64) {
    for i in 0..CIRCLE_COUNT {
        let radius = rng.next_f64_01() * (h * 0.2) + CIRCLE_MIN_RADIUS;
        let x = rng.next_f64_01() * w;
        let y = rng.next_f64_01() * h;
        surface.set_fill_color(if i % 2 == 0 {
            colors.primary
        } else {
            colors.accent
        });
        surface.fill_circle(Point::new(x, y), radius);
    }
}

fn lines(surface: &mut dyn DrawSurface, w: f64, h: f64, colors: PatternColors) {
    surface.set_line_width(LINE_WIDTH);

    surface.set_stroke_color(colors.primary);
    for i in grid_steps(w, PRIMARY_LINE_SPACING) {
        surface.stroke_line(Point::new(i, 0.0), Point::new(i + h, h));
    }

    surface.set_stroke_color(colors.accent);
    for i in grid_steps(w, ACCENT_LINE_SPACING) {
        surface.stroke_line(Point::new(i, h), Point::new(i + h, 0.0));
    }
}

fn dots(surface: &mut dyn DrawSurface, w: f64, h: f64, colors: PatternColors) {
    for x in grid_steps(w, DOT_SPACING) {
        for y in grid_steps(h, DOT_SPACING) {
            let on_primary = (x as u64 + y as u64) % 60 == 0;
            surface.set_fill_color(if on_primary {
                colors.primary
            } else {
                colors.accent
            });
            surface.fill_circle(Point::new(x, y), DOT_RADIUS);
        }
    }
}

fn waves(surface: &mut dyn DrawSurface, w: f64, h: f64, colors: PatternColors) {
    surface.set_line_width(LINE_WIDTH);

    surface.set_stroke_color(colors.primary);
    for row in rows_from(20, h, WAVE_ROW_SPACING) {
        let points: Vec<Point> = grid_steps(w, WAVE_STEP)
            .map(|x| Point::new(x, row + (x * WAVE_FREQUENCY).sin() * PRIMARY_WAVE_AMPLITUDE))
            .collect();
        surface.stroke_polyline(&points);
    }

    surface.set_stroke_color(colors.accent);
    for row in rows_from(40, h, WAVE_ROW_SPACING) {
        let points: Vec<Point> = grid_steps(w, WAVE_STEP)
            .map(|x| Point::new(x, row + (x * WAVE_FREQUENCY).cos() * ACCENT_WAVE_AMPLITUDE))
            .collect();
        surface.stroke_polyline(&points);
    }
}

/// `0, step, 2*step, ...` strictly below `limit`.
fn grid_steps(limit: f64, step: usize) -> impl Iterator<Item = f64> {
    rows_from(0, limit, step)
}

fn rows_from(start: usize, limit: f64, step: usize) -> impl Iterator<Item = f64> {
    (start..)
        .step_by(step)
        .map(|v| v as f64)
        .take_while(move |&v| v < limit)
}
