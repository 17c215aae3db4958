use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::layout::anchor::TextAlign;
use crate::render::surface::{DrawSurface, FontSpec, TextShadow};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetFillColor(Rgb8),
    SetStrokeColor(Rgb8),
    SetLineWidth(f64),
    SetOpacity(f64),
    SetFont(FontSpec),
    SetShadow(Option<TextShadow>),
    FillRect(Rect),
    FillPolygon(Vec<Point>),
    FillCircle { center: Point, radius: f64 },
    StrokeLine { from: Point, to: Point },
    StrokePolyline(Vec<Point>),
    Text { text: String, baseline: Point, align: TextAlign },
}

/// A text draw together with the state it was drawn under.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub baseline: Point,
    pub align: TextAlign,
    pub color: Rgb8,
    pub opacity: f64,
    pub font: FontSpec,
    pub shadow: Option<TextShadow>,
}

/// Surface that rasterizes nothing and remembers every call.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    commands: Vec<DrawCommand>,
    texts: Vec<DrawnText>,
    fill: Rgb8,
    opacity: f64,
    font: FontSpec,
    shadow: Option<TextShadow>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
            texts: Vec::new(),
            fill: Rgb8::BLACK,
            opacity: 1.0,
            font: FontSpec::default(),
            shadow: None,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> &[DrawnText] {
        &self.texts
    }

    pub fn find_text(&self, text: &str) -> Option<&DrawnText> {
        self.texts.iter().find(|t| t.text == text)
    }

    /// Primitive draws only, skipping state changes.
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| {
            matches!(
                c,
                DrawCommand::FillRect(_)
                    | DrawCommand::FillPolygon(_)
                    | DrawCommand::FillCircle { .. }
                    | DrawCommand::StrokeLine { .. }
                    | DrawCommand::StrokePolyline(_)
                    | DrawCommand::Text { .. }
            )
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        *self = Self::new(self.canvas);
    }

    fn set_fill_color(&mut self, color: Rgb8) {
        self.fill = color;
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgb8) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
        self.commands.push(DrawCommand::SetOpacity(opacity));
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
        self.commands.push(DrawCommand::SetFont(font));
    }

    fn set_shadow(&mut self, shadow: Option<TextShadow>) {
        self.shadow = shadow;
        self.commands.push(DrawCommand::SetShadow(shadow));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::FillPolygon(points.to_vec()));
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }

    fn stroke_polyline(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::StrokePolyline(points.to_vec()));
    }

    fn draw_text(&mut self, text: &str, baseline: Point, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            baseline,
            align,
        });
        self.texts.push(DrawnText {
            text: text.to_owned(),
            baseline,
            align,
            color: self.fill,
            opacity: self.opacity,
            font: self.font,
            shadow: self.shadow,
        });
    }
}
