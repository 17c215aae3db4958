use crate::config::model::Position;
use crate::foundation::core::Point;

/// Which block of text an anchor is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    Name,
    Info,
    Contact,
}

/// Horizontal alignment of text relative to its anchor x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Surface and font measurements the anchor arithmetic runs on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    /// Inset from every edge: `max(30, font_size * 0.8)`.
    pub padding: f64,
    /// `font_size * 1.2`.
    pub line_height: f64,
}

impl LayoutMetrics {
    pub fn new(width: u32, height: u32, font_size: u32) -> Self {
        let font_size = f64::from(font_size);
        Self {
            width: f64::from(width),
            height: f64::from(height),
            font_size,
            padding: padding_for(font_size),
            line_height: line_height_for(font_size),
        }
    }
}

pub fn padding_for(font_size: f64) -> f64 {
    (font_size * 0.8).max(30.0)
}

pub fn line_height_for(font_size: f64) -> f64 {
    font_size * 1.2
}

/// Concrete baseline point and alignment for one text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
}

impl Anchor {
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Resolve a named position to a baseline point for `role`.
///
/// Vertical "center" is not uniform across roles: the name sits on the
/// mid-line, info one line below it, and contact on the bottom inset.
pub fn resolve_anchor(position: Position, role: TextRole, m: &LayoutMetrics) -> Anchor {
    let (x, align) = match position {
        Position::TopLeft | Position::BottomLeft => (m.padding, TextAlign::Left),
        Position::TopRight | Position::BottomRight => (m.width - m.padding, TextAlign::Right),
        Position::Center => (m.width / 2.0, TextAlign::Center),
    };

    let top = matches!(position, Position::TopLeft | Position::TopRight);
    let bottom = matches!(position, Position::BottomLeft | Position::BottomRight);

    let y = match role {
        TextRole::Name if top => m.padding + m.font_size,
        TextRole::Name if bottom => m.height - m.padding - m.font_size,
        TextRole::Name => m.height / 2.0,
        TextRole::Info if top => m.padding + m.font_size * 2.0,
        TextRole::Info if bottom => m.height - m.padding - m.font_size * 3.0,
        TextRole::Info => m.height / 2.0 + m.line_height,
        TextRole::Contact if top => m.padding + m.font_size * 4.0,
        TextRole::Contact => m.height - m.padding,
    };

    Anchor { x, y, align }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchor.rs"]
mod tests;
