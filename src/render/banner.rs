use crate::config::model::BannerConfig;
use crate::foundation::core::{Point, Rect, Rgb8, Rng64};
use crate::layout::anchor::{LayoutMetrics, TextRole, resolve_anchor};
use crate::pattern::{PatternColors, paint_pattern};
use crate::render::surface::{DrawSurface, FontSpec, TextShadow};

/// Drop shadow under the name line.
pub const NAME_SHADOW: TextShadow = TextShadow {
    offset_x: 2.0,
    offset_y: 2.0,
    blur: 4.0,
    color: Rgb8::BLACK,
    alpha: 0.2,
};

const INFO_SCALE: f64 = 0.7;
const CONTACT_SCALE: f64 = 0.6;
const INFO_LINE_ADVANCE: f64 = 0.8;
const CONTACT_LINE_ADVANCE: f64 = 0.7;

const RULE_Y: f64 = 10.0;
const RULE_WIDTH: f64 = 4.0;

/// Paint `config` onto `surface`, replacing whatever was there.
///
/// Total over every config: empty or disabled fields are skipped, and
/// out-of-domain numbers are drawn as given.
#[tracing::instrument(skip(config, surface, rng), fields(width = config.width, height = config.height))]
pub fn render_banner(config: &BannerConfig, surface: &mut dyn DrawSurface, rng: &mut Rng64) {
    let w = f64::from(config.width);
    let h = f64::from(config.height);
    let metrics = LayoutMetrics::new(config.width, config.height, config.font_size);

    surface.clear();
    surface.set_fill_color(config.background_color);
    surface.fill_rect(Rect::new(0.0, 0.0, w, h));

    if config.show_shapes {
        tracing::debug!(style = ?config.shapes_style, "pattern");
        paint_pattern(
            surface,
            config.shapes_style,
            w,
            h,
            PatternColors {
                primary: config.primary_color,
                secondary: config.secondary_color,
                accent: config.accent_color,
            },
            rng,
        );
    }

    draw_name(config, surface, &metrics);
    draw_info(config, surface, &metrics);
    draw_contact(config, surface, &metrics);

    surface.set_stroke_color(config.accent_color);
    surface.set_line_width(RULE_WIDTH);
    surface.stroke_line(Point::new(0.0, RULE_Y), Point::new(w, RULE_Y));
}

/// Render only when a surface exists; a missing surface is a silent no-op.
pub fn render_banner_if_ready(
    config: &BannerConfig,
    surface: Option<&mut dyn DrawSurface>,
    rng: &mut Rng64,
) {
    match surface {
        Some(surface) => render_banner(config, surface, rng),
        None => tracing::debug!("no surface, render skipped"),
    }
}

fn draw_name(config: &BannerConfig, surface: &mut dyn DrawSurface, m: &LayoutMetrics) {
    if config.name.is_empty() {
        return;
    }
    let anchor = resolve_anchor(config.name_position, TextRole::Name, m);
    tracing::debug!(x = anchor.x, y = anchor.y, "name");

    surface.set_font(FontSpec {
        family: config.font_family,
        size_px: m.font_size,
        bold: true,
    });
    surface.set_fill_color(config.primary_color);
    surface.set_shadow(Some(NAME_SHADOW));
    surface.draw_text(&config.name, anchor.point(), anchor.align);
    surface.set_shadow(None);
}

/// Info lines in drawing order, disabled and empty ones already dropped.
pub fn info_lines(config: &BannerConfig) -> Vec<&str> {
    [
        (config.show_designation, config.designation.as_str()),
        (config.show_company, config.company.as_str()),
        (true, config.skills.as_str()),
        (config.show_tagline, config.tagline.as_str()),
    ]
    .into_iter()
    .filter(|(shown, text)| *shown && !text.is_empty())
    .map(|(_, text)| text)
    .collect()
}

fn draw_info(config: &BannerConfig, surface: &mut dyn DrawSurface, m: &LayoutMetrics) {
    let lines = info_lines(config);
    if lines.is_empty() {
        return;
    }
    let anchor = resolve_anchor(config.info_position, TextRole::Info, m);
    tracing::debug!(x = anchor.x, y = anchor.y, lines = lines.len(), "info");

    surface.set_font(FontSpec {
        family: config.font_family,
        size_px: m.font_size * INFO_SCALE,
        bold: false,
    });
    surface.set_fill_color(config.secondary_color);

    let mut y = anchor.y;
    for line in lines {
        surface.draw_text(line, Point::new(anchor.x, y), anchor.align);
        y += m.line_height * INFO_LINE_ADVANCE;
    }
}

fn draw_contact(config: &BannerConfig, surface: &mut dyn DrawSurface, m: &LayoutMetrics) {
    let email = (config.show_contact_email && !config.contact_email.is_empty())
        .then_some(config.contact_email.as_str());
    let phone = (config.show_contact_phone && !config.contact_phone.is_empty())
        .then_some(config.contact_phone.as_str());
    if email.is_none() && phone.is_none() {
        return;
    }
    let anchor = resolve_anchor(config.contact_position, TextRole::Contact, m);
    tracing::debug!(x = anchor.x, y = anchor.y, "contact");

    surface.set_font(FontSpec {
        family: config.font_family,
        size_px: m.font_size * CONTACT_SCALE,
        bold: false,
    });
    surface.set_fill_color(config.accent_color);

    // Stacks upward: the phone only moves off the anchor when an email sits there.
    let mut y = anchor.y;
    if let Some(email) = email {
        surface.draw_text(email, Point::new(anchor.x, y), anchor.align);
        y -= m.line_height * CONTACT_LINE_ADVANCE;
    }
    if let Some(phone) = phone {
        surface.draw_text(phone, Point::new(anchor.x, y), anchor.align);
    }
}
