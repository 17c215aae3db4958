use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{BannerError, BannerResult};

/// Smallest and largest banner width the editor offers.
pub const WIDTH_RANGE: std::ops::RangeInclusive<u32> = 800..=2000;
/// Smallest and largest banner height the editor offers.
pub const HEIGHT_RANGE: std::ops::RangeInclusive<u32> = 200..=600;
/// Smallest and largest name font size the editor offers.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u32> = 16..=72;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named placement zone for a block of text.
pub enum Position {
    /// Upper-left corner, left aligned.
    TopLeft,
    /// Upper-right corner, right aligned.
    TopRight,
    /// Horizontal middle, center aligned.
    #[default]
    Center,
    /// Lower-left corner, left aligned.
    BottomLeft,
    /// Lower-right corner, right aligned.
    BottomRight,
}

impl Position {
    /// Every position, in editor order.
    pub const ALL: [Position; 5] = [
        Position::TopLeft,
        Position::TopRight,
        Position::Center,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The kebab-case name used in config documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::Center => "center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Decorative background pattern.
pub enum ShapesStyle {
    /// Two corner wedges and a circle.
    #[default]
    Geometric,
    /// Five randomly placed circles.
    Circles,
    /// Diagonal crosshatch.
    Lines,
    /// Regular dot grid.
    Dots,
    /// Sine and cosine strokes.
    Waves,
}

impl ShapesStyle {
    /// Every style, in editor order.
    pub const ALL: [ShapesStyle; 5] = [
        ShapesStyle::Geometric,
        ShapesStyle::Circles,
        ShapesStyle::Lines,
        ShapesStyle::Dots,
        ShapesStyle::Waves,
    ];

    /// Whether two renders of the same config produce identical pixels.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, ShapesStyle::Circles)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Generic family used when a named font is not installed.
pub enum GenericFamily {
    /// Proportional sans-serif.
    SansSerif,
    /// Proportional serif.
    Serif,
    /// Fixed-width.
    Monospace,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
/// Font families the editor allows.
///
/// Deserialized from the display name, ignoring ASCII case.
pub enum FontFamily {
    /// Arial.
    #[default]
    Arial,
    /// Helvetica.
    Helvetica,
    /// Georgia.
    Georgia,
    /// Verdana.
    Verdana,
    /// Trebuchet MS.
    #[serde(rename = "Trebuchet MS")]
    TrebuchetMs,
    /// Courier New.
    #[serde(rename = "Courier New")]
    CourierNew,
    /// Times New Roman.
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    /// Tahoma.
    Tahoma,
}

impl FontFamily {
    /// Every allowed family, in editor order.
    pub const ALL: [FontFamily; 8] = [
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::Georgia,
        FontFamily::Verdana,
        FontFamily::TrebuchetMs,
        FontFamily::CourierNew,
        FontFamily::TimesNewRoman,
        FontFamily::Tahoma,
    ];

    /// Installed family name to look up.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Georgia => "Georgia",
            FontFamily::Verdana => "Verdana",
            FontFamily::TrebuchetMs => "Trebuchet MS",
            FontFamily::CourierNew => "Courier New",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Tahoma => "Tahoma",
        }
    }

    pub fn generic(self) -> GenericFamily {
        match self {
            FontFamily::Georgia | FontFamily::TimesNewRoman => GenericFamily::Serif,
            FontFamily::CourierNew => GenericFamily::Monospace,
            _ => GenericFamily::SansSerif,
        }
    }

    /// Look up a family by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl<'de> serde::Deserialize<'de> for FontFamily {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_name(&name).ok_or_else(|| {
            let allowed: Vec<&str> = Self::ALL.iter().map(|f| f.name()).collect();
            serde::de::Error::custom(format!(
                "unknown font family \"{name}\" (expected one of: {})",
                allowed.join(", ")
            ))
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Declarative description of one banner.
///
/// Every field has an editor default, so a config document only needs to name
/// what differs. Values outside the editor's domains are accepted here and
/// rendered as given; see [`BannerConfig::validate`] for the advisory check.
pub struct BannerConfig {
    /// Headline text, drawn bold in the primary color.
    pub name: String,
    /// Gate for [`BannerConfig::designation`].
    pub show_designation: bool,
    /// Job title line.
    pub designation: String,
    /// Gate for [`BannerConfig::company`].
    pub show_company: bool,
    /// Employer line.
    pub company: String,
    /// Free-form skills line; drawn whenever non-empty.
    pub skills: String,
    /// Gate for [`BannerConfig::tagline`].
    pub show_tagline: bool,
    /// Tagline line.
    pub tagline: String,
    /// Gate for [`BannerConfig::contact_email`].
    pub show_contact_email: bool,
    /// Email address line.
    pub contact_email: String,
    /// Gate for [`BannerConfig::contact_phone`].
    pub show_contact_phone: bool,
    /// Phone number line.
    pub contact_phone: String,
    /// Name and first pattern color.
    pub primary_color: Rgb8,
    /// Info-line color.
    pub secondary_color: Rgb8,
    /// Contact lines, accent rule and second pattern color.
    pub accent_color: Rgb8,
    /// Surface fill.
    pub background_color: Rgb8,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Anchor for the name.
    pub name_position: Position,
    /// Anchor for the info stack.
    pub info_position: Position,
    /// Anchor for the contact stack.
    pub contact_position: Position,
    /// Name font size in pixels; info and contact sizes derive from it.
    pub font_size: u32,
    /// Id of the last applied template. Informational only.
    pub selected_template: String,
    /// Whether to paint the decorative pattern.
    pub show_shapes: bool,
    /// Which decorative pattern to paint.
    pub shapes_style: ShapesStyle,
    /// Font used for every text draw.
    pub font_family: FontFamily,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            name: "John Doe".to_owned(),
            show_designation: true,
            designation: "Software Developer".to_owned(),
            show_company: true,
            company: "Tech Company".to_owned(),
            skills: "React, TypeScript, Next.js".to_owned(),
            show_tagline: true,
            tagline: "Building digital experiences that matter".to_owned(),
            show_contact_email: true,
            contact_email: "john@example.com".to_owned(),
            show_contact_phone: true,
            contact_phone: "+1 234 567 8900".to_owned(),
            primary_color: Rgb8::new(0x00, 0x77, 0xb5),
            secondary_color: Rgb8::WHITE,
            accent_color: Rgb8::new(0x00, 0xa0, 0xdc),
            background_color: Rgb8::new(0xf3, 0xf6, 0xf8),
            width: 1584,
            height: 396,
            name_position: Position::Center,
            info_position: Position::BottomLeft,
            contact_position: Position::BottomRight,
            font_size: 32,
            selected_template: "professional".to_owned(),
            show_shapes: true,
            shapes_style: ShapesStyle::Geometric,
            font_family: FontFamily::Arial,
        }
    }
}

impl BannerConfig {
    /// Parse a config document; missing fields take editor defaults.
    pub fn from_json_str(s: &str) -> BannerResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> BannerResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read banner config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string_pretty(&self) -> BannerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Check values against the editor's input domains.
    ///
    /// Rendering never calls this; out-of-domain values render as given.
    pub fn validate(&self) -> BannerResult<()> {
        if self.name.trim().is_empty() {
            return Err(BannerError::validation("name must be non-empty"));
        }
        if !WIDTH_RANGE.contains(&self.width) {
            return Err(BannerError::validation(format!(
                "width {} outside {}..={}",
                self.width,
                WIDTH_RANGE.start(),
                WIDTH_RANGE.end()
            )));
        }
        if !HEIGHT_RANGE.contains(&self.height) {
            return Err(BannerError::validation(format!(
                "height {} outside {}..={}",
                self.height,
                HEIGHT_RANGE.start(),
                HEIGHT_RANGE.end()
            )));
        }
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(BannerError::validation(format!(
                "fontSize {} outside {}..={}",
                self.font_size,
                FONT_SIZE_RANGE.start(),
                FONT_SIZE_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Return a copy with every field present in `patch` replaced.
    pub fn merge(&self, patch: &BannerConfigPatch) -> BannerConfig {
        let mut out = self.clone();
        out.merge_in_place(patch);
        out
    }

    pub fn merge_in_place(&mut self, patch: &BannerConfigPatch) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(v) = &patch.$field {
                        self.$field = v.clone();
                    }
                )*
            };
        }

        take!(
            name,
            show_designation,
            designation,
            show_company,
            company,
            skills,
            show_tagline,
            tagline,
            show_contact_email,
            contact_email,
            show_contact_phone,
            contact_phone,
            primary_color,
            secondary_color,
            accent_color,
            background_color,
            width,
            height,
            name_position,
            info_position,
            contact_position,
            font_size,
            selected_template,
            show_shapes,
            shapes_style,
            font_family,
        );
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Partial [`BannerConfig`]: fields that are `Some` override on merge.
pub struct BannerConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_designation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_company: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_tagline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_contact_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_contact_phone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Rgb8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Rgb8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Rgb8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgb8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_shapes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes_style: Option<ShapesStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
}

impl BannerConfigPatch {
    pub fn from_json_value(value: serde_json::Value) -> BannerResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Build a single-field patch from a `key=value` assignment.
    ///
    /// `value` is read as JSON when it parses (`true`, `48`, `"x"`), otherwise
    /// as a bare string, so `name=Jane Doe` and `primaryColor=#ff0000` work.
    pub fn from_assignment(assignment: &str) -> BannerResult<Self> {
        let (key, raw) = assignment.split_once('=').ok_or_else(|| {
            BannerError::validation(format!("expected key=value, got \"{assignment}\""))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(BannerError::validation("assignment key must be non-empty"));
        }
        let single = |value: serde_json::Value| {
            let mut obj = serde_json::Map::new();
            obj.insert(key.to_owned(), value);
            Self::from_json_value(serde_json::Value::Object(obj))
        };

        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::String(s)) => single(serde_json::Value::String(s)),
            // `phone=5551234` is a string field that happens to look numeric.
            Ok(value) => single(value).or_else(|_| single(raw.to_owned().into())),
            Err(_) => single(raw.to_owned().into()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
