//! Compiled-in template, palette and font tables.
//!
//! Everything here is static data. Applying a preset is a [`BannerConfig::merge`]
//! with the preset's partial config; nothing else about the base config changes.

use crate::config::model::{BannerConfig, BannerConfigPatch, FontFamily, Position};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BannerError, BannerResult};

/// Named overlay of colors, anchors and typography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub primary_color: Rgb8,
    pub secondary_color: Rgb8,
    pub accent_color: Rgb8,
    pub background_color: Rgb8,
    pub name_position: Position,
    pub info_position: Position,
    pub contact_position: Position,
    pub font_size: u32,
    pub font_family: FontFamily,
}

impl BannerTemplate {
    /// The partial config this template overrides.
    pub fn patch(&self) -> BannerConfigPatch {
        BannerConfigPatch {
            primary_color: Some(self.primary_color),
            secondary_color: Some(self.secondary_color),
            accent_color: Some(self.accent_color),
            background_color: Some(self.background_color),
            name_position: Some(self.name_position),
            info_position: Some(self.info_position),
            contact_position: Some(self.contact_position),
            font_size: Some(self.font_size),
            font_family: Some(self.font_family),
            ..BannerConfigPatch::default()
        }
    }

    /// Merge onto `base` and record this template as the selected one.
    pub fn apply(&self, base: &BannerConfig) -> BannerConfig {
        let mut out = base.merge(&self.patch());
        out.selected_template = self.id.to_owned();
        out
    }
}

/// Named overlay restricted to the four color fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub primary_color: Rgb8,
    pub secondary_color: Rgb8,
    pub accent_color: Rgb8,
    pub background_color: Rgb8,
}

impl ColorPalette {
    pub fn patch(&self) -> BannerConfigPatch {
        BannerConfigPatch {
            primary_color: Some(self.primary_color),
            secondary_color: Some(self.secondary_color),
            accent_color: Some(self.accent_color),
            background_color: Some(self.background_color),
            ..BannerConfigPatch::default()
        }
    }

    pub fn apply(&self, base: &BannerConfig) -> BannerConfig {
        base.merge(&self.patch())
    }
}

const fn hex(v: u32) -> Rgb8 {
    Rgb8::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

pub static TEMPLATES: [BannerTemplate; 6] = [
    BannerTemplate {
        id: "professional",
        name: "Professional",
        primary_color: hex(0x0077b5),
        secondary_color: hex(0xffffff),
        accent_color: hex(0x00a0dc),
        background_color: hex(0xf3f6f8),
        name_position: Position::Center,
        info_position: Position::BottomLeft,
        contact_position: Position::BottomRight,
        font_size: 32,
        font_family: FontFamily::Arial,
    },
    BannerTemplate {
        id: "modern",
        name: "Modern",
        primary_color: hex(0x2d3748),
        secondary_color: hex(0xffffff),
        accent_color: hex(0x4299e1),
        background_color: hex(0xedf2f7),
        name_position: Position::TopLeft,
        info_position: Position::Center,
        contact_position: Position::BottomRight,
        font_size: 36,
        font_family: FontFamily::Helvetica,
    },
    BannerTemplate {
        id: "creative",
        name: "Creative",
        primary_color: hex(0x6b46c1),
        secondary_color: hex(0xffffff),
        accent_color: hex(0xf56565),
        background_color: hex(0xfaf5ff),
        name_position: Position::TopRight,
        info_position: Position::BottomLeft,
        contact_position: Position::BottomRight,
        font_size: 40,
        font_family: FontFamily::Georgia,
    },
    BannerTemplate {
        id: "minimal",
        name: "Minimal",
        primary_color: hex(0x1a202c),
        secondary_color: hex(0x4a5568),
        accent_color: hex(0x718096),
        background_color: hex(0xffffff),
        name_position: Position::Center,
        info_position: Position::Center,
        contact_position: Position::BottomRight,
        font_size: 28,
        font_family: FontFamily::Verdana,
    },
    BannerTemplate {
        id: "bold",
        name: "Bold",
        primary_color: hex(0xe53e3e),
        secondary_color: hex(0xffffff),
        accent_color: hex(0xf6ad55),
        background_color: hex(0x1a202c),
        name_position: Position::TopLeft,
        info_position: Position::BottomLeft,
        contact_position: Position::TopRight,
        font_size: 42,
        font_family: FontFamily::TrebuchetMs,
    },
    BannerTemplate {
        id: "tech",
        name: "Tech",
        primary_color: hex(0x38b2ac),
        secondary_color: hex(0xffffff),
        accent_color: hex(0x4fd1c5),
        background_color: hex(0x1a202c),
        name_position: Position::TopLeft,
        info_position: Position::BottomLeft,
        contact_position: Position::BottomRight,
        font_size: 36,
        font_family: FontFamily::CourierNew,
    },
];

pub static PALETTES: [ColorPalette; 8] = [
    ColorPalette {
        id: "linkedin",
        name: "LinkedIn",
        primary_color: hex(0x0077b5),
        secondary_color: hex(0x313335),
        accent_color: hex(0x00a0dc),
        background_color: hex(0xf3f6f8),
    },
    ColorPalette {
        id: "ocean",
        name: "Ocean",
        primary_color: hex(0x1e3a8a),
        secondary_color: hex(0x1e40af),
        accent_color: hex(0x06b6d4),
        background_color: hex(0xecfeff),
    },
    ColorPalette {
        id: "forest",
        name: "Forest",
        primary_color: hex(0x14532d),
        secondary_color: hex(0x166534),
        accent_color: hex(0x65a30d),
        background_color: hex(0xf0fdf4),
    },
    ColorPalette {
        id: "sunset",
        name: "Sunset",
        primary_color: hex(0x9a3412),
        secondary_color: hex(0x7c2d12),
        accent_color: hex(0xf97316),
        background_color: hex(0xfff7ed),
    },
    ColorPalette {
        id: "royal",
        name: "Royal",
        primary_color: hex(0x581c87),
        secondary_color: hex(0x6b21a8),
        accent_color: hex(0xeab308),
        background_color: hex(0xfaf5ff),
    },
    ColorPalette {
        id: "monochrome",
        name: "Monochrome",
        primary_color: hex(0x111827),
        secondary_color: hex(0x4b5563),
        accent_color: hex(0x9ca3af),
        background_color: hex(0xffffff),
    },
    ColorPalette {
        id: "midnight",
        name: "Midnight",
        primary_color: hex(0xe2e8f0),
        secondary_color: hex(0xa0aec0),
        accent_color: hex(0x63b3ed),
        background_color: hex(0x1a202c),
    },
    ColorPalette {
        id: "coral",
        name: "Coral",
        primary_color: hex(0xbe123c),
        secondary_color: hex(0x9f1239),
        accent_color: hex(0xfb7185),
        background_color: hex(0xfff1f2),
    },
];

pub fn find_template(id: &str) -> Option<&'static BannerTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn find_palette(id: &str) -> Option<&'static ColorPalette> {
    PALETTES.iter().find(|p| p.id == id)
}

/// Apply the template with `id` to `base`.
pub fn apply_template(base: &BannerConfig, id: &str) -> BannerResult<BannerConfig> {
    let template = find_template(id).ok_or_else(|| {
        BannerError::validation(format!(
            "unknown template \"{id}\" (expected one of: {})",
            TEMPLATES.map(|t| t.id).join(", ")
        ))
    })?;
    Ok(template.apply(base))
}

/// Apply the palette with `id` to `base`.
pub fn apply_palette(base: &BannerConfig, id: &str) -> BannerResult<BannerConfig> {
    let palette = find_palette(id).ok_or_else(|| {
        BannerError::validation(format!(
            "unknown palette \"{id}\" (expected one of: {})",
            PALETTES.map(|p| p.id).join(", ")
        ))
    })?;
    Ok(palette.apply(base))
}

/// Families offered by the editor's font picker.
pub fn available_fonts() -> &'static [FontFamily] {
    &FontFamily::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_ids_are_unique() {
        let mut ids: Vec<_> = TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());

        let mut ids: Vec<_> = PALETTES.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PALETTES.len());
    }

    #[test]
    fn template_font_sizes_are_in_editor_range() {
        for t in &TEMPLATES {
            assert!(
                crate::config::model::FONT_SIZE_RANGE.contains(&t.font_size),
                "{}",
                t.id
            );
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let base = BannerConfig::default();
        assert!(apply_template(&base, "nope").is_err());
        assert!(apply_palette(&base, "nope").is_err());
    }
}
