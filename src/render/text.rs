use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::config::model::{FontFamily, GenericFamily};
use crate::foundation::error::{BannerError, BannerResult};

/// Installed families tried, in order, when the requested one is missing.
fn fallback_names(generic: GenericFamily) -> &'static [&'static str] {
    match generic {
        GenericFamily::SansSerif => &[
            "Liberation Sans",
            "DejaVu Sans",
            "Noto Sans",
            "Arimo",
            "Helvetica",
            "Arial",
        ],
        GenericFamily::Serif => &[
            "Liberation Serif",
            "DejaVu Serif",
            "Noto Serif",
            "Tinos",
            "Times New Roman",
            "Georgia",
        ],
        GenericFamily::Monospace => &[
            "Liberation Mono",
            "DejaVu Sans Mono",
            "Noto Sans Mono",
            "Cousine",
            "Courier New",
        ],
    }
}

/// A face picked for one (family, weight) request.
#[derive(Clone)]
pub struct ResolvedFont {
    /// Family name of the face actually chosen.
    pub family_name: String,
    /// Whether a fallback face stood in for the requested family.
    pub fallback: bool,
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside a collection file (`.ttc`).
    pub index: u32,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("family_name", &self.family_name)
            .field("fallback", &self.fallback)
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Font lookup over system fonts plus any extra directories.
///
/// Cloning is cheap: the face database is shared.
#[derive(Clone)]
pub struct FontBook {
    db: Arc<usvg::fontdb::Database>,
    resolved: HashMap<(FontFamily, bool), Option<ResolvedFont>>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontBook {
    /// No faces at all; every text draw is skipped.
    pub fn empty() -> Self {
        Self::from_database(usvg::fontdb::Database::new())
    }

    /// System fonts only.
    pub fn system() -> Self {
        Self::with_dirs(std::iter::empty::<PathBuf>())
    }

    /// System fonts plus every `.ttf`/`.otf`/`.ttc` directly inside `dirs`.
    pub fn with_dirs<P: AsRef<Path>>(dirs: impl IntoIterator<Item = P>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in dirs {
            load_fonts_from_dir(&mut db, dir.as_ref());
        }
        tracing::debug!(faces = db.len(), "font database loaded");
        Self::from_database(db)
    }

    pub fn from_database(db: usvg::fontdb::Database) -> Self {
        Self {
            db: Arc::new(db),
            resolved: HashMap::new(),
        }
    }

    /// Add a single font file; fails if it holds no usable face.
    pub fn load_font_file(&mut self, path: &Path) -> BannerResult<()> {
        let before = self.db.len();
        Arc::make_mut(&mut self.db)
            .load_font_file(path)
            .map_err(|e| BannerError::font(format!("load '{}': {e}", path.display())))?;
        if self.db.len() == before {
            return Err(BannerError::font(format!(
                "'{}' contains no font faces",
                path.display()
            )));
        }
        self.resolved.clear();
        Ok(())
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Pick a face for `family`, falling back to a generic relative and then
    /// to any face at all. `None` only when the database is empty.
    pub fn resolve(&mut self, family: FontFamily, bold: bool) -> Option<ResolvedFont> {
        if let Some(hit) = self.resolved.get(&(family, bold)) {
            return hit.clone();
        }
        let out = self.lookup(family, bold);
        match &out {
            Some(f) if f.fallback => tracing::warn!(
                requested = family.name(),
                used = %f.family_name,
                "font family not installed, using fallback"
            ),
            Some(_) => {}
            None => tracing::warn!(
                requested = family.name(),
                "no font faces available, text will not be drawn"
            ),
        }
        self.resolved.insert((family, bold), out.clone());
        out
    }

    fn lookup(&self, family: FontFamily, bold: bool) -> Option<ResolvedFont> {
        use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

        let mut families = vec![Family::Name(family.name())];
        families.extend(
            fallback_names(family.generic())
                .iter()
                .copied()
                .map(Family::Name),
        );

        let query = Query {
            families: &families,
            weight: if bold { Weight::BOLD } else { Weight::NORMAL },
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let id = self
            .db
            .query(&query)
            .or_else(|| self.db.faces().next().map(|f| f.id))?;
        let face = self.db.face(id)?;
        let family_name = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        let fallback = !face
            .families
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(family.name()));

        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))?;

        Some(ResolvedFont {
            family_name,
            fallback,
            bytes: Arc::new(bytes),
            index,
        })
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

/// A glyph positioned relative to the text's baseline origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Single-line shaping result.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedLine {
    pub glyphs: Vec<PlacedGlyph>,
    /// Advance width of the whole line.
    pub width: f64,
    pub font_size: f32,
}

/// Stateful helper for shaping text with Parley from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    registered: HashMap<usize, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    fn family_for(&mut self, font: &ResolvedFont) -> BannerResult<String> {
        let key = Arc::as_ptr(&font.bytes) as usize;
        if let Some(name) = self.registered.get(&key) {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BannerError::font("no font families registered from font bytes"))?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BannerError::font("registered font family has no name"))?
            .to_string();

        self.registered.insert(key, family_name.clone());
        Ok(family_name)
    }

    /// Shape `text` on one line; glyph y is relative to the baseline.
    pub fn shape_line(
        &mut self,
        text: &str,
        font: &ResolvedFont,
        size_px: f32,
        bold: bool,
    ) -> BannerResult<ShapedLine> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BannerError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.family_for(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let first_baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0);

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                place_run(
                    run.offset(),
                    run.baseline() - first_baseline,
                    run.glyphs().map(|g| (u32::from(g.id), g.x, g.y, g.advance)),
                    &mut glyphs,
                );
            }
        }

        Ok(ShapedLine {
            glyphs,
            width: f64::from(layout.width()),
            font_size: size_px,
        })
    }
}

/// Pen-advance placement of one run's `(id, dx, dy, advance)` glyphs.
///
/// Parley offsets are y-down like the raster, so `dy` is added as is.
fn place_run(
    start_x: f32,
    line_y: f32,
    run: impl IntoIterator<Item = (u32, f32, f32, f32)>,
    out: &mut Vec<PlacedGlyph>,
) {
    let mut pen = start_x;
    for (id, dx, dy, advance) in run {
        out.push(PlacedGlyph {
            id,
            x: pen + dx,
            y: line_y + dy,
        });
        pen += advance;
    }
}
