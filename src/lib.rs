#![forbid(unsafe_code)]

//! Headless promotional-banner renderer.
//!
//! A [`BannerConfig`] is painted onto a [`DrawSurface`] by [`render_banner`]:
//! background, optional decorative pattern, name, info stack, contact stack
//! and an accent rule. [`CpuSurface`] rasterizes with `vello_cpu`;
//! [`RecordingSurface`] captures draw calls instead.

pub mod config;
pub mod export;
pub mod foundation;
pub mod layout;
pub mod pattern;
pub mod render;

pub use config::model::{
    BannerConfig, BannerConfigPatch, FONT_SIZE_RANGE, FontFamily, GenericFamily, HEIGHT_RANGE,
    Position, ShapesStyle, WIDTH_RANGE,
};
pub use config::presets::{
    BannerTemplate, ColorPalette, PALETTES, TEMPLATES, apply_palette, apply_template,
    available_fonts, find_palette, find_template,
};
pub use export::{DEFAULT_EXPORT_FILE_NAME, encode_png, save_png};
pub use foundation::core::{Canvas, Point, Rect, Rgb8, Rng64};
pub use foundation::error::{BannerError, BannerResult};
pub use layout::anchor::{Anchor, LayoutMetrics, TextAlign, TextRole, resolve_anchor};
pub use pattern::{PATTERN_OPACITY, PatternColors, paint_pattern};
pub use render::banner::{NAME_SHADOW, info_lines, render_banner, render_banner_if_ready};
pub use render::cpu::CpuSurface;
pub use render::frame::FrameRGBA;
pub use render::pipeline::{RenderOptions, render_to_frame};
pub use render::recording::{DrawCommand, DrawnText, RecordingSurface};
pub use render::surface::{DrawSurface, FontSpec, TextShadow};
pub use render::text::FontBook;
