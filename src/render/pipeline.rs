use crate::config::model::BannerConfig;
use crate::foundation::core::Rng64;
use crate::foundation::error::BannerResult;
use crate::render::banner::render_banner;
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRGBA;
use crate::render::text::FontBook;

/// Knobs that are not part of the banner itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Seed for the `circles` pattern. `None` draws a fresh composition each
    /// render; every other pattern ignores it.
    pub seed: Option<u64>,
}

impl RenderOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn rng(&self) -> Rng64 {
        match self.seed {
            Some(seed) => Rng64::new(seed),
            None => Rng64::from_entropy(),
        }
    }
}

/// Rasterize `config` into a fresh `width x height` frame.
///
/// Pipeline:
/// 1. allocate a [`CpuSurface`] of the config's dimensions
/// 2. [`render_banner`] onto it
/// 3. read the pixels back
///
/// Returns **premultiplied** RGBA8 pixels. Fails only when the surface cannot
/// be allocated (a zero or over-`u16` dimension).
pub fn render_to_frame(
    config: &BannerConfig,
    fonts: FontBook,
    opts: &RenderOptions,
) -> BannerResult<FrameRGBA> {
    let mut surface = CpuSurface::new(config.canvas(), fonts)?;
    let mut rng = opts.rng();
    render_banner(config, &mut surface, &mut rng);
    Ok(surface.frame())
}
