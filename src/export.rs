use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{BannerError, BannerResult};
use crate::render::frame::FrameRGBA;

/// File name offered when a banner is downloaded.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "linkedin-banner.png";

fn straight_image(frame: &FrameRGBA) -> BannerResult<image::RgbaImage> {
    image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
        .ok_or_else(|| BannerError::export("frame byte length does not match its dimensions"))
}

/// Encode a frame as PNG bytes (straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> BannerResult<Vec<u8>> {
    let img = straight_image(frame)?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| BannerError::export(format!("encode png: {e}")))?;
    Ok(out.into_inner())
}

/// Write a frame to `path` as PNG, creating parent directories as needed.
#[tracing::instrument(skip(frame), fields(path = %path.display()))]
pub fn save_png(frame: &FrameRGBA, path: &Path) -> BannerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = straight_image(frame)?;
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(bytes = img.as_raw().len(), "png written");
    Ok(())
}
