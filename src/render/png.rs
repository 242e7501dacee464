//! PNG rasterization of an emitted SVG document.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{TrochographError, TrochographResult};

/// Rasterize an SVG document string to straight-alpha RGBA8 pixels at the
/// requested size.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> TrochographResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(TrochographError::config(
            "png width/height must be > 0 pixels",
        ));
    }

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| TrochographError::serde(format!("parse svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| TrochographError::config("png dimensions are too large"))?;
    let transform = resvg::tiny_skia::Transform::from_scale(
        f64::from(width) as f32 / tree.size().width(),
        f64::from(height) as f32 / tree.size().height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(data)
}

/// Rasterize and write a PNG file.
pub fn write_png(svg: &str, path: &Path, width: u32, height: u32) -> TrochographResult<()> {
    let data = rasterize_svg(svg, width, height)?;
    image::save_buffer_with_format(
        path,
        &data,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
