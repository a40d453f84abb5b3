use image::{RgbaImage, imageops::FilterType};

use crate::{
    assets::art::encode_png,
    crop::geometry::CropTool,
    foundation::{core::Rect, error::ForgeResult},
    render::export::ExportedPng,
};

pub const CROP_OUTPUT_WIDTH: u32 = 600;
pub const CROP_OUTPUT_HEIGHT: u32 = 900;
pub const CROP_FILE_NAME: &str = "wizards-ones-crop.png";

/// Draw `src` (source pixels, may reach outside the image) into a `width x height` canvas.
///
/// The part of `src` inside the image is scaled into the matching part of the output; the rest
/// of the output stays transparent.
pub fn draw_region(source: &RgbaImage, src: Rect, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    if src.width() <= 0.0 || src.height() <= 0.0 {
        return canvas;
    }
    let bounds = Rect::new(0.0, 0.0, f64::from(source.width()), f64::from(source.height()));
    let visible = src.intersect(bounds);
    if visible.width() <= 0.0 || visible.height() <= 0.0 {
        return canvas;
    }

    let sx = f64::from(width) / src.width();
    let sy = f64::from(height) / src.height();
    let dst = Rect::new(
        (visible.x0 - src.x0) * sx,
        (visible.y0 - src.y0) * sy,
        (visible.x1 - src.x0) * sx,
        (visible.y1 - src.y0) * sy,
    );

    let x0 = visible.x0.floor() as u32;
    let y0 = visible.y0.floor() as u32;
    let x1 = (visible.x1.ceil() as u32).min(source.width());
    let y1 = (visible.y1.ceil() as u32).min(source.height());
    let patch = image::imageops::crop_imm(source, x0, y0, x1 - x0, y1 - y0).to_image();

    let dw = (dst.width().round() as u32).max(1);
    let dh = (dst.height().round() as u32).max(1);
    let scaled = image::imageops::resize(&patch, dw, dh, FilterType::Lanczos3);
    image::imageops::overlay(
        &mut canvas,
        &scaled,
        dst.x0.round() as i64,
        dst.y0.round() as i64,
    );
    canvas
}

impl CropTool {
    /// Render the current selection of `source` to the fixed 600x900 output.
    #[tracing::instrument(skip_all, fields(zoom = self.zoom()))]
    pub fn export(&self, source: &RgbaImage) -> ForgeResult<ExportedPng> {
        let result = self.source_rect().and_then(|src| {
            let out = draw_region(source, src, CROP_OUTPUT_WIDTH, CROP_OUTPUT_HEIGHT);
            Ok(ExportedPng {
                file_name: CROP_FILE_NAME.to_string(),
                width: out.width(),
                height: out.height(),
                png: encode_png(&out)?,
            })
        });
        match &result {
            Ok(_) => tracing::info!(file = CROP_FILE_NAME, "crop exported"),
            Err(err) => tracing::error!(error = %err, "failed to export crop"),
        }
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/crop/export.rs"]
mod tests;
