use std::sync::Arc;

use image::RgbaImage;
use usvg::fontdb;

use crate::{
    assets::fonts::{build_fontdb, font_resolver},
    foundation::{
        error::{ForgeError, ForgeResult},
        math::demultiply_rgba8_in_place,
    },
    render::settings::RenderSettings,
};

/// Parses scene documents and rasterizes them on the CPU.
///
/// Building the font database scans system fonts, so a rasterizer is meant to be created once
/// per session and reused for every export.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
    settings: RenderSettings,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("faces", &self.fontdb.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Rasterizer {
    pub fn new(settings: RenderSettings) -> ForgeResult<Self> {
        settings.validate()?;
        let fontdb = build_fontdb(settings.font_dirs.as_slice());
        Ok(Self { fontdb, settings })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn font_faces(&self) -> usize {
        self.fontdb.len()
    }

    pub fn parse(&self, svg: &str) -> ForgeResult<usvg::Tree> {
        let opts = usvg::Options {
            resources_dir: Some(self.settings.assets_root.clone()),
            fontdb: self.fontdb.clone(),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        usvg::Tree::from_str(svg, &opts)
            .map_err(|e| ForgeError::render(format!("parse scene: {e}")))
    }

    /// Rasterize at the configured pixel ratio; returns straight-alpha pixels.
    #[tracing::instrument(skip_all, fields(pixel_ratio = self.settings.pixel_ratio))]
    pub fn rasterize(&self, svg: &str) -> ForgeResult<RgbaImage> {
        let tree = self.parse(svg)?;
        let ratio = self.settings.pixel_ratio;
        let size = tree.size();
        let width = (size.width() * ratio).round() as u32;
        let height = (size.height() * ratio).round() as u32;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            ForgeError::render(format!("failed to allocate {width}x{height} pixmap"))
        })?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(ratio, ratio),
            &mut pixmap.as_mut(),
        );

        let mut rgba = pixmap.take();
        demultiply_rgba8_in_place(&mut rgba);
        tracing::debug!(width, height, "scene rasterized");
        RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| ForgeError::render("pixmap size does not match its buffer"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
