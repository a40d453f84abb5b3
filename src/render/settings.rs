use std::path::{Path, PathBuf};

use crate::foundation::error::{ForgeError, ForgeResult};

/// Rasterization settings shared by every export.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSettings {
    /// Device pixels per scene unit.
    pub pixel_ratio: f32,
    /// Base directory for relative `imageUrl` paths.
    pub assets_root: PathBuf,
    /// Extra font directories, searched after system fonts.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pixel_ratio: Self::DEFAULT_PIXEL_RATIO,
            assets_root: PathBuf::from("."),
            font_dirs: Vec::new(),
        }
    }
}

impl RenderSettings {
    pub const DEFAULT_PIXEL_RATIO: f32 = 2.0;
    pub const FONT_DIR_ENV: &'static str = "CARDFORGE_FONT_DIR";
    const MAX_PIXEL_RATIO: f32 = 8.0;

    /// Defaults plus the font directory named by `CARDFORGE_FONT_DIR`, if set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(dir) = std::env::var_os(Self::FONT_DIR_ENV).filter(|v| !v.is_empty()) {
            settings.font_dirs.push(PathBuf::from(dir));
        }
        settings
    }

    /// Settings for a document on disk: relative art resolves next to the document.
    pub fn for_document(path: &Path) -> Self {
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_env().with_assets_root(root)
    }

    pub fn with_assets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.assets_root = root.into();
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    pub fn validate(&self) -> ForgeResult<()> {
        if !self.pixel_ratio.is_finite()
            || self.pixel_ratio <= 0.0
            || self.pixel_ratio > Self::MAX_PIXEL_RATIO
        {
            return Err(ForgeError::validation(format!(
                "pixel ratio must be in (0, {}], got {}",
                Self::MAX_PIXEL_RATIO,
                self.pixel_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
