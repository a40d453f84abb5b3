//! Resolution of a record's `imageUrl` into pixels.
//!
//! Nothing here touches the network: remote URLs, unreadable files and undecodable payloads
//! all resolve to a generated placeholder so a preview can always be composed.

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::{
    assets::data_url::DataUrl,
    foundation::{
        error::{ForgeError, ForgeResult},
        math::{Fnv1a64, hash_noise_u8, lerp_u8},
    },
    model::enums::EntityKind,
};

pub const PLACEHOLDER_WIDTH: u32 = 400;
pub const PLACEHOLDER_HEIGHT: u32 = 600;

/// Look of the stand-in image for each entity kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderStyle {
    Plain,
    Grayscale,
    Blur,
}

impl PlaceholderStyle {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Card => Self::Plain,
            EntityKind::Rune | EntityKind::Structure => Self::Grayscale,
            EntityKind::Artefact => Self::Blur,
        }
    }
}

/// Where an `imageUrl` points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArtSource {
    Inline(String),
    Remote(String),
    File(PathBuf),
}

impl ArtSource {
    pub fn classify(url: &str, assets_root: &Path) -> Self {
        let url = url.trim();
        if url.starts_with("data:") {
            return Self::Inline(url.to_string());
        }
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
        {
            return Self::Remote(url.to_string());
        }
        let local = url.strip_prefix("file://").unwrap_or(url);
        Self::File(assets_root.join(local))
    }
}

/// Decoded art plus whether it is a stand-in.
#[derive(Clone, Debug)]
pub struct Art {
    pub image: RgbaImage,
    pub placeholder: bool,
}

impl Art {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn to_png(&self) -> ForgeResult<Vec<u8>> {
        encode_png(&self.image)
    }

    /// PNG `data:` URI, ready to embed in a scene.
    pub fn to_data_url(&self) -> ForgeResult<String> {
        Ok(DataUrl::new("image/png", self.to_png()?).to_uri())
    }
}

pub fn encode_png(image: &RgbaImage) -> ForgeResult<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Decode the image behind `url`; remote URLs are refused.
pub fn decode_art(url: &str, assets_root: &Path) -> ForgeResult<RgbaImage> {
    let bytes = match ArtSource::classify(url, assets_root) {
        ArtSource::Inline(uri) => DataUrl::parse(&uri)?.bytes,
        ArtSource::Remote(u) => {
            return Err(ForgeError::image(format!("remote image '{u}' is not fetched")));
        }
        ArtSource::File(path) => std::fs::read(&path).map_err(|e| {
            ForgeError::image(format!("read image '{}': {e}", path.display()))
        })?,
    };
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgba8())
}

/// Resolve a record's image, falling back to the placeholder for `style`.
#[tracing::instrument(skip(url, assets_root), fields(has_url = url.is_some()))]
pub fn resolve_art(url: Option<&str>, style: PlaceholderStyle, assets_root: &Path) -> Art {
    let url = url.map(str::trim).filter(|u| !u.is_empty());
    let Some(url) = url else {
        tracing::debug!("no image set, using placeholder");
        return Art {
            image: generate_placeholder(style, Fnv1a64::OFFSET_BASIS),
            placeholder: true,
        };
    };
    match decode_art(url, assets_root) {
        Ok(image) => Art {
            image,
            placeholder: false,
        },
        Err(err) => {
            tracing::warn!(error = %err, "image unavailable, substituting placeholder");
            let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
            h.write_bytes(url.as_bytes());
            Art {
                image: generate_placeholder(style, h.finish()),
                placeholder: true,
            }
        }
    }
}

/// Procedural stand-in: a seeded two-tone gradient with grain, then the style's filter.
pub fn generate_placeholder(style: PlaceholderStyle, seed: u64) -> RgbaImage {
    let top = seeded_color(seed, 0);
    let bottom = seeded_color(seed, 1);
    let (w, h) = (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);

    let base = RgbaImage::from_fn(w, h, |x, y| {
        let t = y as f32 / (h - 1) as f32;
        let grain = f32::from(hash_noise_u8(seed, x / 4, y / 4)) / 255.0 - 0.5;
        let px = |a: u8, b: u8| {
            let v = f32::from(lerp_u8(a, b, t)) + grain * 40.0;
            v.clamp(0.0, 255.0) as u8
        };
        Rgba([px(top[0], bottom[0]), px(top[1], bottom[1]), px(top[2], bottom[2]), 255])
    });

    match style {
        PlaceholderStyle::Plain => base,
        PlaceholderStyle::Grayscale => {
            DynamicImage::ImageLuma8(image::imageops::grayscale(&base)).to_rgba8()
        }
        PlaceholderStyle::Blur => image::imageops::blur(&base, 6.0),
    }
}

fn seeded_color(seed: u64, salt: u32) -> [u8; 3] {
    let mut h = Fnv1a64::new(seed);
    h.write_u32(salt);
    let v = h.finish().to_le_bytes();
    // Keep placeholders mid-toned so overlays stay readable.
    [48 + v[0] / 2, 48 + v[1] / 2, 48 + v[2] / 2]
}

#[cfg(test)]
#[path = "../../tests/unit/assets/art.rs"]
mod tests;
