//! Scene composition with resolved art, and PNG export of the result.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    assets::art::{encode_png, resolve_art},
    foundation::error::{ForgeError, ForgeResult},
    model::{document::EntityDocument, enums::Language},
    render::{
        entity::Entity, previews::SceneContext, raster::Rasterizer, settings::RenderSettings,
        svg::Scene,
    },
};

/// `name` with every whitespace run collapsed to `_`, then `_{suffix}.png`.
///
/// Path separators and other characters a file name cannot carry become `_` one for one, so
/// the result is always a single path component.
pub fn export_file_name(name: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(name.len() + suffix.len() + 5);
    let mut in_space = false;
    for c in name.chars() {
        if is_name_space(c) {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(if is_path_unsafe(c) { '_' } else { c });
            in_space = false;
        }
    }
    out.push('_');
    out.push_str(suffix);
    out.push_str(".png");
    out
}

// Unicode white space plus the byte order mark; NEL is not a separator in card names.
fn is_name_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_path_unsafe(c: char) -> bool {
    c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// An encoded export, not yet written anywhere.
#[derive(Clone, Debug)]
pub struct ExportedPng {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl ExportedPng {
    pub fn write_to_dir(&self, dir: &Path) -> ForgeResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let file_name = Path::new(&self.file_name)
            .file_name()
            .ok_or_else(|| ForgeError::validation(format!("bad export name '{}'", self.file_name)))?;
        let path = dir.join(file_name);
        std::fs::write(&path, &self.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(path)
    }
}

/// Composes previews and exports them; owns the font database through its rasterizer.
#[derive(Clone, Debug)]
pub struct Renderer {
    rasterizer: Rasterizer,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> ForgeResult<Self> {
        Ok(Self {
            rasterizer: Rasterizer::new(settings)?,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        self.rasterizer.settings()
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Scene for `entity`, with its art resolved unless the record has no background.
    pub fn scene<E: Entity>(&self, entity: &E, card_lang: Language) -> ForgeResult<Scene> {
        let art = if entity.no_background() {
            None
        } else {
            let art = resolve_art(
                entity.image_url(),
                entity.placeholder_style(),
                &self.settings().assets_root,
            );
            Some(art.to_data_url()?)
        };
        let ctx = SceneContext {
            lang: card_lang,
            art,
        };
        Ok(entity.compose(&ctx))
    }

    pub fn preview_svg<E: Entity>(&self, entity: &E, card_lang: Language) -> ForgeResult<String> {
        Ok(self.scene(entity, card_lang)?.to_svg())
    }

    /// Rasterize the preview at the configured pixel ratio and encode it as PNG.
    ///
    /// Failures are logged at ERROR before being returned.
    #[tracing::instrument(skip_all, fields(kind = %E::KIND, name = %entity.display_name()))]
    pub fn export_png<E: Entity>(&self, entity: &E, card_lang: Language) -> ForgeResult<ExportedPng> {
        let result = self.export_inner(entity, card_lang);
        match &result {
            Ok(out) => tracing::info!(file = %out.file_name, width = out.width, height = out.height, "exported"),
            Err(err) => tracing::error!(error = %err, "failed to export image"),
        }
        result
    }

    fn export_inner<E: Entity>(&self, entity: &E, card_lang: Language) -> ForgeResult<ExportedPng> {
        let svg = self.preview_svg(entity, card_lang)?;
        let pixels = self.rasterizer.rasterize(&svg)?;
        Ok(ExportedPng {
            file_name: export_file_name(entity.display_name(), entity.export_suffix()),
            width: pixels.width(),
            height: pixels.height(),
            png: encode_png(&pixels)?,
        })
    }

    pub fn document_svg(&self, doc: &EntityDocument, card_lang: Language) -> ForgeResult<String> {
        match doc {
            EntityDocument::Card(r) => self.preview_svg(r, card_lang),
            EntityDocument::Rune(r) => self.preview_svg(r, card_lang),
            EntityDocument::Artefact(r) => self.preview_svg(r, card_lang),
            EntityDocument::Structure(r) => self.preview_svg(r, card_lang),
        }
    }

    pub fn export_document(&self, doc: &EntityDocument, card_lang: Language) -> ForgeResult<ExportedPng> {
        match doc {
            EntityDocument::Card(r) => self.export_png(r, card_lang),
            EntityDocument::Rune(r) => self.export_png(r, card_lang),
            EntityDocument::Artefact(r) => self.export_png(r, card_lang),
            EntityDocument::Structure(r) => self.export_png(r, card_lang),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
