use crate::{
    crop::geometry::CropTool,
    edit::{ops::{EditOp, EffectIdGen}, panel::EditorPanel},
    foundation::error::ForgeResult,
    model::{
        artefact::ArtefactData,
        card::CardData,
        document::EntityDocument,
        enums::{EntityKind, Language},
        initial::{initial_artefact, initial_card, initial_rune, initial_structure},
        rune::RuneData,
        structure::StructureData,
    },
    render::{
        entity::Entity,
        export::{ExportedPng, Renderer},
    },
    theme::labels::menu_text,
};

/// What the session is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    Studio(EntityKind),
    ImageCropper,
    /// Placeholder screen: a notice and a way back.
    Sanctuary,
}

/// One tile of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub mode: AppMode,
    pub title: &'static str,
    pub description: &'static str,
}

/// Everything one editing session holds. Records outlive mode switches; the crop tool does not.
#[derive(Clone, Debug)]
pub struct AppState {
    mode: AppMode,
    app_lang: Language,
    card_lang: Language,
    card: CardData,
    rune: RuneData,
    artefact: ArtefactData,
    structure: StructureData,
    crop: CropTool,
    ids: EffectIdGen,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Menu,
            app_lang: Language::default(),
            card_lang: Language::default(),
            card: initial_card(),
            rune: initial_rune(),
            artefact: initial_artefact(),
            structure: initial_structure(),
            crop: CropTool::new(),
            ids: EffectIdGen::new(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn navigate(&mut self, mode: AppMode) {
        if self.mode == AppMode::ImageCropper && mode != AppMode::ImageCropper {
            self.crop = CropTool::new();
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "navigate");
        self.mode = mode;
    }

    pub fn app_language(&self) -> Language {
        self.app_lang
    }

    pub fn card_language(&self) -> Language {
        self.card_lang
    }

    pub fn set_app_language(&mut self, lang: Language) {
        self.app_lang = lang;
    }

    pub fn set_card_language(&mut self, lang: Language) {
        self.card_lang = lang;
    }

    pub fn card(&self) -> &CardData {
        &self.card
    }

    pub fn rune(&self) -> &RuneData {
        &self.rune
    }

    pub fn artefact(&self) -> &ArtefactData {
        &self.artefact
    }

    pub fn structure(&self) -> &StructureData {
        &self.structure
    }

    pub fn crop(&self) -> &CropTool {
        &self.crop
    }

    pub fn crop_mut(&mut self) -> &mut CropTool {
        &mut self.crop
    }

    /// Snapshot of one record as a tagged document.
    pub fn document(&self, kind: EntityKind) -> EntityDocument {
        match kind {
            EntityKind::Card => EntityDocument::Card(self.card.clone()),
            EntityKind::Rune => EntityDocument::Rune(self.rune.clone()),
            EntityKind::Artefact => EntityDocument::Artefact(self.artefact.clone()),
            EntityKind::Structure => EntityDocument::Structure(self.structure.clone()),
        }
    }

    /// Replace the record of the document's kind.
    pub fn load_document(&mut self, doc: EntityDocument) {
        match doc {
            EntityDocument::Card(r) => self.card = r,
            EntityDocument::Rune(r) => self.rune = r,
            EntityDocument::Artefact(r) => self.artefact = r,
            EntityDocument::Structure(r) => self.structure = r,
        }
    }

    /// Apply `op` to the record of `kind`; on error the record is left as it was.
    pub fn edit(&mut self, kind: EntityKind, op: &EditOp) -> ForgeResult<()> {
        match kind {
            EntityKind::Card => self.card = op.apply(&self.card, &mut self.ids)?,
            EntityKind::Rune => self.rune = op.apply(&self.rune, &mut self.ids)?,
            EntityKind::Artefact => self.artefact = op.apply(&self.artefact, &mut self.ids)?,
            EntityKind::Structure => self.structure = op.apply(&self.structure, &mut self.ids)?,
        }
        Ok(())
    }

    pub fn panel(&self, kind: EntityKind) -> EditorPanel {
        let (ui, card) = (self.app_lang, self.card_lang);
        match kind {
            EntityKind::Card => self.card.panel(ui, card),
            EntityKind::Rune => self.rune.panel(ui, card),
            EntityKind::Artefact => self.artefact.panel(ui, card),
            EntityKind::Structure => self.structure.panel(ui, card),
        }
    }

    /// Composed preview scene as SVG text.
    pub fn preview(&self, kind: EntityKind, renderer: &Renderer) -> ForgeResult<String> {
        renderer.document_svg(&self.document(kind), self.card_lang)
    }

    /// Export the preview; failures are logged by the renderer and yield `None`.
    pub fn export(&self, kind: EntityKind, renderer: &Renderer) -> Option<ExportedPng> {
        renderer
            .export_document(&self.document(kind), self.card_lang)
            .ok()
    }

    /// Main menu tiles in display order, labeled in the app language.
    pub fn menu(&self) -> Vec<MenuEntry> {
        let t = menu_text(self.app_lang);
        let entry = |mode, title, description| MenuEntry {
            mode,
            title,
            description,
        };
        vec![
            entry(AppMode::Studio(EntityKind::Card), t.power_card, t.power_card_desc),
            entry(AppMode::Studio(EntityKind::Rune), t.rune, t.rune_desc),
            entry(AppMode::Studio(EntityKind::Structure), t.structure, t.structure_desc),
            entry(AppMode::Studio(EntityKind::Artefact), t.artefact, t.artefact_desc),
            entry(AppMode::ImageCropper, t.image_cropper, t.image_cropper_desc),
            entry(AppMode::Sanctuary, t.sanctuary, t.sanctuary_desc),
        ]
    }

    /// Title and notice of the placeholder screen.
    pub fn sanctuary_notice(&self) -> (&'static str, &'static str) {
        let t = menu_text(self.app_lang);
        (t.sanctuary, t.under_construction)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
