//! The seam between the four record kinds and the shared preview/export pipeline.

use crate::{
    assets::art::PlaceholderStyle,
    edit::{
        panel::{EditorPanel, artefact_panel, card_panel, rune_panel, structure_panel},
        record::Editable,
    },
    model::{
        artefact::ArtefactData, card::CardData, enums::Language, rune::RuneData,
        structure::StructureData,
    },
    render::{
        previews::{self, SceneContext},
        svg::Scene,
    },
};

/// A record that can be edited, previewed and exported.
pub trait Entity: Editable + std::fmt::Debug {
    fn display_name(&self) -> &str;

    /// Last component of the export filename, e.g. `FIRE` or `RUNE`.
    fn export_suffix(&self) -> &'static str;

    fn image_url(&self) -> Option<&str>;

    /// When set the preview paints the generated pattern and ignores `image_url`.
    fn no_background(&self) -> bool;

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::for_kind(Self::KIND)
    }

    fn panel(&self, ui_lang: Language, card_lang: Language) -> EditorPanel;

    fn compose(&self, ctx: &SceneContext) -> Scene;
}

impl Entity for CardData {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn export_suffix(&self) -> &'static str {
        self.element.as_str()
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    fn no_background(&self) -> bool {
        self.no_background
    }

    fn panel(&self, ui_lang: Language, card_lang: Language) -> EditorPanel {
        card_panel(self, ui_lang, card_lang)
    }

    fn compose(&self, ctx: &SceneContext) -> Scene {
        previews::card::compose(self, ctx)
    }
}

impl Entity for RuneData {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn export_suffix(&self) -> &'static str {
        "RUNE"
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    fn no_background(&self) -> bool {
        self.no_background
    }

    fn panel(&self, ui_lang: Language, _card_lang: Language) -> EditorPanel {
        rune_panel(self, ui_lang)
    }

    fn compose(&self, ctx: &SceneContext) -> Scene {
        previews::rune::compose(self, ctx)
    }
}

impl Entity for ArtefactData {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn export_suffix(&self) -> &'static str {
        "ARTEFACT"
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    fn no_background(&self) -> bool {
        self.no_background
    }

    fn panel(&self, ui_lang: Language, _card_lang: Language) -> EditorPanel {
        artefact_panel(self, ui_lang)
    }

    fn compose(&self, ctx: &SceneContext) -> Scene {
        previews::artefact::compose(self, ctx)
    }
}

impl Entity for StructureData {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn export_suffix(&self) -> &'static str {
        "STRUCTURE"
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    fn no_background(&self) -> bool {
        self.no_background
    }

    fn panel(&self, ui_lang: Language, card_lang: Language) -> EditorPanel {
        structure_panel(self, ui_lang, card_lang)
    }

    fn compose(&self, ctx: &SceneContext) -> Scene {
        previews::structure::compose(self, ctx)
    }
}
