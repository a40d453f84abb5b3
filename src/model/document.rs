use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::ForgeResult,
    model::{
        artefact::ArtefactData,
        card::CardData,
        enums::EntityKind,
        initial::{initial_artefact, initial_card, initial_rune, initial_structure},
        rune::RuneData,
        structure::StructureData,
    },
};

/// One entity record as stored in a JSON file, tagged with its kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityDocument {
    Card(CardData),
    Rune(RuneData),
    Artefact(ArtefactData),
    Structure(StructureData),
}

impl EntityDocument {
    pub fn initial(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Card => Self::Card(initial_card()),
            EntityKind::Rune => Self::Rune(initial_rune()),
            EntityKind::Artefact => Self::Artefact(initial_artefact()),
            EntityKind::Structure => Self::Structure(initial_structure()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Card(_) => EntityKind::Card,
            Self::Rune(_) => EntityKind::Rune,
            Self::Artefact(_) => EntityKind::Artefact,
            Self::Structure(_) => EntityKind::Structure,
        }
    }

    pub fn from_json(s: &str) -> ForgeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> ForgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_path(path: &Path) -> ForgeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read entity document '{}'", path.display()))?;
        Self::from_json(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
