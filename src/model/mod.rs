pub mod artefact;
pub mod card;
pub mod document;
pub mod enums;
pub mod initial;
pub mod numeric;
pub mod rune;
pub mod structure;
