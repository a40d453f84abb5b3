//! Display strings for both languages.
//!
//! Card labels are printed on previews and follow the card language; UI and menu labels
//! belong to the editor chrome and follow the app language.

use crate::model::enums::{CardType, CastTier, ElementType, Language, StructureType, TargetType};

/// Enum values that have a display string on cards.
pub trait Label: Copy {
    fn label(self, lang: Language) -> &'static str;
}

impl Label for ElementType {
    fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (ElementType::Fire, Language::PtBr) => "Fogo",
            (ElementType::Fire, Language::EnUs) => "Fire",
            (ElementType::Water, Language::PtBr) => "Água",
            (ElementType::Water, Language::EnUs) => "Water",
            (ElementType::Earth, Language::PtBr) => "Terra",
            (ElementType::Earth, Language::EnUs) => "Earth",
            (ElementType::Wind, Language::PtBr) => "Vento",
            (ElementType::Wind, Language::EnUs) => "Wind",
            (ElementType::Dark, Language::PtBr) => "Trevas",
            (ElementType::Dark, Language::EnUs) => "Dark",
            (ElementType::Ancestral, Language::PtBr) => "Ancestral",
            (ElementType::Ancestral, Language::EnUs) => "Ancestral",
            (ElementType::Tecno, Language::PtBr) => "Tecno",
            (ElementType::Tecno, Language::EnUs) => "Techno",
            (ElementType::Divine, Language::PtBr) => "Divino",
            (ElementType::Divine, Language::EnUs) => "Divine",
        }
    }
}

impl Label for CardType {
    fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (CardType::Magic, Language::PtBr) => "Magia",
            (CardType::Magic, Language::EnUs) => "Magic",
            (CardType::Enchantment, Language::PtBr) => "Encantamento",
            (CardType::Enchantment, Language::EnUs) => "Enchantment",
            (CardType::Seal, Language::PtBr) => "Selo",
            (CardType::Seal, Language::EnUs) => "Seal",
            (CardType::Barrier, Language::PtBr) => "Barreira",
            (CardType::Barrier, Language::EnUs) => "Barrier",
        }
    }
}

impl Label for StructureType {
    fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (StructureType::Altar, Language::PtBr) => "Altar",
            (StructureType::Altar, Language::EnUs) => "Altar",
            (StructureType::Barrier, Language::PtBr) => "Barreira",
            (StructureType::Barrier, Language::EnUs) => "Barrier",
        }
    }
}

impl Label for TargetType {
    fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (TargetType::Player, Language::PtBr) => "Jogador",
            (TargetType::Player, Language::EnUs) => "Player",
            (TargetType::Field, Language::PtBr) => "Campo",
            (TargetType::Field, Language::EnUs) => "Field",
            (TargetType::Opponent, Language::PtBr) => "Oponente",
            (TargetType::Opponent, Language::EnUs) => "Opponent",
        }
    }
}

impl Label for CastTier {
    fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (CastTier::Weak, Language::PtBr) => "Fraco",
            (CastTier::Weak, Language::EnUs) => "Weak",
            (CastTier::Good, Language::PtBr) => "Bom",
            (CastTier::Good, Language::EnUs) => "Good",
            (CastTier::Perfect, Language::PtBr) => "Perfeito",
            (CastTier::Perfect, Language::EnUs) => "Perfect",
        }
    }
}

/// Headings and readout prefixes printed on previews.
#[derive(Debug)]
pub struct CardText {
    pub cooldown: &'static str,
    pub range: &'static str,
    pub hp: &'static str,
    pub resistance_short: &'static str,
    pub runic_element: &'static str,
    pub activation_effect: &'static str,
    pub continuous_effect: &'static str,
    pub touch_effect: &'static str,
}

const CARD_PT: CardText = CardText {
    cooldown: "Recarga",
    range: "Alcance",
    hp: "HP",
    resistance_short: "RES",
    runic_element: "Elemento Rúnico",
    activation_effect: "Efeito de Ativação",
    continuous_effect: "Efeito Contínuo",
    touch_effect: "Efeito de Toque",
};

const CARD_EN: CardText = CardText {
    cooldown: "Cooldown",
    range: "Range",
    hp: "HP",
    resistance_short: "RES",
    runic_element: "Runic Element",
    activation_effect: "Activation Effect",
    continuous_effect: "Continuous Effect",
    touch_effect: "Touch Effect",
};

pub fn card_text(lang: Language) -> &'static CardText {
    match lang {
        Language::PtBr => &CARD_PT,
        Language::EnUs => &CARD_EN,
    }
}

/// Editor panel chrome.
#[derive(Debug)]
pub struct UiText {
    pub app_language: &'static str,
    pub card_language: &'static str,
    pub editor_title: &'static str,
    pub editor_subtitle: &'static str,
    pub general: &'static str,
    pub card_name: &'static str,
    pub kind: &'static str,
    pub element: &'static str,
    pub mana_cost: &'static str,
    pub cooldown: &'static str,
    pub range: &'static str,
    pub art: &'static str,
    pub art_hint: &'static str,
    pub image_url: &'static str,
    pub upload: &'static str,
    pub no_background: &'static str,
    pub is_counter: &'static str,
    pub fade: &'static str,
    pub content_fade: &'static str,
    pub desc_base: &'static str,
    pub cast_config: &'static str,
    pub damage: &'static str,
    pub duration: &'static str,
    pub desc_effect: &'static str,
    pub targets: &'static str,
    pub status_effects: &'static str,
    pub add: &'static str,
    pub remove: &'static str,
    pub name: &'static str,
    pub level: &'static str,
    pub chips: &'static str,
    pub durability: &'static str,
    pub runic_element: &'static str,
    pub resistance: &'static str,
    pub touch_effect: &'static str,
    pub touch_damage: &'static str,
    pub activation_effect: &'static str,
    pub continuous_effect: &'static str,
    pub effect: &'static str,
    pub cropper_title: &'static str,
    pub upload_image: &'static str,
    pub re_upload: &'static str,
    pub download_crop: &'static str,
    pub select_image: &'static str,
    pub zoom: &'static str,
    pub zoom_in: &'static str,
    pub zoom_out: &'static str,
    pub drag_to_crop: &'static str,
    pub save: &'static str,
    pub edit: &'static str,
    pub view: &'static str,
}

const UI_PT: UiText = UiText {
    app_language: "Idioma do App",
    card_language: "Idioma do Card",
    editor_title: "Editor",
    editor_subtitle: "Preencha os campos e acompanhe a prévia ao lado.",
    general: "Geral",
    card_name: "Nome",
    kind: "Tipo",
    element: "Elemento",
    mana_cost: "Custo de Mana",
    cooldown: "Recarga",
    range: "Alcance",
    art: "Arte",
    art_hint: "Recomendado: 400x600px (2:3)",
    image_url: "URL da Imagem",
    upload: "Enviar Imagem",
    no_background: "Sem Fundo",
    is_counter: "Contra-Ataque",
    fade: "Opacidade da Arte",
    content_fade: "Opacidade do Conteúdo",
    desc_base: "Descrição Base",
    cast_config: "Configuração de Conjuração",
    damage: "Dano",
    duration: "Duração",
    desc_effect: "Descrição do Efeito",
    targets: "Alvos",
    status_effects: "Efeitos de Status",
    add: "Adicionar",
    remove: "Remover",
    name: "Nome",
    level: "Nível",
    chips: "Fichas",
    durability: "Durabilidade",
    runic_element: "Elemento Rúnico",
    resistance: "Resistência",
    touch_effect: "Efeito de Toque",
    touch_damage: "Dano",
    activation_effect: "Efeito de Ativação",
    continuous_effect: "Efeito Contínuo",
    effect: "Efeito",
    cropper_title: "Recortar Imagem",
    upload_image: "Enviar Imagem",
    re_upload: "Reenviar",
    download_crop: "Baixar Recorte",
    select_image: "Selecione uma imagem para começar.",
    zoom: "Zoom",
    zoom_in: "Aproximar",
    zoom_out: "Afastar",
    drag_to_crop: "Arraste a moldura para escolher o recorte.",
    save: "Salvar",
    edit: "Editar",
    view: "Ver",
};

const UI_EN: UiText = UiText {
    app_language: "App Language",
    card_language: "Card Language",
    editor_title: "Editor",
    editor_subtitle: "Fill in the fields and watch the preview update.",
    general: "General",
    card_name: "Name",
    kind: "Type",
    element: "Element",
    mana_cost: "Mana Cost",
    cooldown: "Cooldown",
    range: "Range",
    art: "Art",
    art_hint: "Recommended: 400x600px (2:3)",
    image_url: "Image URL",
    upload: "Upload Image",
    no_background: "No Background",
    is_counter: "Counter",
    fade: "Art Opacity",
    content_fade: "Content Opacity",
    desc_base: "Base Description",
    cast_config: "Cast Configuration",
    damage: "Damage",
    duration: "Duration",
    desc_effect: "Effect Description",
    targets: "Targets",
    status_effects: "Status Effects",
    add: "Add",
    remove: "Remove",
    name: "Name",
    level: "Level",
    chips: "Chips",
    durability: "Durability",
    runic_element: "Runic Element",
    resistance: "Resistance",
    touch_effect: "Touch Effect",
    touch_damage: "Damage",
    activation_effect: "Activation Effect",
    continuous_effect: "Continuous Effect",
    effect: "Effect",
    cropper_title: "Image Cropper",
    upload_image: "Upload Image",
    re_upload: "Re-Upload",
    download_crop: "Download Crop",
    select_image: "Select an image to start.",
    zoom: "Zoom",
    zoom_in: "Zoom In",
    zoom_out: "Zoom Out",
    drag_to_crop: "Drag the frame to choose the crop.",
    save: "Save",
    edit: "Edit",
    view: "View",
};

pub fn ui_text(lang: Language) -> &'static UiText {
    match lang {
        Language::PtBr => &UI_PT,
        Language::EnUs => &UI_EN,
    }
}

/// Main menu and navigation labels.
#[derive(Debug)]
pub struct MenuText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub power_card: &'static str,
    pub power_card_desc: &'static str,
    pub rune: &'static str,
    pub rune_desc: &'static str,
    pub structure: &'static str,
    pub structure_desc: &'static str,
    pub artefact: &'static str,
    pub artefact_desc: &'static str,
    pub image_cropper: &'static str,
    pub image_cropper_desc: &'static str,
    pub sanctuary: &'static str,
    pub sanctuary_desc: &'static str,
    pub under_construction: &'static str,
    pub back: &'static str,
}

const MENU_PT: MenuText = MenuText {
    title: "Wizards Ones",
    subtitle: "Estúdio de Criação",
    power_card: "Card de Poder",
    power_card_desc: "Crie magias com três níveis de conjuração, alvos e efeitos de status.",
    rune: "Runa",
    rune_desc: "Forje runas com efeitos de ativação e efeitos contínuos.",
    structure: "Estrutura",
    structure_desc: "Construa altares e barreiras com durabilidade e resistências.",
    artefact: "Artefato",
    artefact_desc: "Monte artefatos com efeito único e tempo de recarga.",
    image_cropper: "Recortador",
    image_cropper_desc: "Recorte qualquer imagem na proporção 2:3 dos cards.",
    sanctuary: "Santuário",
    sanctuary_desc: "Um novo tipo de card está a caminho.",
    under_construction: "Em Construção",
    back: "Voltar",
};

const MENU_EN: MenuText = MenuText {
    title: "Wizards Ones",
    subtitle: "Creation Studio",
    power_card: "Power Card",
    power_card_desc: "Create spells with three cast tiers, targets and status effects.",
    rune: "Rune",
    rune_desc: "Forge runes with activation and continuous effects.",
    structure: "Structure",
    structure_desc: "Build altars and barriers with durability and resistances.",
    artefact: "Artefact",
    artefact_desc: "Assemble artefacts with a single effect and a cooldown.",
    image_cropper: "Image Cropper",
    image_cropper_desc: "Crop any image to the cards' 2:3 ratio.",
    sanctuary: "Sanctuary",
    sanctuary_desc: "A new kind of card is on its way.",
    under_construction: "Under Construction",
    back: "Back",
};

pub fn menu_text(lang: Language) -> &'static MenuText {
    match lang {
        Language::PtBr => &MENU_PT,
        Language::EnUs => &MENU_EN,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/labels.rs"]
mod tests;
