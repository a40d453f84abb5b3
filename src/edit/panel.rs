//! Editor panel schemas.
//!
//! A panel lists, per section, the fields an editor shows for one record: label (app
//! language), widget, current value, and whether the control is enabled. Select option labels
//! follow the card language. Panels are rebuilt from the record after every edit.

use std::fmt;

use crate::{
    edit::{ops::EditOp, path::FieldPath, record::Editable, value::FieldValue},
    foundation::core::fmt_number,
    model::{
        artefact::ArtefactData,
        card::{CardData, CastConfig},
        enums::{
            CardType, CastTier, ClosedEnum, ElementType, EntityKind, Language, StructureType,
            TargetType,
        },
        rune::RuneData,
        structure::StructureData,
    },
    theme::labels::{Label, UiText, ui_text},
};

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Text,
    TextArea,
    Number,
    Select(Vec<SelectOption>),
    Toggle,
    /// `shown` is what the slider displays, which may differ from the stored value.
    Slider { min: f64, max: f64, shown: f64 },
    ImageUrl,
    /// Reads a local file into a data URI stored at the field path.
    ImageUpload,
}

impl Widget {
    fn name(&self) -> &'static str {
        match self {
            Widget::Text => "text",
            Widget::TextArea => "textarea",
            Widget::Number => "number",
            Widget::Select(_) => "select",
            Widget::Toggle => "toggle",
            Widget::Slider { .. } => "slider",
            Widget::ImageUrl => "image-url",
            Widget::ImageUpload => "upload",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub path: FieldPath,
    pub label: String,
    pub widget: Widget,
    pub value: FieldValue,
    pub enabled: bool,
}

/// A button that issues a list operation.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelAction {
    pub label: String,
    pub op: EditOp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelSection {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub actions: Vec<PanelAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorPanel {
    pub kind: EntityKind,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<PanelSection>,
}

impl EditorPanel {
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, path: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.path.as_str() == path)
    }

    pub fn actions(&self) -> impl Iterator<Item = &PanelAction> {
        self.sections.iter().flat_map(|s| s.actions.iter())
    }
}

impl fmt::Display for EditorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.kind)?;
        writeln!(f, "{}", self.subtitle)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "[{}]", section.title)?;
            for field in &section.fields {
                let shown = match &field.widget {
                    Widget::Slider { shown, .. } => format!("{}%", fmt_number(*shown)),
                    Widget::Select(options) => {
                        let current = field.value.to_text();
                        options
                            .iter()
                            .find(|o| o.value == current)
                            .map_or(current, |o| format!("{} ({})", o.label, o.value))
                    }
                    _ => field.value.to_text(),
                };
                write!(
                    f,
                    "  {:<28} {:<8} {}: {}",
                    field.path.as_str(),
                    field.widget.name(),
                    field.label,
                    shown
                )?;
                if !field.enabled {
                    write!(f, " (disabled)")?;
                }
                writeln!(f)?;
            }
            for action in &section.actions {
                writeln!(f, "  + {}", action.label)?;
            }
        }
        Ok(())
    }
}

/// `value || fallback`: zero and NaN fall back.
fn or_fallback(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        fallback
    } else {
        value
    }
}

fn options<E: Label + ClosedEnum>(lang: Language) -> Vec<SelectOption> {
    E::ALL
        .iter()
        .map(|&v| SelectOption {
            value: v.as_str(),
            label: v.label(lang),
        })
        .collect()
}

struct SectionBuilder<'a, R> {
    record: &'a R,
    section: PanelSection,
}

impl<'a, R: Editable> SectionBuilder<'a, R> {
    fn new(record: &'a R, title: impl Into<String>) -> Self {
        Self {
            record,
            section: PanelSection {
                title: title.into(),
                fields: Vec::new(),
                actions: Vec::new(),
            },
        }
    }

    fn field(mut self, path: &str, label: &str, widget: Widget, enabled: bool) -> Self {
        let Ok(path) = FieldPath::parse(path) else {
            return self;
        };
        let value = self.record.read(&path).unwrap_or(FieldValue::Empty);
        self.section.fields.push(FieldSpec {
            path,
            label: label.to_string(),
            widget,
            value,
            enabled,
        });
        self
    }

    fn action(mut self, label: String, op: EditOp) -> Self {
        self.section.actions.push(PanelAction { label, op });
        self
    }

    fn build(self) -> PanelSection {
        self.section
    }
}

fn header(kind: EntityKind, ui: &UiText, sections: Vec<PanelSection>) -> EditorPanel {
    EditorPanel {
        kind,
        title: ui.editor_title.to_string(),
        subtitle: ui.editor_subtitle.to_string(),
        sections,
    }
}

fn art_section<'a, R: Editable>(
    record: &'a R,
    ui: &UiText,
    no_background: bool,
    opacity_shown: f64,
) -> SectionBuilder<'a, R> {
    let enabled = !no_background;
    SectionBuilder::new(record, format!("{} ({})", ui.art, ui.art_hint))
        .field("imageUrl", ui.image_url, Widget::ImageUrl, enabled)
        .field("imageUrl", ui.upload, Widget::ImageUpload, enabled)
        .field("noBackground", ui.no_background, Widget::Toggle, true)
        .field(
            "imageOpacity",
            ui.fade,
            Widget::Slider {
                min: 0.0,
                max: 100.0,
                shown: opacity_shown,
            },
            enabled,
        )
}

pub fn card_panel(card: &CardData, ui_lang: Language, card_lang: Language) -> EditorPanel {
    let ui = ui_text(ui_lang);

    let general = SectionBuilder::new(card, ui.general)
        .field("name", ui.card_name, Widget::Text, true)
        .field("type", ui.kind, Widget::Select(options::<CardType>(card_lang)), true)
        .field(
            "element",
            ui.element,
            Widget::Select(options::<ElementType>(card_lang)),
            true,
        )
        .field("manaCost", ui.mana_cost, Widget::Number, true)
        .field("cooldown", ui.cooldown, Widget::Number, true)
        .field("range", ui.range, Widget::Number, true)
        .build();

    let art = art_section(card, ui, card.no_background, or_fallback(card.image_opacity, 60.0))
        .field("isCounter", ui.is_counter, Widget::Toggle, true)
        .field(
            "contentOpacity",
            ui.content_fade,
            Widget::Slider {
                min: 0.0,
                max: 100.0,
                shown: or_fallback(card.content_opacity, 85.0),
            },
            true,
        )
        .field("baseDescription", ui.desc_base, Widget::TextArea, true)
        .build();

    let mut sections = vec![general, art];
    for &tier in CastTier::ALL {
        sections.push(cast_section(card, tier, card.cast(tier), ui_lang, card_lang));
    }
    header(EntityKind::Card, ui, sections)
}

fn cast_section(
    card: &CardData,
    tier: CastTier,
    cfg: &CastConfig,
    ui_lang: Language,
    card_lang: Language,
) -> PanelSection {
    let ui = ui_text(ui_lang);
    let base = tier.field_name();
    let mut b = SectionBuilder::new(card, format!("{}: {}", ui.cast_config, tier.label(ui_lang)))
        .field(&format!("{base}.damage"), ui.damage, Widget::Number, true)
        .field(&format!("{base}.duration"), ui.duration, Widget::Number, true)
        .field(&format!("{base}.description"), ui.desc_effect, Widget::Text, true);

    for (i, _) in cfg.targets.iter().enumerate() {
        b = b
            .field(
                &format!("{base}.targets.{i}"),
                ui.targets,
                Widget::Select(options::<TargetType>(card_lang)),
                true,
            )
            .action(
                format!("{} {} #{}", ui.remove, ui.targets, i + 1),
                EditOp::RemoveTarget { tier, index: i },
            );
    }
    b = b.action(format!("{} ({})", ui.add, ui.targets), EditOp::AddTarget { tier });

    for (i, _) in cfg.effects.iter().enumerate() {
        b = b
            .field(&format!("{base}.effects.{i}.name"), ui.name, Widget::Text, true)
            .field(&format!("{base}.effects.{i}.level"), ui.level, Widget::Number, true)
            .field(&format!("{base}.effects.{i}.chips"), ui.chips, Widget::Number, true)
            .action(
                format!("{} {} #{}", ui.remove, ui.status_effects, i + 1),
                EditOp::RemoveEffect { tier, index: i },
            );
    }
    b.action(
        format!("{} ({})", ui.add, ui.status_effects),
        EditOp::AddEffect { tier },
    )
    .build()
}

pub fn rune_panel(rune: &RuneData, ui_lang: Language) -> EditorPanel {
    let ui = ui_text(ui_lang);
    let general = SectionBuilder::new(rune, ui.general)
        .field("name", ui.card_name, Widget::Text, true)
        .build();
    let art = art_section(rune, ui, rune.no_background, rune.image_opacity).build();
    let effects = SectionBuilder::new(rune, ui.effect)
        .field("activationEffect", ui.activation_effect, Widget::TextArea, true)
        .field("continuousEffect", ui.continuous_effect, Widget::TextArea, true)
        .build();
    header(EntityKind::Rune, ui, vec![general, art, effects])
}

pub fn artefact_panel(artefact: &ArtefactData, ui_lang: Language) -> EditorPanel {
    let ui = ui_text(ui_lang);
    let general = SectionBuilder::new(artefact, ui.general)
        .field("name", ui.card_name, Widget::Text, true)
        .field("cooldown", ui.cooldown, Widget::Number, true)
        .build();
    let art = art_section(artefact, ui, artefact.no_background, artefact.image_opacity).build();
    let effect = SectionBuilder::new(artefact, ui.effect)
        .field("effect", ui.effect, Widget::TextArea, true)
        .build();
    header(EntityKind::Artefact, ui, vec![general, art, effect])
}

pub fn structure_panel(
    structure: &StructureData,
    ui_lang: Language,
    card_lang: Language,
) -> EditorPanel {
    let ui = ui_text(ui_lang);
    let elements = || Widget::Select(options::<ElementType>(card_lang));
    let is_barrier = structure.is_barrier();

    let mut general = SectionBuilder::new(structure, ui.general)
        .field("name", ui.card_name, Widget::Text, true)
        .field(
            "type",
            ui.kind,
            Widget::Select(options::<StructureType>(card_lang)),
            true,
        )
        .field("element", ui.element, elements(), true)
        .field("manaCost", ui.mana_cost, Widget::Number, true)
        .field("cooldown", ui.cooldown, Widget::Number, true)
        .field("description", ui.desc_base, Widget::TextArea, true)
        .field("durability", ui.durability, Widget::Number, true);
    if !is_barrier {
        general = general.field("runicElement", ui.runic_element, elements(), true);
    }
    let general = general
        .field("resistanceElement", ui.resistance, elements(), true)
        .field(
            "resistanceLevel",
            &format!("{} ({})", ui.level, ui.resistance),
            Widget::Number,
            true,
        )
        .build();

    let mut sections = vec![general];
    if is_barrier {
        sections.push(
            SectionBuilder::new(structure, ui.touch_effect)
                .field("touchEffectElement", ui.element, elements(), true)
                .field("touchEffectValue", ui.touch_damage, Widget::Number, true)
                .build(),
        );
    }

    let mut art = art_section(
        structure,
        ui,
        structure.no_background,
        structure.image_opacity,
    );
    if is_barrier {
        art = art.field("isCounter", ui.is_counter, Widget::Toggle, true);
    }
    sections.push(art.build());
    sections.push(
        SectionBuilder::new(structure, ui.continuous_effect)
            .field("continuousEffect", ui.continuous_effect, Widget::TextArea, true)
            .build(),
    );
    header(EntityKind::Structure, ui, sections)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/panel.rs"]
mod tests;
