use crate::{
    edit::{
        path::{FieldPath, index_in},
        value::FieldValue,
    },
    foundation::error::{ForgeError, ForgeResult},
    model::{
        artefact::ArtefactData,
        card::{CardData, CastConfig},
        enums::{CastTier, EntityKind},
        rune::RuneData,
        structure::StructureData,
    },
};

/// Field-level access to an entity record through dotted paths.
///
/// `update` is the only entry point editors use: it returns a new record and leaves `self`
/// untouched, also when the path or value is rejected.
pub trait Editable: Clone {
    const KIND: EntityKind;

    fn read(&self, path: &FieldPath) -> ForgeResult<FieldValue>;

    /// Write one field in place. Only ever called on a scratch copy.
    fn write(&mut self, path: &FieldPath, value: &FieldValue) -> ForgeResult<()>;

    fn cast_config(&self, _tier: CastTier) -> Option<&CastConfig> {
        None
    }

    fn cast_config_mut(&mut self, _tier: CastTier) -> Option<&mut CastConfig> {
        None
    }

    fn update(&self, path: &FieldPath, value: FieldValue) -> ForgeResult<Self> {
        edited(self, |next| next.write(path, &value))
    }
}

/// Clone `record`, let `f` change the copy and return it; on error the copy is dropped.
pub fn edited<T, F>(record: &T, f: F) -> ForgeResult<T>
where
    T: Clone,
    F: FnOnce(&mut T) -> ForgeResult<()>,
{
    let mut next = record.clone();
    f(&mut next)?;
    Ok(next)
}

fn read_only(path: &FieldPath) -> ForgeError {
    ForgeError::validation(format!("field '{path}' is read-only"))
}

fn tier_for_field(name: &str) -> Option<CastTier> {
    CastTier::ALL
        .iter()
        .copied()
        .find(|t| t.field_name() == name)
}

fn read_cast(cfg: &CastConfig, path: &FieldPath, rest: &[&str]) -> ForgeResult<FieldValue> {
    Ok(match rest {
        ["damage"] => FieldValue::opt_number(cfg.damage),
        ["duration"] => FieldValue::opt_number(cfg.duration),
        ["description"] => FieldValue::text(&cfg.description),
        ["targets", idx] => {
            let i = index_in(path, idx, cfg.targets.len())?;
            FieldValue::enum_value(cfg.targets[i])
        }
        ["effects", idx, field] => {
            let i = index_in(path, idx, cfg.effects.len())?;
            let fx = &cfg.effects[i];
            match *field {
                "id" => FieldValue::text(&fx.id),
                "name" => FieldValue::text(&fx.name),
                "level" => FieldValue::Number(fx.level),
                "chips" => FieldValue::Number(fx.chips),
                _ => return Err(path.unknown()),
            }
        }
        _ => return Err(path.unknown()),
    })
}

fn write_cast(
    cfg: &mut CastConfig,
    path: &FieldPath,
    rest: &[&str],
    value: &FieldValue,
) -> ForgeResult<()> {
    match rest {
        ["damage"] => cfg.damage = value.to_opt_number()?,
        ["duration"] => cfg.duration = value.to_opt_number()?,
        ["description"] => cfg.description = value.to_text(),
        ["targets", idx] => {
            let i = index_in(path, idx, cfg.targets.len())?;
            cfg.targets[i] = value.to_enum()?;
        }
        ["effects", idx, field] => {
            let i = index_in(path, idx, cfg.effects.len())?;
            let fx = &mut cfg.effects[i];
            match *field {
                "id" => return Err(read_only(path)),
                "name" => fx.name = value.to_text(),
                "level" => fx.level = value.to_number()?,
                "chips" => fx.chips = value.to_number()?,
                _ => return Err(path.unknown()),
            }
        }
        _ => return Err(path.unknown()),
    }
    Ok(())
}

impl Editable for CardData {
    const KIND: EntityKind = EntityKind::Card;

    fn read(&self, path: &FieldPath) -> ForgeResult<FieldValue> {
        Ok(match path.segments().as_slice() {
            ["id"] => FieldValue::text(&self.id),
            ["name"] => FieldValue::text(&self.name),
            ["type"] => FieldValue::enum_value(self.card_type),
            ["element"] => FieldValue::enum_value(self.element),
            ["manaCost"] => FieldValue::Number(self.mana_cost),
            ["cooldown"] => FieldValue::Number(self.cooldown),
            ["range"] => FieldValue::Number(self.range),
            ["baseDescription"] => FieldValue::text(&self.base_description),
            ["imageUrl"] => FieldValue::opt_text(self.image_url.as_deref()),
            ["imageOpacity"] => FieldValue::Number(self.image_opacity),
            ["contentOpacity"] => FieldValue::Number(self.content_opacity),
            ["noBackground"] => FieldValue::Bool(self.no_background),
            ["isCounter"] => FieldValue::Bool(self.is_counter),
            [head, rest @ ..] => match tier_for_field(head) {
                Some(tier) => read_cast(self.cast(tier), path, rest)?,
                None => return Err(path.unknown()),
            },
            [] => return Err(path.unknown()),
        })
    }

    fn write(&mut self, path: &FieldPath, value: &FieldValue) -> ForgeResult<()> {
        match path.segments().as_slice() {
            ["id"] => return Err(read_only(path)),
            ["name"] => self.name = value.to_text(),
            ["type"] => self.card_type = value.to_enum()?,
            ["element"] => self.element = value.to_enum()?,
            ["manaCost"] => self.mana_cost = value.to_number()?,
            ["cooldown"] => self.cooldown = value.to_number()?,
            ["range"] => self.range = value.to_number()?,
            ["baseDescription"] => self.base_description = value.to_text(),
            ["imageUrl"] => self.image_url = value.to_opt_text(),
            ["imageOpacity"] => self.image_opacity = value.to_number()?,
            ["contentOpacity"] => self.content_opacity = value.to_number()?,
            ["noBackground"] => self.no_background = value.to_bool()?,
            ["isCounter"] => self.is_counter = value.to_bool()?,
            [head, rest @ ..] => match tier_for_field(head) {
                Some(tier) => write_cast(self.cast_mut(tier), path, rest, value)?,
                None => return Err(path.unknown()),
            },
            [] => return Err(path.unknown()),
        }
        Ok(())
    }

    fn cast_config(&self, tier: CastTier) -> Option<&CastConfig> {
        Some(self.cast(tier))
    }

    fn cast_config_mut(&mut self, tier: CastTier) -> Option<&mut CastConfig> {
        Some(self.cast_mut(tier))
    }
}

impl Editable for RuneData {
    const KIND: EntityKind = EntityKind::Rune;

    fn read(&self, path: &FieldPath) -> ForgeResult<FieldValue> {
        Ok(match path.segments().as_slice() {
            ["id"] => FieldValue::text(&self.id),
            ["name"] => FieldValue::text(&self.name),
            ["activationEffect"] => FieldValue::text(&self.activation_effect),
            ["continuousEffect"] => FieldValue::text(&self.continuous_effect),
            ["imageUrl"] => FieldValue::opt_text(self.image_url.as_deref()),
            ["imageOpacity"] => FieldValue::Number(self.image_opacity),
            ["noBackground"] => FieldValue::Bool(self.no_background),
            _ => return Err(path.unknown()),
        })
    }

    fn write(&mut self, path: &FieldPath, value: &FieldValue) -> ForgeResult<()> {
        match path.segments().as_slice() {
            ["id"] => return Err(read_only(path)),
            ["name"] => self.name = value.to_text(),
            ["activationEffect"] => self.activation_effect = value.to_text(),
            ["continuousEffect"] => self.continuous_effect = value.to_text(),
            ["imageUrl"] => self.image_url = value.to_opt_text(),
            ["imageOpacity"] => self.image_opacity = value.to_number()?,
            ["noBackground"] => self.no_background = value.to_bool()?,
            _ => return Err(path.unknown()),
        }
        Ok(())
    }
}

impl Editable for ArtefactData {
    const KIND: EntityKind = EntityKind::Artefact;

    fn read(&self, path: &FieldPath) -> ForgeResult<FieldValue> {
        Ok(match path.segments().as_slice() {
            ["id"] => FieldValue::text(&self.id),
            ["name"] => FieldValue::text(&self.name),
            ["effect"] => FieldValue::text(&self.effect),
            ["cooldown"] => FieldValue::Number(self.cooldown),
            ["imageUrl"] => FieldValue::opt_text(self.image_url.as_deref()),
            ["imageOpacity"] => FieldValue::Number(self.image_opacity),
            ["noBackground"] => FieldValue::Bool(self.no_background),
            _ => return Err(path.unknown()),
        })
    }

    fn write(&mut self, path: &FieldPath, value: &FieldValue) -> ForgeResult<()> {
        match path.segments().as_slice() {
            ["id"] => return Err(read_only(path)),
            ["name"] => self.name = value.to_text(),
            ["effect"] => self.effect = value.to_text(),
            ["cooldown"] => self.cooldown = value.to_number()?,
            ["imageUrl"] => self.image_url = value.to_opt_text(),
            ["imageOpacity"] => self.image_opacity = value.to_number()?,
            ["noBackground"] => self.no_background = value.to_bool()?,
            _ => return Err(path.unknown()),
        }
        Ok(())
    }
}

impl Editable for StructureData {
    const KIND: EntityKind = EntityKind::Structure;

    fn read(&self, path: &FieldPath) -> ForgeResult<FieldValue> {
        Ok(match path.segments().as_slice() {
            ["id"] => FieldValue::text(&self.id),
            ["name"] => FieldValue::text(&self.name),
            ["type"] => FieldValue::enum_value(self.structure_type),
            ["description"] => FieldValue::text(&self.description),
            ["manaCost"] => FieldValue::Number(self.mana_cost),
            ["cooldown"] => FieldValue::Number(self.cooldown),
            ["element"] => FieldValue::enum_value(self.element),
            ["durability"] => FieldValue::Number(self.durability),
            ["resistanceElement"] => FieldValue::enum_value(self.resistance_element),
            ["resistanceLevel"] => FieldValue::Number(self.resistance_level),
            ["runicElement"] => FieldValue::opt_enum(self.runic_element),
            ["continuousEffect"] => FieldValue::text(&self.continuous_effect),
            ["touchEffectElement"] => FieldValue::opt_enum(self.touch_effect_element),
            ["touchEffectValue"] => FieldValue::opt_number(self.touch_effect_value),
            ["imageUrl"] => FieldValue::opt_text(self.image_url.as_deref()),
            ["imageOpacity"] => FieldValue::Number(self.image_opacity),
            ["noBackground"] => FieldValue::Bool(self.no_background),
            ["isCounter"] => FieldValue::Bool(self.is_counter),
            _ => return Err(path.unknown()),
        })
    }

    fn write(&mut self, path: &FieldPath, value: &FieldValue) -> ForgeResult<()> {
        match path.segments().as_slice() {
            ["id"] => return Err(read_only(path)),
            ["name"] => self.name = value.to_text(),
            ["type"] => self.structure_type = value.to_enum()?,
            ["description"] => self.description = value.to_text(),
            ["manaCost"] => self.mana_cost = value.to_number()?,
            ["cooldown"] => self.cooldown = value.to_number()?,
            ["element"] => self.element = value.to_enum()?,
            ["durability"] => self.durability = value.to_number()?,
            ["resistanceElement"] => self.resistance_element = value.to_enum()?,
            ["resistanceLevel"] => self.resistance_level = value.to_number()?,
            ["runicElement"] => self.runic_element = value.to_opt_enum()?,
            ["continuousEffect"] => self.continuous_effect = value.to_text(),
            ["touchEffectElement"] => self.touch_effect_element = value.to_opt_enum()?,
            ["touchEffectValue"] => self.touch_effect_value = value.to_opt_number()?,
            ["imageUrl"] => self.image_url = value.to_opt_text(),
            ["imageOpacity"] => self.image_opacity = value.to_number()?,
            ["noBackground"] => self.no_background = value.to_bool()?,
            ["isCounter"] => self.is_counter = value.to_bool()?,
            _ => return Err(path.unknown()),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/record.rs"]
mod tests;
