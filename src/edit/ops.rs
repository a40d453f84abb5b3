use std::collections::BTreeSet;

use crate::{
    edit::{
        path::FieldPath,
        record::{Editable, edited},
        value::FieldValue,
    },
    foundation::error::{ForgeError, ForgeResult},
    model::{
        card::{CastConfig, StatusEffect},
        enums::{CastTier, TargetType},
    },
};

/// Hands out status effect ids that are unique for the lifetime of a session.
#[derive(Clone, Debug, Default)]
pub struct EffectIdGen {
    issued: u64,
}

impl EffectIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id not contained in `taken`.
    pub fn next_id(&mut self, taken: &BTreeSet<String>) -> String {
        loop {
            self.issued += 1;
            let id = format!("fx-{}", self.issued);
            if !taken.contains(&id) {
                return id;
            }
        }
    }
}

/// One editor action against a record.
#[derive(Clone, Debug, PartialEq)]
pub enum EditOp {
    Set { path: FieldPath, value: FieldValue },
    AddEffect { tier: CastTier },
    RemoveEffect { tier: CastTier, index: usize },
    AddTarget { tier: CastTier },
    RemoveTarget { tier: CastTier, index: usize },
    SetTarget { tier: CastTier, index: usize, target: TargetType },
}

impl EditOp {
    pub fn set(path: &str, value: impl Into<FieldValue>) -> ForgeResult<Self> {
        Ok(Self::Set {
            path: FieldPath::parse(path)?,
            value: value.into(),
        })
    }

    /// Apply to `record` and return the edited copy.
    pub fn apply<T: Editable>(&self, record: &T, ids: &mut EffectIdGen) -> ForgeResult<T> {
        match self {
            Self::Set { path, value } => record.update(path, value.clone()),
            Self::AddEffect { tier } => {
                let taken = effect_ids(record);
                edited(record, |next| {
                    let cfg = tier_config(next, *tier)?;
                    cfg.effects.push(StatusEffect::fresh(ids.next_id(&taken)));
                    Ok(())
                })
            }
            Self::RemoveEffect { tier, index } => edited(record, |next| {
                let cfg = tier_config(next, *tier)?;
                check_index(*index, cfg.effects.len(), *tier, "effects")?;
                cfg.effects.remove(*index);
                Ok(())
            }),
            Self::AddTarget { tier } => edited(record, |next| {
                tier_config(next, *tier)?.targets.push(TargetType::Opponent);
                Ok(())
            }),
            Self::RemoveTarget { tier, index } => edited(record, |next| {
                let cfg = tier_config(next, *tier)?;
                check_index(*index, cfg.targets.len(), *tier, "targets")?;
                cfg.targets.remove(*index);
                Ok(())
            }),
            Self::SetTarget {
                tier,
                index,
                target,
            } => edited(record, |next| {
                let cfg = tier_config(next, *tier)?;
                check_index(*index, cfg.targets.len(), *tier, "targets")?;
                cfg.targets[*index] = *target;
                Ok(())
            }),
        }
    }
}

fn tier_config<T: Editable>(record: &mut T, tier: CastTier) -> ForgeResult<&mut CastConfig> {
    record.cast_config_mut(tier).ok_or_else(|| {
        ForgeError::validation(format!("{} records have no cast tiers", T::KIND))
    })
}

fn check_index(index: usize, len: usize, tier: CastTier, list: &str) -> ForgeResult<()> {
    if index >= len {
        return Err(ForgeError::validation(format!(
            "{}.{list}.{index} is out of range (len {len})",
            tier.field_name()
        )));
    }
    Ok(())
}

fn effect_ids<T: Editable>(record: &T) -> BTreeSet<String> {
    CastTier::ALL
        .iter()
        .filter_map(|&tier| record.cast_config(tier))
        .flat_map(|cfg| cfg.effects.iter().map(|fx| fx.id.clone()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/edit/ops.rs"]
mod tests;
