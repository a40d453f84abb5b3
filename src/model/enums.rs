use std::{fmt, str::FromStr};

use crate::foundation::error::ForgeError;

/// An enum with a fixed variant list and a stable wire name per variant.
pub trait ClosedEnum: Copy + fmt::Display + FromStr<Err = ForgeError> + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every declared variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Serialized (wire) name of this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ClosedEnum for $name {
            const ALL: &'static [Self] = $name::ALL;

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ForgeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ForgeError::validation(format!(
                        concat!("unknown ", stringify!($name), " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

closed_enum! {
    /// Elemental affinity; drives the card theme.
    ElementType {
        Fire => "FIRE",
        Water => "WATER",
        Earth => "EARTH",
        Wind => "WIND",
        Dark => "DARK",
        Ancestral => "ANCESTRAL",
        Tecno => "TECNO",
        Divine => "DIVINE",
    }
}

closed_enum! {
    /// Power card category. `Barrier` survives for older documents.
    CardType {
        Magic => "MAGIC",
        Enchantment => "ENCHANTMENT",
        Seal => "SEAL",
        Barrier => "BARRIER",
    }
}

closed_enum! {
    StructureType {
        Altar => "ALTAR",
        Barrier => "BARRIER",
    }
}

closed_enum! {
    /// Outcome quality of a cast, in display order.
    CastTier {
        Weak => "WEAK",
        Good => "GOOD",
        Perfect => "PERFECT",
    }
}

closed_enum! {
    TargetType {
        Player => "PLAYER",
        Field => "FIELD",
        Opponent => "OPPONENT",
    }
}

closed_enum! {
    /// Language used either for the editor chrome or for the labels printed on a card.
    Language {
        PtBr => "pt-BR",
        EnUs => "en-US",
    }
}

closed_enum! {
    /// The four record kinds the studio edits.
    EntityKind {
        Card => "card",
        Rune => "rune",
        Artefact => "artefact",
        Structure => "structure",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::PtBr
    }
}

impl CastTier {
    /// Record key holding this tier's configuration on a card.
    pub fn field_name(self) -> &'static str {
        match self {
            CastTier::Weak => "castWeak",
            CastTier::Good => "castGood",
            CastTier::Perfect => "castPerfect",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/enums.rs"]
mod tests;
