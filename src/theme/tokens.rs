use crate::{foundation::core::Rgba8, model::enums::ElementType};

/// One color stop of a linear gradient; `offset` is in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stop {
    pub offset: f32,
    pub color: Rgba8,
}

const fn stop(offset: f32, color: Rgba8) -> Stop {
    Stop { offset, color }
}

/// Linear gradient in CSS terms: `angle_deg` 0 points up, 90 points right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub angle_deg: f64,
    pub stops: &'static [Stop],
}

impl Gradient {
    /// Endpoints of the gradient vector in object-bounding-box units.
    pub fn vector(&self) -> (f64, f64, f64, f64) {
        let rad = self.angle_deg.to_radians();
        let (dx, dy) = (rad.sin() * 0.5, -rad.cos() * 0.5);
        (0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy)
    }
}

/// Style token bundle a preview is painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub bg: Rgba8,
    pub border: Gradient,
    pub accent: Rgba8,
    pub text: Rgba8,
    pub secondary_text: Rgba8,
    pub glow: Rgba8,
}

const fn theme(
    bg: u32,
    border: &'static [Stop],
    accent: u32,
    text: u32,
    secondary_text: u32,
    glow: Rgba8,
) -> Theme {
    Theme {
        bg: Rgba8::rgb(bg),
        border: Gradient {
            angle_deg: 135.0,
            stops: border,
        },
        accent: Rgba8::rgb(accent),
        text: Rgba8::rgb(text),
        secondary_text: Rgba8::rgb(secondary_text),
        glow,
    }
}

const FIRE: Theme = theme(
    0x1a0505,
    &[
        stop(0.0, Rgba8::rgb(0xf97316)),
        stop(0.5, Rgba8::rgb(0xdc2626)),
        stop(1.0, Rgba8::rgb(0x7f1d1d)),
    ],
    0xf97316,
    0xfed7aa,
    0xfb923c,
    Rgba8::rgba(0xf97316, 0x99),
);

const WATER: Theme = theme(
    0x03101f,
    &[
        stop(0.0, Rgba8::rgb(0x38bdf8)),
        stop(0.5, Rgba8::rgb(0x2563eb)),
        stop(1.0, Rgba8::rgb(0x1e3a8a)),
    ],
    0x38bdf8,
    0xbae6fd,
    0x60a5fa,
    Rgba8::rgba(0x38bdf8, 0x99),
);

const EARTH: Theme = theme(
    0x120d05,
    &[
        stop(0.0, Rgba8::rgb(0xa16207)),
        stop(0.5, Rgba8::rgb(0x65a30d)),
        stop(1.0, Rgba8::rgb(0x3f2a0b)),
    ],
    0x84cc16,
    0xecfccb,
    0xa3e635,
    Rgba8::rgba(0x84cc16, 0x80),
);

const WIND: Theme = theme(
    0x06141a,
    &[
        stop(0.0, Rgba8::rgb(0xccfbf1)),
        stop(0.5, Rgba8::rgb(0x2dd4bf)),
        stop(1.0, Rgba8::rgb(0x115e59)),
    ],
    0x5eead4,
    0xf0fdfa,
    0x99f6e4,
    Rgba8::rgba(0x5eead4, 0x80),
);

const DARK: Theme = theme(
    0x0a0612,
    &[
        stop(0.0, Rgba8::rgb(0x6d28d9)),
        stop(0.5, Rgba8::rgb(0x312e81)),
        stop(1.0, Rgba8::rgb(0x020617)),
    ],
    0xa78bfa,
    0xe9d5ff,
    0x8b5cf6,
    Rgba8::rgba(0x7c3aed, 0x99),
);

const ANCESTRAL: Theme = theme(
    0x0f0d0a,
    &[
        stop(0.0, Rgba8::rgb(0xd6d3d1)),
        stop(0.5, Rgba8::rgb(0x78716c)),
        stop(1.0, Rgba8::rgb(0x292524)),
    ],
    0xe7e5e4,
    0xf5f5f4,
    0xa8a29e,
    Rgba8::rgba(0xe7e5e4, 0x66),
);

const TECNO: Theme = theme(
    0x020b0f,
    &[
        stop(0.0, Rgba8::rgb(0x22d3ee)),
        stop(0.5, Rgba8::rgb(0x64748b)),
        stop(1.0, Rgba8::rgb(0x0f172a)),
    ],
    0x22d3ee,
    0xcffafe,
    0x67e8f9,
    Rgba8::rgba(0x22d3ee, 0x99),
);

const DIVINE: Theme = theme(
    0x17130a,
    &[
        stop(0.0, Rgba8::rgb(0xfef08a)),
        stop(0.5, Rgba8::rgb(0xeab308)),
        stop(1.0, Rgba8::rgb(0x854d0e)),
    ],
    0xfacc15,
    0xfef9c3,
    0xfde047,
    Rgba8::rgba(0xfacc15, 0x99),
);

/// Theme of rune previews.
pub const RUNE_THEME: Theme = theme(
    0x0f0518,
    &[
        stop(0.0, Rgba8::rgb(0x60a5fa)),
        stop(0.5, Rgba8::rgb(0xa855f7)),
        stop(1.0, Rgba8::rgb(0x1e1b4b)),
    ],
    0xa855f7,
    0xdbeafe,
    0xc4b5fd,
    Rgba8::rgba(0xa855f7, 0x99),
);

/// Theme of artefact previews.
pub const ARTEFACT_THEME: Theme = theme(
    0x1c1004,
    &[
        stop(0.0, Rgba8::rgb(0xfbbf24)),
        stop(0.5, Rgba8::rgb(0xb45309)),
        stop(1.0, Rgba8::rgb(0x451a03)),
    ],
    0xf59e0b,
    0xfef3c7,
    0xfcd34d,
    Rgba8::rgba(0xf59e0b, 0x99),
);

/// Fallback theme of structure previews; structures normally take their element's theme.
pub const STRUCTURE_THEME: Theme = theme(
    0x0c1210,
    &[
        stop(0.0, Rgba8::rgb(0x5eead4)),
        stop(0.5, Rgba8::rgb(0x0f766e)),
        stop(1.0, Rgba8::rgb(0x042f2e)),
    ],
    0x14b8a6,
    0xccfbf1,
    0x2dd4bf,
    Rgba8::rgba(0x14b8a6, 0x80),
);

/// Theme for an element.
pub fn element_theme(element: ElementType) -> &'static Theme {
    match element {
        ElementType::Fire => &FIRE,
        ElementType::Water => &WATER,
        ElementType::Earth => &EARTH,
        ElementType::Wind => &WIND,
        ElementType::Dark => &DARK,
        ElementType::Ancestral => &ANCESTRAL,
        ElementType::Tecno => &TECNO,
        ElementType::Divine => &DIVINE,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/tokens.rs"]
mod tests;
