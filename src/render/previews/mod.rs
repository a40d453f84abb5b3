//! Per-kind scene compositions and the chrome they share.
//!
//! Every preview is a 380x600 card: a border gradient frame, an inner panel holding the art
//! layer (user image or generated pattern), readability overlays, and kind-specific panels.
//! Panels anchored to the bottom of the card are measured first and laid out upward.

pub mod artefact;
pub mod card;
pub mod rune;
pub mod structure;

use crate::{
    foundation::core::{Rect, Rgba8, fmt_number},
    model::{enums::Language, numeric::percent_to_unit},
    render::{
        icons::Icon,
        svg::{El, Paint, Scene, num},
        text::{Face, Paragraph, TextStyle, run},
    },
    theme::tokens::{Gradient, Theme},
};

pub(crate) const WHITE: Rgba8 = Rgba8::WHITE;
pub(crate) const GRAY_300: Rgba8 = Rgba8::rgb(0xd1d5db);
pub(crate) const GRAY_400: Rgba8 = Rgba8::rgb(0x9ca3af);
pub(crate) const RED_400: Rgba8 = Rgba8::rgb(0xf87171);
pub(crate) const RED_600: Rgba8 = Rgba8::rgb(0xdc2626);

/// Inputs a composition needs besides its record.
#[derive(Clone, Debug)]
pub struct SceneContext {
    /// Language of the labels printed on the card.
    pub lang: Language,
    /// Resolved art as an embeddable URI; `None` when the record has no background.
    pub art: Option<String>,
}

/// The inner panel of a card frame.
pub(crate) struct Frame {
    pub inner: Rect,
    pub clip: String,
}

impl Frame {
    /// Outer rounded card with the border gradient, then the inner panel inset by `inset`.
    pub fn draw(scene: &mut Scene, border: &Gradient, bg: Rgba8, inset: f64, radius: f64) -> Self {
        let bounds = scene.bounds();
        scene.push(El::rounded(bounds, 18.0).fill(Rgba8::BLACK));
        let border = scene.theme_gradient(border);
        scene.push(El::rounded(bounds, 18.0).fill(border));

        let inner = bounds.inset(-inset);
        scene.push(El::rounded(inner, radius).fill(bg));
        let clip = scene.clip_rounded(inner, radius);
        Self { inner, clip }
    }

    pub fn clipped(&self) -> El {
        El::group().attr("clip-path", &self.clip)
    }

    /// User art with "cover" fit at the record's opacity.
    pub fn art(&self, uri: &str, image_opacity: f64) -> El {
        El::new("image")
            .num("x", self.inner.x0)
            .num("y", self.inner.y0)
            .num("width", self.inner.width())
            .num("height", self.inner.height())
            .attr("preserveAspectRatio", "xMidYMid slice")
            .attr("xlink:href", uri)
            .opacity(percent_to_unit(image_opacity, 0.6))
    }

    /// Full-panel rect painted with `paint`.
    pub fn cover(&self, paint: impl Into<Paint>) -> El {
        El::rect(self.inner).fill(paint)
    }

    /// Top-to-bottom readability fade.
    pub fn fade(&self, scene: &mut Scene, stops: &[(f32, Rgba8)]) -> El {
        let paint = scene.linear((0.0, 0.0, 0.0, 1.0), stops);
        self.cover(paint)
    }

    /// Diagonal highlight band across the panel.
    pub fn shine(&self, scene: &mut Scene, angle_deg: f64, stops: &[(f32, Rgba8)], opacity: f64) -> El {
        let g = Gradient {
            angle_deg,
            stops: &[],
        };
        let paint = scene.linear(g.vector(), stops);
        self.cover(paint).opacity(opacity)
    }
}

pub(crate) fn quoted(s: &str) -> String {
    format!("\u{201c}{s}\u{201d}")
}

/// `value || 0` as the card shows it.
pub(crate) fn or_zero(v: f64) -> String {
    if v == 0.0 || v.is_nan() {
        "0".to_string()
    } else {
        fmt_number(v)
    }
}

/// Panel background with border.
pub(crate) fn panel(r: Rect, radius: f64, fill: Rgba8, stroke: Rgba8) -> El {
    El::rounded(r, radius).fill(fill).stroke(stroke, 1.0)
}

/// Horizontal rule that fades out at both ends.
pub(crate) fn fading_rule(scene: &mut Scene, x0: f64, x1: f64, y: f64, color: Rgba8, h: f64) -> El {
    let paint = scene.linear(
        (0.0, 0.0, 1.0, 0.0),
        &[
            (0.0, color.with_alpha(0)),
            (0.5, color),
            (1.0, color.with_alpha(0)),
        ],
    );
    El::rect(Rect::new(x0, y, x1, y + h)).fill(paint)
}

pub(crate) enum GemShape {
    Diamond,
    Square,
    Round,
}

/// Mana cost badge centered at `(cx, cy)`.
pub(crate) fn mana_gem(
    scene: &mut Scene,
    cx: f64,
    cy: f64,
    shape: GemShape,
    theme: &Theme,
    value: &str,
) -> El {
    let half = 24.0;
    let (stroke, glow) = (theme.text, theme.glow);
    let fill = scene.theme_gradient(&theme.border);
    let blur = scene.filter([El::new("feGaussianBlur").num("stdDeviation", 6.0)]);
    let body = |el: El| el.fill(fill.clone()).stroke(stroke, 2.0);
    let (halo, gem) = match shape {
        GemShape::Diamond => {
            let r = Rect::new(cx - half, cy - half, cx + half, cy + half);
            let rot = format!("rotate(-45 {} {})", num(cx), num(cy));
            (
                El::rect(r).fill(glow).attr("transform", &rot),
                body(El::rect(r)).attr("transform", &rot),
            )
        }
        GemShape::Square => {
            let r = Rect::new(cx - half, cy - half, cx + half, cy + half);
            (El::rounded(r, 4.0).fill(glow), body(El::rounded(r, 4.0)))
        }
        GemShape::Round => (
            El::circle(cx, cy, half).fill(glow),
            body(El::circle(cx, cy, half)),
        ),
    };
    let label = TextStyle::new(Face::Serif, 24.0, WHITE).bold().centered();
    El::group()
        .child(halo.attr("filter", &blur))
        .child(gem)
        .child(run(cx, cy + 8.0, value, &label))
}

/// Red counter badge with the undo glyph, centered at `(cx, cy)`.
pub(crate) fn counter_badge(cx: f64, cy: f64, radius: f64) -> El {
    let icon = radius;
    El::group()
        .child(El::circle(cx, cy, radius).fill(RED_600).stroke(RED_400, 1.5))
        .child(Icon::Undo.draw(cx - icon / 2.0, cy - icon / 2.0, icon, WHITE, 3.0))
}

/// Small rounded label; returns the element and its width.
pub(crate) fn pill(x: f64, y: f64, label: &str, style: &TextStyle, fill: Rgba8, stroke: Rgba8) -> (El, f64) {
    let pad = 6.0;
    let h = style.size + 6.0;
    let w = style.measure(label) + pad * 2.0;
    let el = El::group()
        .child(El::rounded(Rect::new(x, y, x + w, y + h), 3.0).fill(fill).stroke(stroke, 1.0))
        .child(run(x + pad, y + h - 4.0, label, style));
    (el, w)
}

/// Bordered panel with an icon header above a wrapped body.
pub(crate) struct InfoPanel {
    icon: Icon,
    label: String,
    label_color: Rgba8,
    body: Paragraph,
    fill: Rgba8,
    stroke: Rgba8,
}

impl InfoPanel {
    pub const PAD: f64 = 12.0;
    const HEADER: f64 = 14.0;

    /// `width` is the outer panel width; the body wraps inside the padding.
    pub fn new(
        icon: Icon,
        label: &str,
        label_color: Rgba8,
        body: &str,
        body_style: TextStyle,
        width: f64,
    ) -> Self {
        let line_height = (body_style.size * 1.45).round();
        Self {
            icon,
            label: label.to_string(),
            label_color,
            body: Paragraph::new(body, width - Self::PAD * 2.0, line_height, body_style),
            fill: Rgba8::BLACK.with_alpha(153),
            stroke: WHITE.with_alpha(26),
        }
    }

    pub fn colors(self, fill: Rgba8, stroke: Rgba8) -> Self {
        Self {
            fill,
            stroke,
            ..self
        }
    }

    pub fn height(&self) -> f64 {
        let body = if self.body.lines.is_empty() {
            0.0
        } else {
            6.0 + self.body.height()
        };
        Self::PAD * 2.0 + Self::HEADER + body
    }

    pub fn draw(&self, x: f64, y: f64, width: f64) -> El {
        let r = Rect::new(x, y, x + width, y + self.height());
        let label = TextStyle::new(Face::Sans, 10.0, self.label_color)
            .bold()
            .upper()
            .tracking(2.0);
        let top = y + Self::PAD;
        El::group()
            .child(panel(r, 8.0, self.fill, self.stroke))
            .child(self.icon.draw(x + Self::PAD, top, Self::HEADER, self.label_color, 2.0))
            .child(run(x + Self::PAD + Self::HEADER + 6.0, top + 11.0, &self.label, &label))
            .child(self.body.render(x + Self::PAD, top + Self::HEADER + 6.0))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/previews.rs"]
mod tests;
