use crate::{
    foundation::core::{Rect, Rgba8, fmt_number, is_truthy},
    model::{
        card::{CardData, CastConfig},
        enums::{CastTier, Language},
        numeric::percent_to_unit,
    },
    render::{
        icons::Icon,
        previews::{
            Frame, GRAY_300, GRAY_400, GemShape, RED_400, SceneContext, WHITE, counter_badge,
            fading_rule, mana_gem, panel, pill, quoted,
        },
        svg::{El, Scene},
        text::{Face, Paragraph, TextStyle, run},
    },
    theme::{
        labels::{Label, card_text},
        tokens::{Theme, element_theme},
    },
};

const GOLD: Rgba8 = Rgba8::rgb(0xfacc15);
const DAMAGE: Rgba8 = Rgba8::rgb(0xfca5a5);
const DURATION: Rgba8 = Rgba8::rgb(0x93c5fd);
const DIE_BG: Rgba8 = Rgba8::rgb(0x111111);

const ROW_PAD: f64 = 6.0;
const DIE: f64 = 24.0;
const DIE_GAP: f64 = 12.0;
const PILL_H: f64 = 15.0;
const PILL_GAP: f64 = 4.0;

pub fn compose(card: &CardData, ctx: &SceneContext) -> Scene {
    let theme = element_theme(card.element);
    let labels = card_text(ctx.lang);
    let mut scene = Scene::card();
    let frame = Frame::draw(&mut scene, &theme.border, theme.bg, 4.0, 14.0);
    let inner = frame.inner;
    let cx = (inner.x0 + inner.x1) / 2.0;

    let mut art = frame.clipped().child(frame.cover(Rgba8::rgb(0x111827)));
    if card.no_background {
        art = art.child(background_pattern(&mut scene, &frame, theme));
    } else if let Some(uri) = ctx.art.as_deref() {
        art = art.child(frame.art(uri, card.image_opacity));
    }
    let fade = frame.fade(
        &mut scene,
        &[
            (0.0, Rgba8::TRANSPARENT),
            (0.4, Rgba8::BLACK.with_alpha(51)),
            (0.85, theme.bg),
        ],
    );
    let tint = frame
        .cover(theme.bg)
        .opacity(0.3)
        .attr("style", "mix-blend-mode:overlay");
    scene.push(art.child(fade).child(tint));

    // Header: mana gem on the left, counter badge and element icon on the right.
    let top = inner.y0 + 16.0;
    let gem = mana_gem(
        &mut scene,
        inner.x0 + 40.0,
        top + 24.0,
        GemShape::Diamond,
        theme,
        &fmt_number(card.mana_cost),
    );
    let icon_x = inner.x1 - 48.0;
    let mut header = El::group().child(gem).child(
        Icon::for_element(card.element)
            .draw(icon_x, top + 8.0, 32.0, WHITE, 2.0)
            .opacity(0.8),
    );
    if card.is_counter {
        header = header.child(counter_badge(icon_x - 24.0, top + 24.0, 16.0));
    }
    scene.push(header);

    // Name plate.
    let name_style = TextStyle::new(Face::Serif, 24.0, WHITE)
        .bold()
        .centered()
        .upper()
        .tracking(0.6);
    let name = Paragraph::new(&card.name, inner.width() - 48.0, 30.0, name_style);
    let plate_top = top + 72.0;
    let name_h = name.height().max(30.0);
    let rule = fading_rule(
        &mut scene,
        inner.x0 + 8.0,
        inner.x1 - 8.0,
        plate_top + name_h / 2.0,
        WHITE.with_alpha(102),
        1.0,
    );
    scene.push(rule);
    scene.push(name.render(cx, plate_top));

    let type_style = TextStyle::new(Face::Mono, 10.0, GRAY_300).upper().tracking(2.0);
    let type_label = card.card_type.label(ctx.lang);
    let pill_w = type_style.measure(type_label) + 16.0;
    let pill_top = plate_top + name_h + 4.0;
    let pill_rect = Rect::new(cx - pill_w / 2.0, pill_top, cx + pill_w / 2.0, pill_top + 16.0);
    let line_y = pill_top + 8.0;
    scene.push(
        El::group()
            .child(El::rect(Rect::new(pill_rect.x0 - 40.0, line_y, pill_rect.x0 - 8.0, line_y + 1.0)).fill(WHITE.with_alpha(77)))
            .child(El::rect(Rect::new(pill_rect.x1 + 8.0, line_y, pill_rect.x1 + 40.0, line_y + 1.0)).fill(WHITE.with_alpha(77)))
            .child(El::rounded(pill_rect, 8.0).fill(Rgba8::BLACK.with_alpha(102)).stroke(WHITE.with_alpha(26), 1.0))
            .child(run(cx + 1.0, pill_top + 11.5, type_label, &type_style.centered())),
    );

    // Bottom block, laid out upward from the footer bar.
    let margin = 12.0;
    let footer = Rect::new(
        inner.x0 + margin,
        inner.y1 - margin - 32.0,
        inner.x1 - margin,
        inner.y1 - margin,
    );
    let pad = 16.0;
    let content_w = footer.width() - pad * 2.0;
    let desc_style = TextStyle::new(Face::Serif, 14.0, GRAY_300).italic().centered();
    let desc = Paragraph::new(&quoted(&card.base_description), content_w, 18.0, desc_style);
    let rows: Vec<CastRow<'_>> = CastTier::ALL
        .iter()
        .map(|&tier| CastRow::layout(tier, card.cast(tier), content_w, theme, ctx.lang))
        .collect();
    let rows_h: f64 = rows.iter().map(CastRow::height).sum::<f64>()
        + 8.0 * (rows.len().saturating_sub(1)) as f64;
    let box_h = pad + desc.height() + 12.0 + 1.0 + 12.0 + rows_h + pad;
    let text_box = Rect::new(footer.x0, footer.y0 - 8.0 - box_h, footer.x1, footer.y0 - 8.0);

    let box_alpha = (percent_to_unit(card.content_opacity, 0.85) * 255.0).round() as u8;
    let mut block = El::group()
        .child(panel(text_box, 12.0, Rgba8::BLACK.with_alpha(box_alpha), WHITE.with_alpha(26)))
        .child(desc.render(text_box.x0 + pad + content_w / 2.0, text_box.y0 + pad));
    let rule_y = text_box.y0 + pad + desc.height() + 12.0;
    block = block.child(
        El::rect(Rect::new(text_box.x0 + pad, rule_y, text_box.x1 - pad, rule_y + 1.0))
            .fill(WHITE.with_alpha(26)),
    );
    let mut y = rule_y + 13.0;
    for row in &rows {
        block = block.child(row.draw(&mut scene, text_box.x0 + pad, y, content_w));
        y += row.height() + 8.0;
    }
    scene.push(block);
    scene.push(footer_bar(footer, card, labels.cooldown, labels.range));

    let shine = frame.shine(
        &mut scene,
        125.0,
        &[
            (0.3, Rgba8::TRANSPARENT),
            (0.4, WHITE.with_alpha(26)),
            (0.5, Rgba8::TRANSPARENT),
        ],
        0.2,
    );
    scene.push(frame.clipped().child(shine));
    scene
}

fn background_pattern(scene: &mut Scene, frame: &Frame, theme: &Theme) -> El {
    let top_glow = scene.radial(
        0.5,
        0.2,
        0.7,
        &[(0.0, theme.accent.with_alpha(0x33)), (1.0, theme.accent.with_alpha(0))],
    );
    let low_glow = scene.radial(
        0.1,
        0.9,
        0.6,
        &[
            (0.0, theme.secondary_text.with_alpha(0x44)),
            (1.0, theme.secondary_text.with_alpha(0)),
        ],
    );
    let noise = scene.filter([El::new("feTurbulence")
        .attr("type", "fractalNoise")
        .num("baseFrequency", 0.65)
        .num("numOctaves", 3.0)
        .attr("stitchTiles", "stitch")]);
    El::group()
        .child(frame.cover(theme.bg))
        .child(frame.cover(low_glow))
        .child(frame.cover(top_glow))
        .child(frame.cover(WHITE).attr("filter", &noise).opacity(0.2))
}

fn footer_bar(r: Rect, card: &CardData, cooldown: &str, range: &str) -> El {
    let mid = (r.y0 + r.y1) / 2.0;
    let style = TextStyle::new(Face::Mono, 10.0, GRAY_400).tracking(2.0);
    let clock = if card.cooldown > 3.0 { RED_400 } else { GRAY_400 };
    let cx = (r.x0 + r.x1) / 2.0;
    El::group()
        .child(panel(r, 8.0, Rgba8::BLACK.with_alpha(204), WHITE.with_alpha(26)))
        .child(Icon::Clock.draw(r.x0 + 16.0, mid - 6.0, 12.0, clock, 2.0))
        .child(run(
            r.x0 + 34.0,
            mid + 3.5,
            &format!("{cooldown} {}", fmt_number(card.cooldown)),
            &style,
        ))
        .child(El::rect(Rect::new(cx, mid - 8.0, cx + 1.0, mid + 8.0)).fill(WHITE.with_alpha(26)))
        .child(run(
            r.x1 - 34.0,
            mid + 3.5,
            &format!("{range} {}", fmt_number(card.range)),
            &style.end(),
        ))
        .child(Icon::Move.draw(r.x1 - 28.0, mid - 6.0, 12.0, GRAY_400, 2.0))
}

enum PillKind {
    Target,
    Effect,
}

struct PlacedPill {
    label: String,
    kind: PillKind,
    x: f64,
    row: usize,
}

/// One cast tier line: die face, tier label with readouts, description, target/effect pills.
struct CastRow<'a> {
    tier: CastTier,
    cfg: &'a CastConfig,
    theme: &'a Theme,
    tier_label: &'static str,
    desc: Paragraph,
    pills: Vec<PlacedPill>,
    pill_rows: usize,
}

impl<'a> CastRow<'a> {
    fn pill_style(kind: &PillKind, theme: &Theme) -> TextStyle {
        let color = match kind {
            PillKind::Target => WHITE.with_alpha(230),
            PillKind::Effect => theme.accent,
        };
        TextStyle::new(Face::Sans, 9.0, color).upper().tracking(0.9)
    }

    fn layout(
        tier: CastTier,
        cfg: &'a CastConfig,
        width: f64,
        theme: &'a Theme,
        lang: Language,
    ) -> Self {
        let text_w = width - ROW_PAD * 2.0 - DIE - DIE_GAP;
        let desc_style = TextStyle::new(Face::Serif, 11.0, theme.text);
        let desc = Paragraph::new(&cfg.description, text_w, 16.0, desc_style);

        let labels = cfg
            .targets
            .iter()
            .map(|t| (t.label(lang).to_string(), PillKind::Target))
            .chain(cfg.effects.iter().map(|fx| {
                (
                    format!("{} {}/{}", fx.name, fmt_number(fx.level), fmt_number(fx.chips)),
                    PillKind::Effect,
                )
            }));

        let mut pills = Vec::new();
        let (mut x, mut row) = (0.0, 0);
        for (label, kind) in labels {
            let w = Self::pill_style(&kind, theme).measure(&label) + 12.0;
            if x > 0.0 && x + w > text_w {
                x = 0.0;
                row += 1;
            }
            pills.push(PlacedPill {
                label,
                kind,
                x,
                row,
            });
            x += w + PILL_GAP;
        }
        let pill_rows = if pills.is_empty() { 0 } else { row + 1 };

        Self {
            tier,
            cfg,
            theme,
            tier_label: tier.label(lang),
            desc,
            pills,
            pill_rows,
        }
    }

    fn content_height(&self) -> f64 {
        let pills = if self.pill_rows == 0 {
            0.0
        } else {
            6.0 + self.pill_rows as f64 * (PILL_H + PILL_GAP) - PILL_GAP
        };
        (20.0 + self.desc.height() + pills).max(DIE)
    }

    fn height(&self) -> f64 {
        ROW_PAD * 2.0 + self.content_height()
    }

    fn draw(&self, scene: &mut Scene, x: f64, y: f64, width: f64) -> El {
        let perfect = self.tier == CastTier::Perfect;
        let mut row = El::group();
        if perfect {
            let paint = scene.linear(
                (0.0, 0.0, 1.0, 0.0),
                &[
                    (0.0, Rgba8::rgb(0x713f12).with_alpha(51)),
                    (1.0, Rgba8::rgb(0x713f12).with_alpha(0)),
                ],
            );
            row = row.child(El::rect(Rect::new(x, y, x + width, y + self.height())).fill(paint));
        }

        let top = y + ROW_PAD;
        let die = Rect::new(x + ROW_PAD, top, x + ROW_PAD + DIE, top + DIE);
        let (edge, glyph_color) = if perfect {
            (GOLD, GOLD)
        } else {
            (self.theme.accent, self.theme.text)
        };
        let glyph = match self.tier {
            CastTier::Weak => "x",
            CastTier::Good => "\u{2727}",
            CastTier::Perfect => "\u{2726}",
        };
        row = row
            .child(El::rounded(die, 4.0).fill(DIE_BG).stroke(edge, 1.0))
            .child(run(
                die.x0 + DIE / 2.0,
                die.y0 + 17.0,
                glyph,
                &TextStyle::new(Face::Sans, 16.0, glyph_color).centered(),
            ));

        let tx = die.x1 + DIE_GAP;
        let tx1 = x + width - ROW_PAD;
        let label_color = if perfect { GOLD } else { GRAY_400 };
        row = row.child(run(
            tx,
            top + 11.0,
            self.tier_label,
            &TextStyle::new(Face::Sans, 10.0, label_color)
                .bold()
                .upper()
                .tracking(2.0),
        ));

        let mut right = tx1;
        if is_truthy(self.cfg.duration) {
            let text = format!("{}T", fmt_number(self.cfg.duration.unwrap_or_default()));
            let style = TextStyle::new(Face::Mono, 10.0, DURATION).end();
            let w = style.measure(&text);
            row = row
                .child(run(right, top + 11.0, &text, &style))
                .child(Icon::Clock.draw(right - w - 14.0, top + 3.0, 10.0, DURATION, 2.5));
            right -= w + 26.0;
        }
        if is_truthy(self.cfg.damage) {
            let text = fmt_number(self.cfg.damage.unwrap_or_default());
            let style = TextStyle::new(Face::Mono, 10.0, DAMAGE).bold().end();
            let w = style.measure(&text);
            row = row
                .child(run(right, top + 11.0, &text, &style))
                .child(Icon::Sword.draw(right - w - 14.0, top + 3.0, 10.0, DAMAGE, 2.5));
        }
        row = row.child(
            El::rect(Rect::new(tx, top + 16.0, tx1, top + 17.0)).fill(WHITE.with_alpha(13)),
        );
        row = row.child(self.desc.render(tx, top + 20.0).opacity(0.9));

        let pills_top = top + 20.0 + self.desc.height() + 6.0;
        for placed in &self.pills {
            let style = Self::pill_style(&placed.kind, self.theme);
            let (fill, stroke) = match placed.kind {
                PillKind::Target => (WHITE.with_alpha(26), WHITE.with_alpha(77)),
                PillKind::Effect => (Rgba8::BLACK.with_alpha(128), self.theme.accent),
            };
            let py = pills_top + placed.row as f64 * (PILL_H + PILL_GAP);
            let (el, _) = pill(tx + placed.x, py, &placed.label, &style, fill, stroke);
            row = row.child(el);
        }
        row
    }
}
