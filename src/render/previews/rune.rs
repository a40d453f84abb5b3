use crate::{
    foundation::core::{Rect, Rgba8},
    model::rune::RuneData,
    render::{
        icons::Icon,
        previews::{Frame, InfoPanel, SceneContext, WHITE, fading_rule},
        svg::{El, Scene},
        text::{Face, Paragraph, TextStyle},
    },
    theme::{labels::card_text, tokens::RUNE_THEME},
};

const VIOLET: Rgba8 = Rgba8::rgb(0xa855f7);
const BLUE: Rgba8 = Rgba8::rgb(0x3b82f6);

pub fn compose(rune: &RuneData, ctx: &SceneContext) -> Scene {
    let theme = &RUNE_THEME;
    let labels = card_text(ctx.lang);
    let mut scene = Scene::card();
    let frame = Frame::draw(&mut scene, &theme.border, theme.bg, 4.0, 14.0);
    let inner = frame.inner;
    let cx = (inner.x0 + inner.x1) / 2.0;

    let mut art = frame.clipped().child(frame.cover(theme.bg));
    if rune.no_background {
        let depth = scene.linear(
            (0.0, 0.0, 0.0, 1.0),
            &[(0.0, theme.bg), (0.5, Rgba8::rgb(0x2e1065)), (1.0, theme.bg)],
        );
        let glow = scene.radial(
            0.5,
            0.5,
            0.5,
            &[(0.0, theme.accent.with_alpha(0x44)), (1.0, theme.accent.with_alpha(0))],
        );
        let dots = scene.pattern(20.0, 20.0, El::circle(10.0, 10.0, 1.0).fill(WHITE));
        art = art
            .child(frame.cover(depth))
            .child(frame.cover(glow))
            .child(frame.cover(dots).opacity(0.1));
    } else if let Some(uri) = ctx.art.as_deref() {
        art = art.child(frame.art(uri, rune.image_opacity));
    }
    let fade = frame.fade(
        &mut scene,
        &[
            (0.0, Rgba8::TRANSPARENT),
            (0.4, Rgba8::rgba(0x0f0518, 102)),
            (0.8, theme.bg),
        ],
    );
    scene.push(art.child(fade));

    // Name plate between two violet rules.
    let name_style = TextStyle::new(Face::Serif, 30.0, WHITE)
        .bold()
        .centered()
        .upper()
        .tracking(1.5);
    let name = Paragraph::new(&rune.name, inner.width() - 56.0, 36.0, name_style);
    let plate = Rect::new(
        inner.x0 + 16.0,
        inner.y0 + 32.0,
        inner.x1 - 16.0,
        inner.y0 + 32.0 + name.height().max(36.0) + 16.0,
    );
    let name_paint = scene.linear(
        (0.0, 0.0, 1.0, 0.0),
        &[
            (0.0, Rgba8::rgb(0x93c5fd)),
            (0.5, Rgba8::rgb(0xe9d5ff)),
            (1.0, Rgba8::rgb(0xc084fc)),
        ],
    );
    let top_rule = fading_rule(&mut scene, plate.x0, plate.x1, plate.y0, VIOLET.with_alpha(128), 1.0);
    let low_rule = fading_rule(&mut scene, plate.x0, plate.x1, plate.y1 - 1.0, VIOLET.with_alpha(128), 1.0);
    scene.push(
        El::group()
            .child(El::rect(plate).fill(Rgba8::BLACK.with_alpha(102)))
            .child(top_rule)
            .child(low_rule)
            .child(name.render_painted(cx, plate.y0 + 8.0, name_paint)),
    );

    // Effect panels stacked upward from the bottom margin.
    let margin = 16.0;
    let width = inner.width() - margin * 2.0;
    let activation = InfoPanel::new(
        Icon::Zap,
        labels.activation_effect,
        Rgba8::rgb(0x60a5fa),
        &rune.activation_effect,
        TextStyle::new(Face::Sans, 12.0, Rgba8::rgb(0xdbeafe)),
        width,
    )
    .colors(Rgba8::rgba(0x1e0a3c, 204), BLUE.with_alpha(77));
    let continuous = InfoPanel::new(
        Icon::Infinity,
        labels.continuous_effect,
        Rgba8::rgb(0xc084fc),
        &rune.continuous_effect,
        TextStyle::new(Face::Sans, 12.0, Rgba8::rgb(0xf3e8ff)),
        width,
    )
    .colors(Rgba8::rgba(0x140528, 204), VIOLET.with_alpha(77));
    let x = inner.x0 + margin;
    let continuous_top = inner.y1 - margin - continuous.height();
    let activation_top = continuous_top - 12.0 - activation.height();
    scene.push(
        El::group()
            .child(activation.draw(x, activation_top, width))
            .child(continuous.draw(x, continuous_top, width)),
    );

    let shine = frame.shine(
        &mut scene,
        135.0,
        &[
            (0.3, Rgba8::TRANSPARENT),
            (0.45, VIOLET.with_alpha(0x33)),
            (0.6, Rgba8::TRANSPARENT),
        ],
        0.1,
    );
    scene.push(frame.clipped().child(shine));
    scene
}
