use crate::{
    foundation::core::{Rect, Rgba8, fmt_number},
    model::artefact::ArtefactData,
    render::{
        icons::Icon,
        previews::{Frame, SceneContext, panel, quoted},
        svg::{El, Paint, Scene},
        text::{Face, Paragraph, TextStyle, run},
    },
    theme::{labels::card_text, tokens::ARTEFACT_THEME},
};

const AMBER_100: Rgba8 = Rgba8::rgb(0xfef3c7);
const AMBER_200: Rgba8 = Rgba8::rgb(0xfde68a);
const AMBER_500: Rgba8 = Rgba8::rgb(0xf59e0b);
const AMBER_600: Rgba8 = Rgba8::rgb(0xd97706);
const AMBER_900: Rgba8 = Rgba8::rgb(0x78350f);
const RED_500: Rgba8 = Rgba8::rgb(0xef4444);

pub fn compose(artefact: &ArtefactData, ctx: &SceneContext) -> Scene {
    let theme = &ARTEFACT_THEME;
    let labels = card_text(ctx.lang);
    let mut scene = Scene::card();
    let frame = Frame::draw(&mut scene, &theme.border, theme.bg, 4.0, 14.0);
    let inner = frame.inner;
    let cx = (inner.x0 + inner.x1) / 2.0;

    let mut art = frame.clipped().child(frame.cover(theme.bg));
    if artefact.no_background {
        let bronze = scene.linear(
            (0.0, 1.0, 1.0, 0.0),
            &[(0.0, Rgba8::rgb(0x1c1004)), (1.0, Rgba8::rgb(0x451a03))],
        );
        let glow = scene.radial(
            0.5,
            0.3,
            0.6,
            &[(0.0, theme.accent.with_alpha(0x33)), (1.0, theme.accent.with_alpha(0))],
        );
        let crosses = scene.pattern(
            60.0,
            60.0,
            El::path("M30 0V60M0 30H60")
                .fill(Paint::None)
                .stroke(AMBER_500.with_alpha(102), 1.0),
        );
        art = art
            .child(frame.cover(bronze))
            .child(frame.cover(glow))
            .child(frame.cover(crosses).opacity(0.2));
    } else if let Some(uri) = ctx.art.as_deref() {
        art = art.child(frame.art(uri, artefact.image_opacity));
    }
    let fade = frame.fade(
        &mut scene,
        &[
            (0.0, Rgba8::TRANSPARENT),
            (0.45, Rgba8::rgba(0x1c1004, 128)),
            (0.85, theme.bg),
        ],
    );
    scene.push(art.child(fade));

    // Ornament bar over the name plate.
    let bar_paint = scene.linear(
        (0.0, 0.0, 1.0, 0.0),
        &[
            (0.0, AMBER_600.with_alpha(0)),
            (0.5, AMBER_500),
            (1.0, AMBER_600.with_alpha(0)),
        ],
    );
    let bar_y = inner.y0 + 20.0;
    scene.push(El::rounded(Rect::new(cx - 60.0, bar_y, cx + 60.0, bar_y + 3.0), 1.5).fill(bar_paint));

    let name_style = TextStyle::new(Face::Serif, 26.0, AMBER_100)
        .bold()
        .centered()
        .upper()
        .tracking(1.0);
    let name = Paragraph::new(&artefact.name, inner.width() - 64.0, 32.0, name_style);
    let plate = Rect::new(
        inner.x0 + 20.0,
        bar_y + 12.0,
        inner.x1 - 20.0,
        bar_y + 12.0 + name.height().max(32.0) + 16.0,
    );
    let name_paint = scene.linear((0.0, 0.0, 0.0, 1.0), &[(0.0, AMBER_100), (1.0, AMBER_600)]);
    scene.push(
        El::group()
            .child(panel(plate, 6.0, Rgba8::BLACK.with_alpha(153), AMBER_900.with_alpha(128)))
            .child(name.render_painted(cx, plate.y0 + 8.0, name_paint)),
    );

    // Footer with the cooldown, then the effect panel above it.
    let margin = 12.0;
    let footer = Rect::new(
        inner.x0 + margin,
        inner.y1 - margin - 40.0,
        inner.x1 - margin,
        inner.y1 - margin,
    );
    let mid = (footer.y0 + footer.y1) / 2.0;
    let clock = if artefact.cooldown > 2.0 { RED_500 } else { AMBER_500 };
    let readout = format!("{} {}", labels.cooldown, fmt_number(artefact.cooldown));
    let readout_style = TextStyle::new(Face::Mono, 11.0, AMBER_200).upper().tracking(2.0);
    let readout_w = readout_style.measure(&readout);
    let start = cx - (readout_w + 20.0) / 2.0;
    scene.push(
        El::group()
            .child(panel(footer, 8.0, Rgba8::BLACK.with_alpha(153), AMBER_900.with_alpha(128)))
            .child(Icon::Clock.draw(start, mid - 7.0, 14.0, clock, 2.0))
            .child(run(start + 20.0, mid + 4.0, &readout, &readout_style)),
    );

    let pad = 20.0;
    let width = footer.width();
    let effect_style = TextStyle::new(Face::Serif, 18.0, AMBER_100).italic().centered();
    let effect = Paragraph::new(&quoted(&artefact.effect), width - pad * 2.0, 24.0, effect_style);
    let box_h = (effect.height() + pad * 2.0).max(80.0);
    let effect_box = Rect::new(footer.x0, footer.y0 - 8.0 - box_h, footer.x1, footer.y0 - 8.0);
    let text_top = effect_box.y0 + (box_h - effect.height()) / 2.0;
    scene.push(
        El::group()
            .child(panel(effect_box, 10.0, Rgba8::rgba(0x1c1004, 217), AMBER_600.with_alpha(77)))
            .child(effect.render(cx, text_top)),
    );

    let shine = frame.shine(
        &mut scene,
        45.0,
        &[
            (0.35, Rgba8::TRANSPARENT),
            (0.5, AMBER_200.with_alpha(0x40)),
            (0.65, Rgba8::TRANSPARENT),
        ],
        0.1,
    );
    scene.push(frame.clipped().child(shine));
    scene
}
