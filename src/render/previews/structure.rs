use crate::{
    foundation::core::{Rect, Rgba8, fmt_number},
    model::{enums::ElementType, structure::StructureData},
    render::{
        icons::Icon,
        previews::{
            Frame, GRAY_300, GRAY_400, GemShape, InfoPanel, SceneContext, WHITE, counter_badge,
            mana_gem, or_zero, panel, quoted,
        },
        svg::{El, Scene},
        text::{Face, Paragraph, TextStyle, run},
    },
    theme::{
        labels::{Label, card_text},
        tokens::{Theme, element_theme},
    },
};

const GRAY_600: Rgba8 = Rgba8::rgb(0x4b5563);
const GRAY_700: Rgba8 = Rgba8::rgb(0x374151);
const TEAL_900: Rgba8 = Rgba8::rgb(0x134e4a);
const SHAPES: &str = "M0 0h20v20H0V0zm10 17l5-5 5 5H10zm10-7l5-5 5 5h-5zM30 0h10v10H30V0zm10 20h-5l5-5v5zm-5 15l-5 5h-5l5-5h5zM0 20h20v20H0V20zm20 10l-5 5-5-5h5z";

pub fn compose(structure: &StructureData, ctx: &SceneContext) -> Scene {
    let theme = element_theme(structure.element);
    let labels = card_text(ctx.lang);
    let barrier = structure.is_barrier();
    let (inset, radius) = if barrier { (6.0, 12.0) } else { (4.0, 14.0) };
    let mut scene = Scene::card();
    let frame = Frame::draw(&mut scene, &theme.border, theme.bg, inset, radius);
    let inner = frame.inner;
    let cx = (inner.x0 + inner.x1) / 2.0;

    let mut art = frame.clipped().child(frame.cover(Rgba8::rgb(0x111827)));
    if structure.no_background {
        art = art.child(background_pattern(&mut scene, &frame, theme, barrier));
    } else if let Some(uri) = ctx.art.as_deref() {
        art = art.child(frame.art(uri, structure.image_opacity));
    }
    let fade = frame.fade(
        &mut scene,
        &[
            (0.0, Rgba8::TRANSPARENT),
            (0.5, Rgba8::rgba(0x0c1210, 153)),
            (0.9, theme.bg),
        ],
    );
    scene.push(art.child(fade));

    // Name plate with the `TYPE • ELEMENT` subtitle.
    let name_style = TextStyle::new(Face::Serif, 24.0, theme.text)
        .bold()
        .centered()
        .upper()
        .tracking(0.6);
    let name = Paragraph::new(&structure.name, inner.width() - 40.0, 30.0, name_style);
    let name_h = name.height().max(30.0);
    let plate = Rect::new(
        inner.x0 + 12.0,
        inner.y0 + 16.0,
        inner.x1 - 12.0,
        inner.y0 + 16.0 + 12.0 + name_h + 18.0 + 12.0,
    );
    let (plate_fill, plate_stroke) = if barrier {
        (Rgba8::BLACK.with_alpha(204), GRAY_600)
    } else {
        (Rgba8::BLACK.with_alpha(153), TEAL_900.with_alpha(128))
    };
    let subtitle = format!(
        "{} \u{2022} {}",
        structure.structure_type.label(ctx.lang),
        structure.element.label(ctx.lang)
    );
    let subtitle_style = TextStyle::new(Face::Sans, 10.0, GRAY_400)
        .bold()
        .upper()
        .tracking(2.0)
        .centered();
    scene.push(
        El::group()
            .child(panel(plate, 8.0, plate_fill, plate_stroke))
            .child(name.render(cx, plate.y0 + 12.0))
            .child(run(cx, plate.y0 + 12.0 + name_h + 14.0, &subtitle, &subtitle_style)),
    );

    // Header row under the plate.
    let row_top = plate.y1 + 8.0;
    let shape = if barrier { GemShape::Square } else { GemShape::Round };
    let gem = mana_gem(
        &mut scene,
        inner.x0 + 16.0 + 24.0,
        row_top + 24.0,
        shape,
        theme,
        &or_zero(structure.mana_cost),
    );
    let mut header = El::group().child(gem);
    let mut right = inner.x1 - 16.0;
    if structure.is_counter {
        header = header.child(counter_badge(right - 20.0, row_top + 24.0, 20.0));
        right -= 48.0;
    }
    if barrier {
        let r = 18.0;
        header = header
            .child(
                El::circle(right - r, row_top + 24.0, r)
                    .fill(Rgba8::BLACK.with_alpha(128))
                    .stroke(WHITE.with_alpha(26), 1.0),
            )
            .child(Icon::for_element(structure.element).draw(right - r - 12.0, row_top + 12.0, 24.0, WHITE, 2.0));
    }
    scene.push(header);

    // Mechanics, stacked upward from the bottom margin.
    let margin = 16.0;
    let x = inner.x0 + margin;
    let width = inner.width() - margin * 2.0;
    let mut bottom = inner.y1 - margin;
    let gap = 12.0;

    let continuous = InfoPanel::new(
        Icon::Gem,
        labels.continuous_effect,
        theme.accent,
        &structure.continuous_effect,
        TextStyle::new(Face::Serif, 14.0, theme.text),
        width,
    )
    .colors(Rgba8::BLACK.with_alpha(204), WHITE.with_alpha(51));
    let top = bottom - continuous.height();
    let mut block = El::group().child(continuous.draw(x, top, width));
    bottom = top - gap;

    if !barrier {
        let runic = structure.runic_element.unwrap_or(ElementType::Fire);
        let r = Rect::new(x, bottom - 36.0, x + width, bottom);
        block = block.child(runic_box(r, runic, labels.runic_element, ctx));
        bottom = r.y0 - gap;
    } else if let Some(value) = structure.touch_effect_value.filter(|v| *v > 0.0) {
        let element = structure.touch_effect_element.unwrap_or(ElementType::Fire);
        let r = Rect::new(x, bottom - 32.0, x + width, bottom);
        block = block.child(touch_box(r, element, value, labels.touch_effect, ctx));
        bottom = r.y0 - gap;
    }

    let stats = Rect::new(x, bottom - 56.0, x + width, bottom);
    block = block.child(stats_row(stats, structure, labels.hp, labels.resistance_short, ctx));
    bottom = stats.y0 - gap;

    let desc_style = TextStyle::new(Face::Serif, 12.0, theme.text).italic().centered();
    let desc = Paragraph::new(&quoted(&structure.description), width - 16.0, 16.0, desc_style);
    block = block.child(desc.render(cx, bottom - 4.0 - desc.height()));
    scene.push(block);

    if barrier {
        let bars = scene.pattern(
            20.0,
            20.0,
            El::rect(Rect::new(19.0, 0.0, 20.0, 20.0)).fill(WHITE),
        );
        scene.push(frame.clipped().child(frame.cover(bars).opacity(0.1)));
    }
    scene
}

fn background_pattern(scene: &mut Scene, frame: &Frame, theme: &Theme, barrier: bool) -> El {
    let mut layer = El::group();
    if barrier {
        let stripe = theme.secondary_text.with_alpha(0x22);
        // 45deg stripes, 10px per band along the gradient axis.
        let step = 20.0 / std::f64::consts::SQRT_2;
        let stripes = scene.linear_user_space(
            (0.0, 0.0, step, step),
            &[(0.0, theme.bg), (0.5, theme.bg), (0.5, stripe), (1.0, stripe)],
            true,
        );
        layer = layer.child(frame.cover(stripes));
    } else {
        let slate = scene.linear(
            (0.0, 0.0, 1.0, 1.0),
            &[(0.0, theme.bg), (1.0, Rgba8::rgb(0x0f172a))],
        );
        let corner = scene.radial(
            1.0,
            0.0,
            0.6,
            &[(0.0, theme.accent.with_alpha(0x33)), (1.0, theme.accent.with_alpha(0))],
        );
        layer = layer.child(frame.cover(slate)).child(frame.cover(corner));
    }
    let shapes = scene.pattern(
        40.0,
        40.0,
        El::path(SHAPES).fill(WHITE).attr("fill-rule", "evenodd"),
    );
    layer.child(frame.cover(shapes).opacity(0.1))
}

fn stats_row(r: Rect, s: &StructureData, hp: &str, res: &str, ctx: &SceneContext) -> El {
    let half = (r.width() - 8.0) / 2.0;
    let left = Rect::new(r.x0, r.y0, r.x0 + half, r.y1);
    let right = Rect::new(r.x1 - half, r.y0, r.x1, r.y1);
    let resistance = element_theme(s.resistance_element);
    let caption = TextStyle::new(Face::Sans, 9.0, GRAY_400).bold().upper().centered();
    let value = TextStyle::new(Face::Sans, 20.0, WHITE).bold();

    let stat = |b: Rect, icon: Icon, text: String, color: Rgba8| {
        let style = value.fill(color);
        let w = 16.0 + 4.0 + style.measure(&text);
        let x0 = (b.x0 + b.x1) / 2.0 - w / 2.0;
        El::group()
            .child(icon.draw(x0, b.y0 + 27.0, 16.0, color, 2.0))
            .child(run(x0 + 20.0, b.y0 + 42.0, &text, &style))
    };
    let res_caption = format!("{res}: {}", s.resistance_element.label(ctx.lang));
    El::group()
        .child(panel(left, 4.0, Rgba8::BLACK.with_alpha(153), GRAY_700))
        .child(run((left.x0 + left.x1) / 2.0, left.y0 + 16.0, hp, &caption))
        .child(stat(left, Icon::Box, fmt_number(s.durability), WHITE))
        .child(panel(right, 4.0, Rgba8::BLACK.with_alpha(153), GRAY_700))
        .child(El::rounded(right, 4.0).fill(resistance.bg).opacity(0.2))
        .child(run((right.x0 + right.x1) / 2.0, right.y0 + 16.0, &res_caption, &caption))
        .child(stat(right, Icon::Shield, fmt_number(s.resistance_level), resistance.accent))
}

fn runic_box(r: Rect, element: ElementType, caption: &str, ctx: &SceneContext) -> El {
    let accent = element_theme(element).accent;
    let mid = (r.y0 + r.y1) / 2.0;
    let caption_style = TextStyle::new(Face::Sans, 10.0, GRAY_300).bold().upper().tracking(2.0);
    let tag_style = TextStyle::new(Face::Sans, 13.0, Rgba8::BLACK).bold().upper().tracking(0.8);
    let tag = element.label(ctx.lang);
    let tag_w = tag_style.measure(tag) + 24.0;
    let tag_rect = Rect::new(r.x1 - 8.0 - tag_w, mid - 12.0, r.x1 - 8.0, mid + 12.0);
    El::group()
        .child(panel(r, 4.0, Rgba8::BLACK.with_alpha(204), accent))
        .child(run(r.x0 + 10.0, mid + 3.5, caption, &caption_style))
        .child(El::rounded(tag_rect, 4.0).fill(accent))
        .child(run(tag_rect.x0 + 12.0, mid + 4.5, tag, &tag_style))
}

fn touch_box(r: Rect, element: ElementType, value: f64, caption: &str, ctx: &SceneContext) -> El {
    let accent = element_theme(element).accent;
    let mid = (r.y0 + r.y1) / 2.0;
    let caption_style = TextStyle::new(Face::Sans, 10.0, GRAY_300).bold().upper().tracking(1.0);
    let value_style = TextStyle::new(Face::Sans, 14.0, accent).bold().end();
    let amount = fmt_number(value);
    let amount_w = value_style.measure(&amount);
    El::group()
        .child(panel(r, 4.0, Rgba8::rgba(0x140000, 204), accent))
        .child(Icon::Hand.draw(r.x0 + 8.0, mid - 7.0, 14.0, accent, 2.0))
        .child(run(r.x0 + 28.0, mid + 3.5, caption, &caption_style))
        .child(run(r.x1 - 8.0, mid + 5.0, &amount, &value_style))
        .child(run(
            r.x1 - 8.0 - amount_w - 6.0,
            mid + 3.5,
            element.label(ctx.lang),
            &TextStyle::new(Face::Sans, 10.0, GRAY_400).end(),
        ))
}
