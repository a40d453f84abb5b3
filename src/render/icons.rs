//! Stroke icons on a 24x24 grid.

use crate::{
    foundation::core::Rgba8,
    model::enums::ElementType,
    render::svg::{El, num},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Flame,
    Droplet,
    Mountain,
    Wind,
    Moon,
    Ghost,
    Cpu,
    Sun,
    Clock,
    Sword,
    Move,
    Undo,
    Zap,
    Infinity,
    Box,
    Shield,
    Hand,
    Gem,
}

enum Part {
    Path(&'static str),
    Circle(f64, f64, f64),
    Rect(f64, f64, f64, f64, f64),
}

impl Icon {
    pub fn for_element(element: ElementType) -> Self {
        match element {
            ElementType::Fire => Icon::Flame,
            ElementType::Water => Icon::Droplet,
            ElementType::Earth => Icon::Mountain,
            ElementType::Wind => Icon::Wind,
            ElementType::Dark => Icon::Moon,
            ElementType::Ancestral => Icon::Ghost,
            ElementType::Tecno => Icon::Cpu,
            ElementType::Divine => Icon::Sun,
        }
    }

    fn parts(self) -> &'static [Part] {
        use Part::*;
        match self {
            Icon::Flame => &[Path(
                "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.07-2.14-.22-4.05 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.15.43-2.29 1-3a2.5 2.5 0 0 0 2.5 2.5z",
            )],
            Icon::Droplet => &[Path(
                "M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z",
            )],
            Icon::Mountain => &[Path("M8 3l4 8 5-5 5 15H2L8 3z")],
            Icon::Wind => &[
                Path("M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2"),
                Path("M9.6 4.6A2 2 0 1 1 11 8H2"),
                Path("M12.6 19.4A2 2 0 1 0 14 16H2"),
            ],
            Icon::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z")],
            Icon::Ghost => &[
                Path("M9 10h.01M15 10h.01"),
                Path("M12 2a8 8 0 0 0-8 8v12l3-3 2.5 2.5L12 19l2.5 2.5L17 19l3 3V10a8 8 0 0 0-8-8z"),
            ],
            Icon::Cpu => &[
                Rect(4.0, 4.0, 16.0, 16.0, 2.0),
                Rect(9.0, 9.0, 6.0, 6.0, 0.0),
                Path("M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"),
            ],
            Icon::Sun => &[
                Circle(12.0, 12.0, 4.0),
                Path(
                    "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
                ),
            ],
            Icon::Clock => &[Circle(12.0, 12.0, 10.0), Path("M12 6v6l4 2")],
            Icon::Sword => &[
                Path("M14.5 17.5L3 6V3h3l11.5 11.5"),
                Path("M13 19l6-6M16 16l4 4M19 21l2-2"),
            ],
            Icon::Move => &[Path(
                "M5 9l-3 3 3 3M9 5l3-3 3 3M15 19l-3 3-3-3M19 9l3 3-3 3M2 12h20M12 2v20",
            )],
            Icon::Undo => &[
                Path("M9 14L4 9l5-5"),
                Path("M4 9h10.5a5.5 5.5 0 0 1 5.5 5.5 5.5 5.5 0 0 1-5.5 5.5H11"),
            ],
            Icon::Zap => &[Path("M13 2L3 14h9l-1 8 10-12h-9l1-8z")],
            Icon::Infinity => &[Path(
                "M12 12c-2-2.67-4-4-6-4a4 4 0 1 0 0 8c2 0 4-1.33 6-4zm0 0c2 2.67 4 4 6 4a4 4 0 0 0 0-8c-2 0-4 1.33-6 4z",
            )],
            Icon::Box => &[
                Path(
                    "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
                ),
                Path("M3.3 7l8.7 5 8.7-5M12 22V12"),
            ],
            Icon::Shield => &[Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
            Icon::Hand => &[Path(
                "M18 11V6a2 2 0 0 0-4 0v5M14 10V4a2 2 0 0 0-4 0v6M10 10.5V6a2 2 0 0 0-4 0v8M18 8a2 2 0 1 1 4 0v6a8 8 0 0 1-8 8h-2c-2.8 0-4.5-.86-6-2.34l-3.6-3.6a2 2 0 0 1 2.83-2.82L7 15",
            )],
            Icon::Gem => &[
                Path("M6 3h12l4 6-10 13L2 9z"),
                Path("M11 3L8 9l4 13 4-13-3-6M2 9h20"),
            ],
        }
    }

    /// The icon scaled to `size`, top-left corner at `(x, y)`.
    pub fn draw(self, x: f64, y: f64, size: f64, color: Rgba8, stroke_width: f64) -> El {
        let scale = size / 24.0;
        let shapes = self.parts().iter().map(|part| match *part {
            Part::Path(d) => El::path(d),
            Part::Circle(cx, cy, r) => El::circle(cx, cy, r),
            Part::Rect(rx, ry, w, h, radius) => El::new("rect")
                .num("x", rx)
                .num("y", ry)
                .num("width", w)
                .num("height", h)
                .num("rx", radius),
        });
        El::group()
            .attr(
                "transform",
                format!("translate({} {}) scale({})", num(x), num(y), num(scale)),
            )
            .attr("fill", "none")
            .attr("stroke", color.hex())
            .num("stroke-width", stroke_width)
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .children(shapes)
    }
}
