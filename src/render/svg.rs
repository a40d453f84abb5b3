//! Minimal SVG document builder used to compose preview scenes.
//!
//! Scenes are plain strings handed to usvg; this module only guarantees well-formed markup
//! (escaped text and attributes, unique definition ids).

use std::fmt::{self, Write as _};

use crate::{
    foundation::core::{Rect, Rgba8},
    theme::tokens::Gradient,
};

/// Logical size of every preview.
pub const SCENE_WIDTH: f64 = 380.0;
pub const SCENE_HEIGHT: f64 = 600.0;

/// Format a coordinate compactly: at most two decimals, no trailing zeros.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

/// Fill or stroke paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    None,
    Color(Rgba8),
    /// Reference to a definition, e.g. a gradient id.
    Ref(String),
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Paint::Color(c)
    }
}

impl Paint {
    fn value(&self) -> String {
        match self {
            Paint::None => "none".to_string(),
            Paint::Color(c) => c.hex(),
            Paint::Ref(id) => format!("url(#{id})"),
        }
    }

    fn opacity(&self) -> Option<f32> {
        match self {
            Paint::Color(c) if !c.is_opaque() => Some(c.opacity()),
            _ => None,
        }
    }
}

/// One element under construction.
#[derive(Clone, Debug)]
pub struct El {
    tag: &'static str,
    attrs: String,
    body: String,
}

impl El {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: String::new(),
            body: String::new(),
        }
    }

    pub fn group() -> Self {
        Self::new("g")
    }

    pub fn rect(r: Rect) -> Self {
        Self::new("rect")
            .num("x", r.x0)
            .num("y", r.y0)
            .num("width", r.width())
            .num("height", r.height())
    }

    pub fn rounded(r: Rect, radius: f64) -> Self {
        Self::rect(r).num("rx", radius)
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new("circle").num("cx", cx).num("cy", cy).num("r", r)
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new("line")
            .num("x1", x1)
            .num("y1", y1)
            .num("x2", x2)
            .num("y2", y2)
    }

    pub fn path(d: &str) -> Self {
        Self::new("path").attr("d", d)
    }

    pub fn attr(mut self, name: &str, value: impl fmt::Display) -> Self {
        let _ = write!(self.attrs, " {name}=\"{}\"", escape(&value.to_string()));
        self
    }

    pub fn num(self, name: &str, v: f64) -> Self {
        self.attr(name, num(v))
    }

    pub fn fill(self, paint: impl Into<Paint>) -> Self {
        let paint = paint.into();
        let el = self.attr("fill", paint.value());
        match paint.opacity() {
            Some(o) => el.attr("fill-opacity", num(f64::from(o))),
            None => el,
        }
    }

    pub fn stroke(self, paint: impl Into<Paint>, width: f64) -> Self {
        let paint = paint.into();
        let el = self.attr("stroke", paint.value()).num("stroke-width", width);
        match paint.opacity() {
            Some(o) => el.attr("stroke-opacity", num(f64::from(o))),
            None => el,
        }
    }

    pub fn opacity(self, o: f64) -> Self {
        self.num("opacity", o.clamp(0.0, 1.0))
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        self.attr("transform", format!("translate({} {})", num(x), num(y)))
    }

    pub fn child(mut self, child: El) -> Self {
        child.write_into(&mut self.body);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = El>) -> Self {
        for c in children {
            c.write_into(&mut self.body);
        }
        self
    }

    /// Escaped character data.
    pub fn text(mut self, s: &str) -> Self {
        self.body.push_str(&escape(s));
        self
    }

    fn write_into(&self, out: &mut String) {
        if self.body.is_empty() {
            let _ = write!(out, "<{}{}/>", self.tag, self.attrs);
        } else {
            let _ = write!(out, "<{}{}>{}</{}>", self.tag, self.attrs, self.body, self.tag);
        }
    }
}

impl fmt::Display for El {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_into(&mut s);
        f.write_str(&s)
    }
}

/// Gradient stops as `(offset, color)`.
pub type Stops<'a> = &'a [(f32, Rgba8)];

/// A scene document: definitions plus layers painted in push order.
#[derive(Debug)]
pub struct Scene {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    next_id: u32,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
            next_id: 0,
        }
    }

    pub fn card() -> Self {
        Self::new(SCENE_WIDTH, SCENE_HEIGHT)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    pub fn define(&mut self, el: El) {
        el.write_into(&mut self.defs);
    }

    pub fn push(&mut self, el: El) {
        el.write_into(&mut self.body);
    }

    /// Linear gradient along `(x1, y1) -> (x2, y2)` in bounding-box fractions.
    pub fn linear(&mut self, vector: (f64, f64, f64, f64), stops: Stops<'_>) -> Paint {
        let id = self.fresh_id("lg");
        let (x1, y1, x2, y2) = vector;
        let el = El::new("linearGradient")
            .attr("id", &id)
            .num("x1", x1)
            .num("y1", y1)
            .num("x2", x2)
            .num("y2", y2)
            .children(stops.iter().map(|&(o, c)| stop_el(o, c)));
        self.define(el);
        Paint::Ref(id)
    }

    /// Linear gradient in scene units, for stripes that repeat across the whole card.
    pub fn linear_user_space(
        &mut self,
        vector: (f64, f64, f64, f64),
        stops: Stops<'_>,
        repeat: bool,
    ) -> Paint {
        let id = self.fresh_id("lu");
        let (x1, y1, x2, y2) = vector;
        let mut el = El::new("linearGradient")
            .attr("id", &id)
            .attr("gradientUnits", "userSpaceOnUse")
            .num("x1", x1)
            .num("y1", y1)
            .num("x2", x2)
            .num("y2", y2);
        if repeat {
            el = el.attr("spreadMethod", "repeat");
        }
        self.define(el.children(stops.iter().map(|&(o, c)| stop_el(o, c))));
        Paint::Ref(id)
    }

    pub fn theme_gradient(&mut self, g: &Gradient) -> Paint {
        let stops: Vec<(f32, Rgba8)> = g.stops.iter().map(|s| (s.offset, s.color)).collect();
        self.linear(g.vector(), &stops)
    }

    /// Radial gradient centered at `(cx, cy)` with radius `r`, in bounding-box fractions.
    pub fn radial(&mut self, cx: f64, cy: f64, r: f64, stops: Stops<'_>) -> Paint {
        let id = self.fresh_id("rg");
        let el = El::new("radialGradient")
            .attr("id", &id)
            .num("cx", cx)
            .num("cy", cy)
            .num("r", r)
            .children(stops.iter().map(|&(o, c)| stop_el(o, c)));
        self.define(el);
        Paint::Ref(id)
    }

    /// Tiled pattern of `tile` (user units); returns the paint referencing it.
    pub fn pattern(&mut self, width: f64, height: f64, tile: El) -> Paint {
        let id = self.fresh_id("pt");
        let el = El::new("pattern")
            .attr("id", &id)
            .attr("patternUnits", "userSpaceOnUse")
            .num("width", width)
            .num("height", height)
            .child(tile);
        self.define(el);
        Paint::Ref(id)
    }

    /// Rounded clip region; returns the `clip-path` attribute value.
    pub fn clip_rounded(&mut self, r: Rect, radius: f64) -> String {
        let id = self.fresh_id("clip");
        self.define(
            El::new("clipPath")
                .attr("id", &id)
                .child(El::rounded(r, radius)),
        );
        format!("url(#{id})")
    }

    /// Filter made of the given primitives; returns the `filter` attribute value.
    pub fn filter(&mut self, primitives: impl IntoIterator<Item = El>) -> String {
        let id = self.fresh_id("fx");
        self.define(
            El::new("filter")
                .attr("id", &id)
                .attr("x", "-20%")
                .attr("y", "-20%")
                .attr("width", "140%")
                .attr("height", "140%")
                .children(primitives),
        );
        format!("url(#{id})")
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = num(self.width),
            h = num(self.height),
        );
        if !self.defs.is_empty() {
            let _ = write!(out, "<defs>{}</defs>", self.defs);
        }
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }
}

fn stop_el(offset: f32, color: Rgba8) -> El {
    let el = El::new("stop")
        .num("offset", f64::from(offset.clamp(0.0, 1.0)))
        .attr("stop-color", color.hex());
    if color.is_opaque() {
        el
    } else {
        el.num("stop-opacity", f64::from(color.opacity()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
