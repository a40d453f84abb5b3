//! Text runs and paragraph layout for scenes.
//!
//! usvg shapes text against real fonts, but line breaking happens here, before the scene is
//! parsed, using an estimated advance per glyph. The estimate errs wide so wrapped lines stay
//! inside their panels with any of the fallback faces.

use crate::{
    foundation::core::Rgba8,
    render::svg::{El, Paint, num},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Serif,
    Sans,
    Mono,
}

impl Face {
    fn family(self) -> &'static str {
        match self {
            Face::Serif => "Cinzel, Georgia, 'Times New Roman', serif",
            Face::Sans => "Inter, 'DejaVu Sans', Arial, sans-serif",
            Face::Mono => "'JetBrains Mono', 'DejaVu Sans Mono', monospace",
        }
    }

    fn advance(self) -> f64 {
        match self {
            Face::Serif => 0.52,
            Face::Sans => 0.55,
            Face::Mono => 0.62,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub face: Face,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub fill: Rgba8,
    pub anchor: Anchor,
    /// Extra advance per glyph, in scene units.
    pub tracking: f64,
    pub uppercase: bool,
}

impl TextStyle {
    pub const fn new(face: Face, size: f64, fill: Rgba8) -> Self {
        Self {
            face,
            size,
            bold: false,
            italic: false,
            fill,
            anchor: Anchor::Start,
            tracking: 0.0,
            uppercase: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            anchor: Anchor::Middle,
            ..self
        }
    }

    pub const fn end(self) -> Self {
        Self {
            anchor: Anchor::End,
            ..self
        }
    }

    pub const fn tracking(self, tracking: f64) -> Self {
        Self { tracking, ..self }
    }

    pub const fn upper(self) -> Self {
        Self {
            uppercase: true,
            ..self
        }
    }

    pub const fn fill(self, fill: Rgba8) -> Self {
        Self { fill, ..self }
    }

    fn prepare(&self, s: &str) -> String {
        if self.uppercase {
            s.to_uppercase()
        } else {
            s.to_string()
        }
    }

    /// Estimated rendered width of `s` in scene units.
    pub fn measure(&self, s: &str) -> f64 {
        let s = self.prepare(s);
        let mut em = 0.0;
        for c in s.chars() {
            em += if c.is_whitespace() {
                0.3
            } else if c.is_uppercase() || c.is_ascii_digit() {
                self.face.advance() * 1.2
            } else {
                self.face.advance()
            };
        }
        if self.bold {
            em *= 1.06;
        }
        em * self.size + self.tracking * s.chars().count() as f64
    }
}

/// A single run at baseline `(x, y)`.
pub fn run(x: f64, y: f64, s: &str, style: &TextStyle) -> El {
    painted_run(x, y, s, style, style.fill)
}

/// Like [`run`], filled with `paint` instead of the style's color.
pub fn painted_run(x: f64, y: f64, s: &str, style: &TextStyle, paint: impl Into<Paint>) -> El {
    let mut el = El::new("text")
        .num("x", x)
        .num("y", y)
        .attr("font-family", style.face.family())
        .num("font-size", style.size)
        .fill(paint)
        .attr("text-anchor", style.anchor.as_str());
    if style.bold {
        el = el.attr("font-weight", "bold");
    }
    if style.italic {
        el = el.attr("font-style", "italic");
    }
    if style.tracking != 0.0 {
        el = el.attr("letter-spacing", num(style.tracking));
    }
    el.text(&style.prepare(s))
}

/// Greedy word wrap to `max_width`. Words wider than a line are split between glyphs;
/// explicit newlines start a new line.
pub fn wrap(s: &str, max_width: f64, style: &TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    for para in s.split('\n') {
        let mut line = String::new();
        for word in para.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if style.measure(&candidate) <= max_width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if style.measure(word) <= max_width {
                line = word.to_string();
                continue;
            }
            for c in word.chars() {
                let mut next = line.clone();
                next.push(c);
                if !line.is_empty() && style.measure(&next) > max_width {
                    lines.push(std::mem::replace(&mut line, c.to_string()));
                } else {
                    line = next;
                }
            }
        }
        lines.push(line);
    }
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Laid-out paragraph: the runs and the height they occupy.
#[derive(Clone, Debug)]
pub struct Paragraph {
    pub lines: Vec<String>,
    pub line_height: f64,
    pub style: TextStyle,
}

impl Paragraph {
    pub fn new(s: &str, max_width: f64, line_height: f64, style: TextStyle) -> Self {
        let lines = if s.trim().is_empty() {
            Vec::new()
        } else {
            wrap(s, max_width, &style)
        };
        Self {
            lines,
            line_height,
            style,
        }
    }

    pub fn height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }

    /// Runs with the first line's box starting at `top`.
    pub fn render(&self, x: f64, top: f64) -> El {
        self.render_painted(x, top, self.style.fill)
    }

    pub fn render_painted(&self, x: f64, top: f64, paint: impl Into<Paint>) -> El {
        let paint = paint.into();
        let ascent = self.line_height * 0.5 + self.style.size * 0.35;
        El::group().children(self.lines.iter().enumerate().map(|(i, line)| {
            let y = top + ascent + i as f64 * self.line_height;
            painted_run(x, y, line, &self.style, paint.clone())
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
