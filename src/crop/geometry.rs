use crate::foundation::{
    core::{Point, Rect, Size, Vec2},
    error::{ForgeError, ForgeResult},
};

/// Width over height of the selection.
pub const CROP_ASPECT: f64 = 2.0 / 3.0;
/// Selection height at zoom 100.
pub const MIN_CROP_HEIGHT: f64 = 50.0;
pub const DEFAULT_ZOOM: f64 = 50.0;

const INITIAL_HEIGHT_FRACTION: f64 = 0.6;
const MAX_HEIGHT_FRACTION: f64 = 0.98;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Where a drag started, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub pointer_start: Point,
    pub rect_start: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropState {
    NoImage,
    Idle,
    Dragging(Drag),
}

/// What a pointer move did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    pub moved: bool,
    /// The host should cancel page scrolling for this event.
    pub suppress_scroll: bool,
}

/// Uniform "contain" scale and the letterbox offset of the displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainFit {
    pub scale: f64,
    pub offset: Vec2,
}

impl ContainFit {
    pub fn new(container: Size, natural: Size) -> Self {
        let scale = (container.width / natural.width).min(container.height / natural.height);
        let offset = Vec2::new(
            (container.width - natural.width * scale) / 2.0,
            (container.height - natural.height * scale) / 2.0,
        );
        Self { scale, offset }
    }

    /// Container rect mapped into source-image pixels.
    pub fn to_source(&self, r: Rect) -> Rect {
        let s = self.scale;
        Rect::from_origin_size(
            ((r.x0 - self.offset.x) / s, (r.y0 - self.offset.y) / s),
            (r.width() / s, r.height() / s),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Loaded {
    container: Size,
    natural: Size,
}

/// Selection state over one loaded image.
#[derive(Clone, Debug, PartialEq)]
pub struct CropTool {
    loaded: Option<Loaded>,
    rect: Rect,
    zoom: f64,
    drag: Option<Drag>,
}

impl Default for CropTool {
    fn default() -> Self {
        Self::new()
    }
}

fn valid_size(s: Size) -> bool {
    s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
}

/// Keep `[pos, pos + len]` inside `[0, limit]`; pinned to 0 when it cannot fit.
fn clamp_axis(pos: f64, len: f64, limit: f64) -> f64 {
    if len >= limit {
        0.0
    } else {
        pos.clamp(0.0, limit - len)
    }
}

impl CropTool {
    pub fn new() -> Self {
        Self {
            loaded: None,
            rect: Rect::ZERO,
            zoom: DEFAULT_ZOOM,
            drag: None,
        }
    }

    pub fn state(&self) -> CropState {
        match (self.loaded, self.drag) {
            (None, _) => CropState::NoImage,
            (Some(_), None) => CropState::Idle,
            (Some(_), Some(d)) => CropState::Dragging(d),
        }
    }

    pub fn has_image(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Selection in container coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn container(&self) -> Option<Size> {
        self.loaded.map(|l| l.container)
    }

    pub fn natural(&self) -> Option<Size> {
        self.loaded.map(|l| l.natural)
    }

    pub fn fit(&self) -> Option<ContainFit> {
        self.loaded.map(|l| ContainFit::new(l.container, l.natural))
    }

    /// Show a new image: centered selection at 60% of the container height, zoom back to 50.
    #[tracing::instrument(skip(self))]
    pub fn load_image(&mut self, container: Size, natural: Size) -> ForgeResult<()> {
        if !valid_size(container) || !valid_size(natural) {
            return Err(ForgeError::crop(format!(
                "container {}x{} and image {}x{} must be positive",
                container.width, container.height, natural.width, natural.height
            )));
        }
        let h = container.height * INITIAL_HEIGHT_FRACTION;
        let w = h * CROP_ASPECT;
        let origin = Point::new((container.width - w) / 2.0, (container.height - h) / 2.0);
        self.loaded = Some(Loaded { container, natural });
        self.rect = Rect::from_origin_size(origin, (w, h));
        self.zoom = DEFAULT_ZOOM;
        self.drag = None;
        Ok(())
    }

    /// Start a drag when `p` is inside the selection; returns whether one started.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        if self.loaded.is_none() || !self.rect.contains(p) {
            return false;
        }
        self.drag = Some(Drag {
            pointer_start: p,
            rect_start: self.rect.origin(),
        });
        true
    }

    pub fn pointer_move(&mut self, p: Point, kind: PointerKind) -> PointerResponse {
        let (Some(drag), Some(loaded)) = (self.drag, self.loaded) else {
            return PointerResponse::default();
        };
        let proposed = drag.rect_start + (p - drag.pointer_start);
        let size = self.rect.size();
        let origin = Point::new(
            clamp_axis(proposed.x, size.width, loaded.container.width),
            clamp_axis(proposed.y, size.height, loaded.container.height),
        );
        self.rect = Rect::from_origin_size(origin, size);
        PointerResponse {
            moved: true,
            suppress_scroll: kind == PointerKind::Touch,
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn pointer_leave(&mut self) {
        self.drag = None;
    }

    /// Slider in `0..=100`: 0 is the largest selection, 100 the smallest. Keeps the center.
    pub fn set_zoom(&mut self, value: f64) {
        let value = if value.is_nan() { DEFAULT_ZOOM } else { value.clamp(0.0, 100.0) };
        self.zoom = value;
        let Some(loaded) = self.loaded else {
            return;
        };
        let max = MAX_HEIGHT_FRACTION * loaded.container.height;
        let h = max - value / 100.0 * (max - MIN_CROP_HEIGHT);
        let w = h * CROP_ASPECT;
        let center = self.rect.center();
        let origin = Point::new(
            clamp_axis(center.x - w / 2.0, w, loaded.container.width),
            clamp_axis(center.y - h / 2.0, h, loaded.container.height),
        );
        self.rect = Rect::from_origin_size(origin, (w, h));
    }

    /// Selection mapped into source-image pixels.
    pub fn source_rect(&self) -> ForgeResult<Rect> {
        let fit = self
            .fit()
            .ok_or_else(|| ForgeError::crop("no image loaded"))?;
        Ok(fit.to_source(self.rect))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/crop/geometry.rs"]
mod tests;
