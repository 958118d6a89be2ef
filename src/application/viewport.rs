use macroquad::camera::Camera2D;
use macroquad::math::{Vec2, vec2};

use crate::config::Config;
use crate::error::Error;

/// Composed pan/zoom transform between grid space and screen space:
/// `screen = world * scale + offset`, uniform scale about the origin with
/// the translation applied after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub offset: Vec2,
    pub scale: f32,
}

impl ViewTransform {
    /// Map a grid-space point to screen space
    pub fn apply(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }

    /// Map a screen-space point back to grid space
    pub fn unapply(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    /// The equivalent macroquad camera for a window of the given pixel
    /// size, used once per frame at draw time.
    pub fn camera(&self, screen_w: f32, screen_h: f32) -> Camera2D {
        Camera2D {
            zoom: vec2(2.0 * self.scale / screen_w, -2.0 * self.scale / screen_h),
            target: vec2(
                (screen_w * 0.5 - self.offset.x) / self.scale,
                (screen_h * 0.5 - self.offset.y) / self.scale,
            ),
            ..Default::default()
        }
    }
}

/// Viewport owns the pan offset and zoom scale for grid navigation, and the
/// drag session that feeds the pan. Mutated only through input commands;
/// read once per frame through `transform`.
pub struct Viewport {
    offset: Vec2,
    scale: f32,
    zoom_step: f32,
    zoom_min: f32,
    zoom_max: f32,
    drag_anchor: Option<Vec2>,
}

impl Viewport {
    /// Viewport at identity: no pan, scale 1.0
    pub fn new(config: &Config) -> Result<Self, Error> {
        if !(config.zoom_step > 0.0) {
            return Err(Error::InvalidZoomFactor(config.zoom_step));
        }
        if !(config.zoom_min > 0.0) || config.zoom_min > config.zoom_max {
            return Err(Error::InvalidZoomFactor(config.zoom_min));
        }
        Ok(Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            zoom_step: config.zoom_step,
            zoom_min: config.zoom_min,
            zoom_max: config.zoom_max,
            drag_anchor: None,
        })
    }

    /// Start a pan session at the given pointer position
    pub fn begin_drag(&mut self, pos: Vec2) {
        self.drag_anchor = Some(pos);
    }

    /// End the pan session. Pointer movement no longer pans.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Feed a pointer sample into the active pan session: the delta from
    /// the last sample accumulates into the offset. No-op outside a session.
    pub fn drag_to(&mut self, pos: Vec2) {
        if let Some(last) = self.drag_anchor {
            self.offset += pos - last;
            self.drag_anchor = Some(pos);
        }
    }

    /// Zoom in one scroll tick
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * self.zoom_step).clamp(self.zoom_min, self.zoom_max);
    }

    /// Zoom out one scroll tick
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / self.zoom_step).clamp(self.zoom_min, self.zoom_max);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current composed transform; pure read, applied at draw time
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            offset: self.offset,
            scale: self.scale,
        }
    }
}
