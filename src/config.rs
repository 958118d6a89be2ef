use macroquad::math::{Vec2, vec2};

use crate::error::Error;

/// Startup constants: window pixel size, grid resolution, and zoom behavior.
/// The pixel size of one cell is derived from window size / cell counts and
/// never stored separately.
#[derive(Clone, Debug)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Multiplicative scale change per scroll tick.
    pub zoom_step: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 960,
            window_height: 540,
            grid_width: 96,
            grid_height: 54,
            zoom_step: 1.1,
            zoom_min: 0.5,
            zoom_max: 2.0,
        }
    }
}

impl Config {
    /// Check the constants the rest of the app is built from. Fatal at
    /// startup; nothing downstream revalidates.
    pub fn validate(&self) -> Result<(), Error> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(Error::InvalidDimension {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidDimension {
                width: self.window_width as usize,
                height: self.window_height as usize,
            });
        }
        if !(self.zoom_step > 0.0) {
            return Err(Error::InvalidZoomFactor(self.zoom_step));
        }
        if !(self.zoom_min > 0.0) || self.zoom_min > self.zoom_max {
            return Err(Error::InvalidZoomFactor(self.zoom_min));
        }
        Ok(())
    }

    /// Pixel size of one grid cell.
    pub fn cell_size(&self) -> Vec2 {
        vec2(
            self.window_width as f32 / self.grid_width as f32,
            self.window_height as f32 / self.grid_height as f32,
        )
    }

    /// Window size in pixels.
    pub fn window_size(&self) -> Vec2 {
        vec2(self.window_width as f32, self.window_height as f32)
    }
}
