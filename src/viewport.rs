use crate::constants::MAX_PIXEL_RATIO;

/// Logical size of the view plus the device pixel ratio of the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, pixel_ratio: 1.0 }
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// Pixel ratio actually used for the surface, capped to bound fill cost
    pub fn surface_scale(&self) -> f32 {
        if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Backing surface size in device pixels
    pub fn surface_size(&self) -> (i32, i32) {
        let scale = self.surface_scale();
        (
            (self.width * scale).round() as i32,
            (self.height * scale).round() as i32,
        )
    }

    /// A zero-area viewport has nothing to draw on
    pub fn is_drawable(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }
}
