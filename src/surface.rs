use raylib::prelude::*;
use tracing::debug;

use crate::error::{PresentationError, Result};
use crate::viewport::Viewport;

/// Off-screen targets sized to the viewport in device pixels.
///
/// `background` is never cleared, so the translucent base wash leaves faint
/// trails of the previous frame. `frame` is the composited result (background
/// plus text) that is shown and recorded.
pub struct Surface {
    pub background: RenderTexture2D,
    pub frame: RenderTexture2D,
    viewport: Viewport,
}

impl Surface {
    pub fn allocate(rl: &mut RaylibHandle, thread: &RaylibThread, viewport: Viewport) -> Result<Surface> {
        let (width, height) = viewport.surface_size();
        if width <= 0 || height <= 0 {
            return Err(PresentationError::Surface {
                width,
                height,
                reason: "empty viewport".into(),
            });
        }
        let allocate = |rl: &mut RaylibHandle| {
            rl.load_render_texture(thread, width as u32, height as u32)
                .map_err(|e| PresentationError::Surface {
                    width,
                    height,
                    reason: e.to_string(),
                })
        };
        let background = allocate(rl)?;
        let frame = allocate(rl)?;
        debug!(width, height, scale = viewport.surface_scale(), "surface allocated");
        Ok(Surface { background, frame, viewport })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pixel_size(&self) -> (f32, f32) {
        (self.frame.width() as f32, self.frame.height() as f32)
    }

    /// Full-texture source rectangle, flipped to undo render texture orientation
    pub fn flipped_source(&self) -> Rectangle {
        let (w, h) = self.pixel_size();
        Rectangle::new(0.0, 0.0, w, -h)
    }
}
