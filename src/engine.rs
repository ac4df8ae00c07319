use crate::canvas::Canvas;
use crate::viewport::Viewport;

/// Continuously animated layer with an explicit lifecycle
pub trait Engine {
    /// Returns false when there is no usable surface; the engine then stays idle.
    fn initialize(&mut self, viewport: Viewport) -> bool;
    /// Queue a new size; it takes effect at the start of the next frame.
    fn resize(&mut self, viewport: Viewport);
    /// Advance one frame and draw it. Returns false once the engine no longer runs.
    fn render_frame<C: Canvas>(&mut self, canvas: &mut C) -> bool;
    fn dispose(&mut self);
}
