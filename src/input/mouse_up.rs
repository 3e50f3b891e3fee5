//! Mouse up handling - drag commit and full repaint.

use tracing::debug;

use crate::input::PointerEvent;
use crate::manager::CanvasManager;
use crate::surface::CanvasSurface;
use crate::types::GridRectangle;

impl CanvasManager {
    /// Dispatch a mouse-up event.
    ///
    /// If a drag was active, the rectangle in flight keeps the extent of the
    /// last move, is normalized (anchor moved to the true top-left), and is
    /// appended to the committed collection - unless its extent is below the
    /// configured minimum, in which case the accidental drag is discarded.
    /// Always returns to Idle with a fresh rectangle under construction.
    pub fn mouse_up(&mut self, surface: &mut dyn CanvasSurface, event: PointerEvent) {
        if self.state.is_dragging() {
            let mut rect = std::mem::take(&mut self.current_rect);
            rect.normalize();

            if rect.width >= self.options.min_rect_size && rect.height >= self.options.min_rect_size {
                debug!(
                    start_x = rect.start_x,
                    start_y = rect.start_y,
                    width = rect.width,
                    height = rect.height,
                    "committed rectangle"
                );
                self.store.lock().commit(rect);
            } else {
                debug!(width = rect.width, height = rect.height, "drag below minimum size, discarded");
            }
        }

        self.state.reset();
        self.current_rect = GridRectangle::default();

        surface.clear();
        self.draw_all_created_rectangles(surface, event.x, event.y);
    }
}
