//! Mouse move handling - drag resize or hover hit-testing.
//!
//! Mouse move is the hot path: it runs on every pointer movement and
//! performs a full clear-and-redraw each time. There is no frame queue or
//! coalescing; the last event processed wins the visible frame.

use tracing::trace;

use crate::input::PointerEvent;
use crate::manager::CanvasManager;
use crate::surface::{CanvasSurface, CursorStyle};

impl CanvasManager {
    /// Dispatch a mouse-move event.
    ///
    /// While dragging, resizes the rectangle in flight to the pointer.
    /// While idle, updates the cursor style from border proximity. Either
    /// way the frame ends with a redraw of every committed rectangle plus
    /// its hover handles.
    pub fn mouse_move(&mut self, surface: &mut dyn CanvasSurface, event: PointerEvent) {
        surface.clear();

        if self.state.is_dragging() {
            self.creation
                .draw_rectangle(surface, &mut self.current_rect, event.x, event.y);
        } else {
            let store = self.store.lock();
            self.validator.update_cursor_style(
                surface,
                event.x,
                event.y,
                &store.rectangles,
                CursorStyle::Default,
            );
        }

        self.draw_all_created_rectangles(surface, event.x, event.y);
        trace!(x = event.x, y = event.y, dragging = self.state.is_dragging(), "redraw");
    }
}
