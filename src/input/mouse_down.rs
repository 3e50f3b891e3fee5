//! Mouse down handling - subdivision insert, drag start, interior no-op.

use crate::input::PointerEvent;
use crate::manager::CanvasManager;
use crate::surface::CanvasSurface;

impl CanvasManager {
    /// Dispatch a mouse-down event.
    ///
    /// Checked in priority order:
    /// 1. On a committed rectangle's border: insert a subdivision line into
    ///    that rectangle. No drag starts.
    /// 2. Inside a committed rectangle: no-op, nested rectangles are not
    ///    allowed.
    /// 3. Anywhere else: re-anchor the rectangle under construction and
    ///    enter the drag gesture.
    pub fn mouse_down(&mut self, surface: &mut dyn CanvasSurface, event: PointerEvent) {
        let mut store = self.store.lock();

        // R-tree prefilter, then precise border test in insertion order so
        // earlier-created rectangles win when tolerance bands overlap.
        let mut candidates = store
            .index
            .query_point_with_tolerance(event.x, event.y, self.options.line_click_tolerance);
        candidates.sort_unstable();
        let border_hit = candidates.into_iter().find_map(|id| {
            let rect = &store.rectangles[id as usize];
            self.validator
                .border_hit(event.x, event.y, rect)
                .map(|edge| (id as usize, edge))
        });

        if let Some((idx, edge)) = border_hit {
            let rect = &mut store.rectangles[idx];
            self.creation
                .draw_line_at_clicked_grid_boundary_position(surface, rect, event.x, event.y, edge);
        } else if !self
            .validator
            .is_point_inside_any_region(event.x, event.y, &store.rectangles)
        {
            self.creation
                .reset_box_properties(&mut self.current_rect, event.x, event.y);
            self.state.start_drag();
        }
    }
}
