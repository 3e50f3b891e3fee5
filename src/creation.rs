//! Rectangle construction and canvas drawing.
//!
//! [`CreationManager`] owns the rectangle-under-construction lifecycle
//! (reset at drag start, resize on every move, the manager commits) and all
//! stroke/line drawing. It mutates committed rectangles only through
//! explicit subdivision-insert calls from the manager, and never clears the
//! canvas itself.

use tracing::trace;

use crate::hit_test::BorderEdge;
use crate::surface::CanvasSurface;
use crate::types::{Axis, GridLine, GridOptions, GridRectangle};

pub struct CreationManager {
    options: GridOptions,
}

impl CreationManager {
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    /// Re-anchor the rectangle under construction at the drag start point
    /// and clear any leftover subdivision state.
    pub fn reset_box_properties(&self, rect: &mut GridRectangle, x: f32, y: f32) {
        rect.start_x = x;
        rect.start_y = y;
        rect.width = 0.0;
        rect.height = 0.0;
        rect.horizontal_points_selected.clear();
        rect.vertical_points_selected.clear();
        rect.undo_line_list.clear();
    }

    /// Resize the in-flight rectangle to the current pointer position and
    /// stroke its outline. Extents stay signed; they are normalized for
    /// drawing only, so the anchor can still move until commit.
    pub fn draw_rectangle(&self, surface: &mut dyn CanvasSurface, rect: &mut GridRectangle, x: f32, y: f32) {
        rect.width = x - rect.start_x;
        rect.height = y - rect.start_y;
        self.stroke_outline(surface, rect);
    }

    /// Stroke the rectangle outline plus all its subdivision lines, each
    /// spanning the rectangle's full width/height.
    pub fn draw_rect_grid_lines(&self, surface: &mut dyn CanvasSurface, rect: &GridRectangle) {
        self.stroke_outline(surface, rect);

        let bounds = rect.bounds();
        let colour = &self.options.line_colour;
        let width = self.options.context_line_width;

        for offset in &rect.horizontal_points_selected {
            let y = rect.start_y + offset;
            surface.stroke_line(bounds.min_x, y, bounds.max_x, y, colour, width);
        }
        for offset in &rect.vertical_points_selected {
            let x = rect.start_x + offset;
            surface.stroke_line(x, bounds.min_y, x, bounds.max_y, colour, width);
        }
    }

    /// Insert a subdivision line where an existing border was clicked.
    ///
    /// A click on a vertical (left/right) border inserts a horizontal line:
    /// the pointer's y-offset from the anchor is appended to
    /// `horizontal_points_selected`. A click on a horizontal border inserts
    /// a vertical line symmetrically. The rectangle's geometry is untouched
    /// and the grid lines are redrawn immediately.
    pub fn draw_line_at_clicked_grid_boundary_position(
        &self,
        surface: &mut dyn CanvasSurface,
        rect: &mut GridRectangle,
        x: f32,
        y: f32,
        edge: BorderEdge,
    ) {
        let bounds = rect.bounds();
        let axis = edge.subdivision_axis();
        let offset = match axis {
            // Clamp to the border's span; a click within tolerance may land
            // slightly outside the rectangle proper.
            Axis::Horizontal => y.clamp(bounds.min_y, bounds.max_y) - rect.start_y,
            Axis::Vertical => x.clamp(bounds.min_x, bounds.max_x) - rect.start_x,
        };

        match axis {
            Axis::Horizontal => rect.horizontal_points_selected.push(offset),
            Axis::Vertical => rect.vertical_points_selected.push(offset),
        }
        rect.undo_line_list.push(GridLine { axis, offset });
        trace!(?axis, offset, "inserted subdivision line");

        self.draw_rect_grid_lines(surface, rect);
    }

    fn stroke_outline(&self, surface: &mut dyn CanvasSurface, rect: &GridRectangle) {
        let bounds = rect.bounds();
        surface.stroke_rect(
            bounds.min_x,
            bounds.min_y,
            bounds.width(),
            bounds.height(),
            &self.options.line_colour,
            self.options.context_line_width,
        );
    }
}
