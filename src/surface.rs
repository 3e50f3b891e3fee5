//! The canvas surface seam.
//!
//! The engine never talks to a rendering framework directly. The host mounts
//! a [`CanvasSurface`] implementation (a 2D drawing context plus cursor
//! control) and lends it to the engine by reference for the duration of a
//! single event dispatch. No component stores the surface beyond a call,
//! which keeps the single-writer discipline without any locking.

/// Mouse cursor styles the engine can request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    /// Host default ("auto").
    #[default]
    Default,
    /// Pointer/hand cursor.
    Pointer,
    /// Horizontal resize cursor, shown near vertical (left/right) borders.
    EwResize,
    /// Vertical resize cursor, shown near horizontal (top/bottom) borders.
    NsResize,
}

/// A 2D drawing surface overlaying the host container.
///
/// All coordinates are canvas-local pixels. Out-of-range coordinates are
/// valid and simply produce clipped or off-screen draws.
pub trait CanvasSurface {
    /// Current surface size as `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Resize the surface. Called exactly once at mount, sized to the host
    /// container child's content box.
    fn set_size(&mut self, width: f32, height: f32);

    /// Clear the whole surface. Callers clear before a frame's draw
    /// sequence; no drawing component clears on its own.
    fn clear(&mut self);

    /// Stroke an axis-aligned rectangle outline.
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: &str, line_width: f32);

    /// Stroke a line segment.
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, colour: &str, line_width: f32);

    /// Fill a circle (subdivision handle marker).
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, colour: &str);

    /// Set the mouse cursor shown over the canvas.
    fn set_cursor(&mut self, cursor: CursorStyle);
}
