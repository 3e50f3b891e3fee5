//! Core types for the grid drawing engine.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: per-canvas configuration, the mutable grid rectangle record, and
//! the serializable snapshot handed to host applications.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CIRCLE_LINE_SHIFT_SIZE, DEFAULT_CONTEXT_LINE_WIDTH, DEFAULT_LINE_CLICK_TOLERANCE,
    DEFAULT_LINE_COLOUR, DEFAULT_MIN_RECT_SIZE, DEFAULT_SELECT_CIRCLE_SIZE,
};

// ============================================================================
// Configuration
// ============================================================================

/// Immutable configuration for one canvas instance.
///
/// All fields have defaults (see [`crate::constants`]); hosts override
/// individual knobs through the `with_*` builder methods.
#[derive(Clone, Debug)]
pub struct GridOptions {
    /// Pixel radius within which a click/hover counts as "on" a border.
    pub line_click_tolerance: f32,
    /// Pixel radius of the subdivision handle circle.
    pub select_circle_size: f32,
    /// Pixel offset of the subdivision handle from the border.
    pub circle_line_shift_size: f32,
    /// Stroke width for outlines and subdivision lines.
    pub context_line_width: f32,
    /// Stroke colour for outlines and subdivision lines.
    pub line_colour: String,
    /// Minimum normalized width/height for a drag to commit a rectangle.
    pub min_rect_size: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            line_click_tolerance: DEFAULT_LINE_CLICK_TOLERANCE,
            select_circle_size: DEFAULT_SELECT_CIRCLE_SIZE,
            circle_line_shift_size: DEFAULT_CIRCLE_LINE_SHIFT_SIZE,
            context_line_width: DEFAULT_CONTEXT_LINE_WIDTH,
            line_colour: DEFAULT_LINE_COLOUR.to_string(),
            min_rect_size: DEFAULT_MIN_RECT_SIZE,
        }
    }
}

impl GridOptions {
    pub fn with_line_click_tolerance(mut self, tolerance: f32) -> Self {
        self.line_click_tolerance = tolerance;
        self
    }

    pub fn with_select_circle_size(mut self, size: f32) -> Self {
        self.select_circle_size = size;
        self
    }

    pub fn with_circle_line_shift_size(mut self, shift: f32) -> Self {
        self.circle_line_shift_size = shift;
        self
    }

    pub fn with_context_line_width(mut self, width: f32) -> Self {
        self.context_line_width = width;
        self
    }

    pub fn with_line_colour(mut self, colour: impl Into<String>) -> Self {
        self.line_colour = colour.into();
        self
    }

    pub fn with_min_rect_size(mut self, size: f32) -> Self {
        self.min_rect_size = size;
        self
    }
}

// ============================================================================
// Grid Rectangle
// ============================================================================

/// Axis of a subdivision line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A subdivision line inserted by clicking an existing border.
///
/// `offset` is relative to the rectangle's anchor: a y-offset for
/// [`Axis::Horizontal`] lines, an x-offset for [`Axis::Vertical`] lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: Axis,
    pub offset: f32,
}

/// A user-drawn axis-aligned box plus its subdivision offsets.
///
/// `width`/`height` are signed: they may be negative while a drag moves
/// toward the top-left and are only normalized for drawing and hit-testing.
/// The sign is preserved until the rectangle is committed, at which point
/// [`GridRectangle::normalize`] moves the anchor to the true top-left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridRectangle {
    pub start_x: f32,
    pub start_y: f32,
    pub width: f32,
    pub height: f32,
    /// Y-offsets of horizontal subdivision lines, relative to the anchor.
    /// Appended when the user clicks a vertical (left/right) border.
    pub horizontal_points_selected: Vec<f32>,
    /// X-offsets of vertical subdivision lines, relative to the anchor.
    /// Appended when the user clicks a horizontal (top/bottom) border.
    pub vertical_points_selected: Vec<f32>,
    /// Ordered record of inserted subdivision lines, retained for future
    /// undo support. Currently write-only.
    pub undo_line_list: Vec<GridLine>,
}

impl GridRectangle {
    /// Create a zero-size rectangle anchored at the given point.
    pub fn anchored_at(x: f32, y: f32) -> Self {
        Self {
            start_x: x,
            start_y: y,
            ..Self::default()
        }
    }

    /// Normalized bounding box, tolerating negative width/height.
    pub fn bounds(&self) -> RectBounds {
        let (min_x, max_x) = if self.width < 0.0 {
            (self.start_x + self.width, self.start_x)
        } else {
            (self.start_x, self.start_x + self.width)
        };
        let (min_y, max_y) = if self.height < 0.0 {
            (self.start_y + self.height, self.start_y)
        } else {
            (self.start_y, self.start_y + self.height)
        };
        RectBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Move the anchor to the true top-left and make the extents
    /// non-negative. Called once when a drag commits.
    pub fn normalize(&mut self) {
        if self.width < 0.0 {
            self.start_x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.start_y += self.height;
            self.height = -self.height;
        }
    }

    /// Read-only snapshot for the host-facing query API.
    pub fn snapshot(&self) -> RectangleSnapshot {
        RectangleSnapshot {
            start_x: self.start_x,
            start_y: self.start_y,
            width: self.width,
            height: self.height,
            horizontal_points_selected: self.horizontal_points_selected.clone(),
            vertical_points_selected: self.vertical_points_selected.clone(),
        }
    }
}

/// Normalized rectangle bounds (`min <= max` on both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl RectBounds {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Serializable view of one committed rectangle, as exposed to the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectangleSnapshot {
    pub start_x: f32,
    pub start_y: f32,
    pub width: f32,
    pub height: f32,
    pub horizontal_points_selected: Vec<f32>,
    pub vertical_points_selected: Vec<f32>,
}
