//! Crate-wide constants.
//!
//! Centralizes the default values for every configuration knob so the
//! defaults are visible in one place.

// ============================================================================
// Grid Option Defaults
// ============================================================================

/// Distance in pixels within which a click or hover counts as "on" a
/// rectangle border rather than inside/outside it.
pub const DEFAULT_LINE_CLICK_TOLERANCE: f32 = 15.0;

/// Radius in pixels of the subdivision handle circle drawn on border hover.
pub const DEFAULT_SELECT_CIRCLE_SIZE: f32 = 3.0;

/// Offset in pixels of the subdivision handle from the hovered border.
pub const DEFAULT_CIRCLE_LINE_SHIFT_SIZE: f32 = 10.0;

/// Stroke width for rectangle outlines and subdivision lines.
pub const DEFAULT_CONTEXT_LINE_WIDTH: f32 = 1.0;

/// Stroke colour for rectangle outlines and subdivision lines.
pub const DEFAULT_LINE_COLOUR: &str = "red";

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum normalized width/height for a drag to commit a rectangle
/// (prevents accidental zero-size rectangles from stray clicks).
pub const DEFAULT_MIN_RECT_SIZE: f32 = 5.0;
