//! Input state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging    (mouse down outside every rectangle and border)
//! Idle     -> Idle        (mouse down on a border: subdivision insert)
//! Idle     -> Idle        (mouse down inside an existing rectangle: no-op)
//! Dragging -> Dragging    (mouse move: resize the rectangle in flight)
//! Dragging -> Idle        (mouse up: commit)
//! ```

/// Current mouse interaction mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputState {
    /// No active gesture; moves perform hover hit-testing only.
    #[default]
    Idle,
    /// A new rectangle is being sized between mouse down and mouse up.
    Dragging,
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Enter the drag gesture.
    pub fn start_drag(&mut self) {
        *self = Self::Dragging;
    }

    /// Back to Idle, finalizing whatever gesture was active.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
