//! Mouse input handling for the canvas.
//!
//! ## Architecture
//!
//! The engine uses an explicit state machine ([`InputState`]) to track the
//! current interaction mode instead of a loose `drag` boolean. Handlers live
//! as `impl CanvasManager` blocks, one per event kind:
//!
//! - `state` - input state machine
//! - `mouse_down` - border click / interior click / drag start
//! - `mouse_move` - drag resize or hover hit-testing, full repaint
//! - `mouse_up` - drag commit, full repaint
//!
//! ## Coordinates
//!
//! All events carry one canonical canvas-local coordinate space. Whatever
//! page-to-canvas translation the host's DOM layer needs happens before the
//! event reaches this crate.

mod mouse_down;
mod mouse_move;
mod mouse_up;
mod state;

pub use state::InputState;

/// A mouse event in canvas-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
