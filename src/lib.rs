//! griddraw - interactive grid-rectangle drawing over a host canvas.
//!
//! Given a stream of mouse events, the engine maintains a collection of
//! axis-aligned rectangles ("grid boxes"): a drag on empty canvas creates a
//! new rectangle, a click on an existing rectangle's border inserts a
//! subdivision line, and every frame is a full clear-and-redraw of the
//! committed collection plus whatever rectangle is in flight.
//!
//! The rendering framework is a collaborator behind the [`CanvasSurface`]
//! trait: the host mounts the canvas once via
//! [`CanvasManager::create_canvas`] and forwards mouse events in
//! canvas-local coordinates. Application code reads the grid through the
//! [`GridHandle`] façade, looked up in a host-owned [`GridRegistry`].
//!
//! ```no_run
//! use griddraw::{CanvasManager, ChildElement, ContainerSpec, GridOptions, GridRegistry, PointerEvent};
//! # fn host_surface() -> impl griddraw::CanvasSurface { unimplemented!() }
//!
//! let registry = GridRegistry::new();
//! let mut surface = host_surface();
//! let mut manager = CanvasManager::new(GridOptions::default());
//!
//! let container = ContainerSpec::single(ChildElement::new("box", 800.0, 600.0));
//! let grid = manager.create_canvas(&container, &mut surface, &registry)?;
//!
//! manager.mouse_down(&mut surface, PointerEvent::new(10.0, 10.0));
//! manager.mouse_move(&mut surface, PointerEvent::new(110.0, 80.0));
//! manager.mouse_up(&mut surface, PointerEvent::new(110.0, 80.0));
//!
//! assert_eq!(grid.rectangle_count(), 1);
//! # Ok::<(), griddraw::MountError>(())
//! ```

pub mod api;
pub mod constants;
pub mod creation;
pub mod error;
pub mod input;
pub mod manager;
pub mod spatial_index;
pub mod surface;
pub mod types;

pub use api::{GridHandle, GridRegistry};
pub use creation::CreationManager;
pub use error::{MountError, MountResult};
pub use hit_test::{BorderEdge, BoundaryValidator};
pub use input::{InputState, PointerEvent};
pub use manager::{CanvasManager, ChildElement, ContainerSpec};
pub use surface::{CanvasSurface, CursorStyle};
pub use types::{Axis, GridLine, GridOptions, GridRectangle, RectangleSnapshot};
