//! Canvas orchestration.
//!
//! [`CanvasManager`] owns the committed rectangle collection (shared with
//! the façade through [`GridStore`]), validates the mount contract, and runs
//! the per-event state machine. It is the sole writer of the canvas surface:
//! the hit-testing and creation components receive the surface by reference
//! per call and never hold it.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::api::{GridHandle, GridRegistry};
use crate::creation::CreationManager;
use crate::error::{MountError, MountResult};
use crate::hit_test::BoundaryValidator;
use crate::input::InputState;
use crate::spatial_index::SpatialIndex;
use crate::surface::CanvasSurface;
use crate::types::{GridOptions, GridRectangle, RectangleSnapshot};

// ============================================================================
// Mount contract
// ============================================================================

/// One child element of the host container, as described by the host.
#[derive(Clone, Debug)]
pub struct ChildElement {
    /// Stable identifier of the element, if it has one.
    pub id: Option<String>,
    /// Content-box width in pixels at mount time.
    pub width: f32,
    /// Content-box height in pixels at mount time.
    pub height: f32,
}

impl ChildElement {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: Some(id.into()),
            width,
            height,
        }
    }

    pub fn without_id(width: f32, height: f32) -> Self {
        Self {
            id: None,
            width,
            height,
        }
    }
}

/// Host-side description of the container the canvas overlays.
///
/// The mount contract requires exactly one child element with a stable,
/// non-empty identifier; anything else is a fatal configuration error.
#[derive(Clone, Debug, Default)]
pub struct ContainerSpec {
    pub children: Vec<ChildElement>,
}

impl ContainerSpec {
    pub fn new(children: Vec<ChildElement>) -> Self {
        Self { children }
    }

    pub fn single(child: ChildElement) -> Self {
        Self {
            children: vec![child],
        }
    }

    /// Validate the mount contract and return the sole child's id and
    /// content-box dimensions.
    pub fn sole_child(&self) -> MountResult<(&str, f32, f32)> {
        match self.children.as_slice() {
            [] => Err(MountError::NoChildren),
            [child] => match child.id.as_deref() {
                Some(id) if !id.is_empty() => Ok((id, child.width, child.height)),
                _ => Err(MountError::MissingContainerId),
            },
            children => Err(MountError::MultipleChildren {
                count: children.len(),
            }),
        }
    }
}

// ============================================================================
// Rectangle store
// ============================================================================

/// The committed rectangle collection plus its spatial index, kept in
/// lock-step. Shared between the manager and the façade; the manager is the
/// only writer during event dispatch, the façade may snapshot or clear.
pub(crate) struct GridStore {
    pub(crate) rectangles: Vec<GridRectangle>,
    pub(crate) index: SpatialIndex,
}

impl GridStore {
    fn new() -> Self {
        Self {
            rectangles: Vec::new(),
            index: SpatialIndex::new(),
        }
    }

    /// Append a committed rectangle, preserving insertion order, and index
    /// it under its insertion position.
    pub(crate) fn commit(&mut self, rect: GridRectangle) {
        let id = self.rectangles.len() as u64;
        self.index.insert(id, &rect);
        self.rectangles.push(rect);
    }

    pub(crate) fn clear(&mut self) {
        self.rectangles.clear();
        self.index.clear();
    }

    pub(crate) fn snapshots(&self) -> Vec<RectangleSnapshot> {
        self.rectangles.iter().map(GridRectangle::snapshot).collect()
    }
}

// ============================================================================
// Canvas manager
// ============================================================================

/// Orchestrator for one canvas/container pair.
///
/// Created once per mount; event handlers live in [`crate::input`]. The
/// canvas surface itself is owned by the host and lent in per event, so
/// dropping the manager needs no explicit surface teardown.
pub struct CanvasManager {
    pub(crate) store: Arc<Mutex<GridStore>>,
    pub(crate) options: GridOptions,
    pub(crate) creation: CreationManager,
    pub(crate) validator: BoundaryValidator,
    pub(crate) current_rect: GridRectangle,
    pub(crate) state: InputState,
    container_id: Option<String>,
}

impl CanvasManager {
    pub fn new(options: GridOptions) -> Self {
        Self {
            store: Arc::new(Mutex::new(GridStore::new())),
            creation: CreationManager::new(options.clone()),
            validator: BoundaryValidator::new(options.clone()),
            options,
            current_rect: GridRectangle::default(),
            state: InputState::default(),
            container_id: None,
        }
    }

    /// Mount the canvas over the host container.
    ///
    /// Validates the mount contract, sizes the surface to the child's
    /// content box exactly once (there is no resize observation), rebinds
    /// the drawing components, and registers the façade under the container
    /// id - replacing any previous binding for the same container.
    pub fn create_canvas(
        &mut self,
        container: &ContainerSpec,
        surface: &mut dyn CanvasSurface,
        registry: &GridRegistry,
    ) -> MountResult<GridHandle> {
        let (id, width, height) = container.sole_child()?;
        self.container_id = Some(id.to_string());
        surface.set_size(width, height);

        self.creation = CreationManager::new(self.options.clone());
        self.validator = BoundaryValidator::new(self.options.clone());

        let handle = GridHandle::new(id, Arc::clone(&self.store));
        registry.bind(handle.clone());
        debug!(container_id = id, width, height, "canvas mounted");
        Ok(handle)
    }

    /// Container id this manager was mounted over, if mounted.
    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }

    /// Current interaction state (Idle or Dragging).
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Number of committed rectangles.
    pub fn rectangle_count(&self) -> usize {
        self.store.lock().rectangles.len()
    }

    /// Redraw every committed rectangle: hover handles for whichever border
    /// the pointer is near, then the outline and subdivision lines. The
    /// caller has already cleared the surface for this frame.
    pub(crate) fn draw_all_created_rectangles(&self, surface: &mut dyn CanvasSurface, x: f32, y: f32) {
        let store = self.store.lock();
        for rect in &store.rectangles {
            self.validator.check_border_hover_and_redraw(surface, rect, x, y);
            self.creation.draw_rect_grid_lines(surface, rect);
        }
    }
}
