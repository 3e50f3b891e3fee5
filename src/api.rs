//! Public façade and registry.
//!
//! [`GridHandle`] is the thin query/command surface handed to the embedding
//! application: read-only snapshots of the committed rectangles plus a
//! programmatic clear. [`GridRegistry`] is the host-owned map from container
//! id to the live handle for that container, with replace-on-remount
//! semantics - registering a new canvas for a container displaces the
//! previous binding.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::manager::GridStore;
use crate::types::RectangleSnapshot;

/// Cloneable façade over one canvas's rectangle store.
#[derive(Clone)]
pub struct GridHandle {
    container_id: String,
    store: Arc<Mutex<GridStore>>,
}

impl std::fmt::Debug for GridHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridHandle")
            .field("container_id", &self.container_id)
            .finish_non_exhaustive()
    }
}

impl PartialEq for GridHandle {
    fn eq(&self, other: &Self) -> bool {
        self.container_id == other.container_id && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl GridHandle {
    pub(crate) fn new(container_id: &str, store: Arc<Mutex<GridStore>>) -> Self {
        Self {
            container_id: container_id.to_string(),
            store,
        }
    }

    /// Container this handle is bound to.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Ordered snapshot of the committed rectangles.
    pub fn rectangles(&self) -> Vec<RectangleSnapshot> {
        self.store.lock().snapshots()
    }

    /// Committed rectangles as a JSON string, for hosts that hand the grid
    /// data straight to another system.
    pub fn rectangles_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.rectangles())
    }

    pub fn rectangle_count(&self) -> usize {
        self.store.lock().rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().rectangles.is_empty()
    }

    /// Remove every committed rectangle. The next repaint shows an empty
    /// canvas; the rectangle under construction (if any) is unaffected.
    pub fn clear(&self) {
        self.store.lock().clear();
        debug!(container_id = %self.container_id, "cleared rectangles");
    }
}

/// Host-owned map from container id to the live [`GridHandle`].
///
/// Exactly one binding per container: mounting a new canvas for the same
/// container replaces the previous handle, which is returned to the caller.
#[derive(Default)]
pub struct GridRegistry {
    bindings: Mutex<HashMap<String, GridHandle>>,
}

impl GridRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handle under its container id, displacing any previous
    /// binding for that container.
    pub fn bind(&self, handle: GridHandle) -> Option<GridHandle> {
        self.bindings
            .lock()
            .insert(handle.container_id().to_string(), handle)
    }

    /// Current handle for a container, if one is bound.
    pub fn handle(&self, container_id: &str) -> Option<GridHandle> {
        self.bindings.lock().get(container_id).cloned()
    }

    /// Remove and return a container's binding.
    pub fn unbind(&self, container_id: &str) -> Option<GridHandle> {
        self.bindings.lock().remove(container_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.lock().is_empty()
    }
}
