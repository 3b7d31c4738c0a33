//! Document-level pointer grab registry.
//!
//! While a select menu's panel is open, it must observe pointer presses that
//! land *outside* its own regions so it can dismiss itself. Rather than each
//! widget wiring its own global hook, the host owns one
//! [`PointerGrabRegistry`] and routes every pointer press through the open
//! widgets; the registry tracks which widgets currently want those presses.
//!
//! A grab is an RAII [`PointerGrab`] handle: acquiring registers the
//! grabber, dropping the handle unregisters it. The select menu holds its
//! grab for exactly the open lifetime of the panel, so the registry is empty
//! whenever no menu is open and the host can skip outside-press routing
//! entirely.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifier for an active pointer grab.
    pub struct GrabId;
}

#[derive(Debug)]
struct GrabEntry {
    /// Diagnostic label naming the grabber, used only in logs.
    label: String,
}

#[derive(Debug, Default)]
struct RegistryInner {
    grabs: SlotMap<GrabId, GrabEntry>,
}

/// Shared registry of active pointer grabs.
///
/// Cheap to clone; all clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct PointerGrabRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl PointerGrabRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grab and return its RAII handle.
    ///
    /// The grab stays active until the handle is dropped.
    pub fn acquire(&self, label: impl Into<String>) -> PointerGrab {
        let label = label.into();
        let id = self.inner.lock().grabs.insert(GrabEntry {
            label: label.clone(),
        });
        tracing::trace!(target: "dropkit::grab", %label, ?id, "pointer grab acquired");
        PointerGrab {
            registry: self.clone(),
            id,
        }
    }

    /// Check whether any grab is active.
    ///
    /// Hosts use this to decide whether outside pointer presses need to be
    /// routed to open widgets at all.
    pub fn has_active_grab(&self) -> bool {
        !self.inner.lock().grabs.is_empty()
    }

    /// Number of active grabs.
    pub fn active_grab_count(&self) -> usize {
        self.inner.lock().grabs.len()
    }

    fn release(&self, id: GrabId) {
        let mut inner = self.inner.lock();
        if let Some(entry) = inner.grabs.remove(id) {
            tracing::trace!(target: "dropkit::grab", label = %entry.label, ?id, "pointer grab released");
        }
    }
}

/// RAII handle for an active pointer grab.
///
/// Dropping the handle releases the grab.
#[derive(Debug)]
pub struct PointerGrab {
    registry: PointerGrabRegistry,
    id: GrabId,
}

impl PointerGrab {
    /// The grab's identifier within its registry.
    pub fn id(&self) -> GrabId {
        self.id
    }
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_empty() {
        let registry = PointerGrabRegistry::new();
        assert!(!registry.has_active_grab());
        assert_eq!(registry.active_grab_count(), 0);
    }

    #[test]
    fn dropping_the_handle_releases_the_grab() {
        let registry = PointerGrabRegistry::new();
        let grab = registry.acquire("menu");
        assert!(registry.has_active_grab());
        drop(grab);
        assert!(!registry.has_active_grab());
    }

    #[test]
    fn clones_share_state() {
        let registry = PointerGrabRegistry::new();
        let clone = registry.clone();
        let _grab = registry.acquire("menu");
        assert!(clone.has_active_grab());
    }

    #[test]
    fn multiple_grabs_are_counted_independently() {
        let registry = PointerGrabRegistry::new();
        let first = registry.acquire("menu-a");
        let second = registry.acquire("menu-b");
        assert_eq!(registry.active_grab_count(), 2);
        drop(first);
        assert_eq!(registry.active_grab_count(), 1);
        drop(second);
        assert!(!registry.has_active_grab());
    }
}
