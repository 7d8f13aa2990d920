//! Snap-back scheduler
//!
//! Tracks all active snap-backs so the board can tell in one call whether
//! another frame is needed.

use crate::snapback::SnapBack;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct SnapId;
}

/// Registry of active snap-backs, one per widget currently animating
pub struct SnapScheduler {
    snaps: SlotMap<SnapId, SnapBack>,
}

impl SnapScheduler {
    pub fn new() -> Self {
        Self {
            snaps: SlotMap::with_key(),
        }
    }

    /// Register a snap-back, returning the id the widget holds while it
    /// animates.
    pub fn add(&mut self, snap: SnapBack) -> SnapId {
        let id = self.snaps.insert(snap);
        tracing::debug!(?id, "snap-back registered");
        id
    }

    pub fn get(&self, id: SnapId) -> Option<&SnapBack> {
        self.snaps.get(id)
    }

    pub fn get_mut(&mut self, id: SnapId) -> Option<&mut SnapBack> {
        self.snaps.get_mut(id)
    }

    /// Deregister a snap-back (on settle, cancel, or widget removal).
    pub fn remove(&mut self, id: SnapId) -> Option<SnapBack> {
        self.snaps.remove(id)
    }

    /// Check if any snap-back still has queued values
    pub fn has_active(&self) -> bool {
        self.snaps.iter().any(|(_, s)| !s.is_drained())
    }

    /// Number of registered snap-backs
    pub fn active_count(&self) -> usize {
        self.snaps.len()
    }
}

impl Default for SnapScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapback::DEFAULT_STEP_FRACTION;

    #[test]
    fn test_add_and_remove() {
        let mut scheduler = SnapScheduler::new();
        assert!(!scheduler.has_active());

        let id = scheduler.add(SnapBack::from_release(50, -10, DEFAULT_STEP_FRACTION));
        assert_eq!(scheduler.active_count(), 1);
        assert!(scheduler.has_active());

        let snap = scheduler.remove(id).unwrap();
        assert!(!snap.is_drained());
        assert_eq!(scheduler.active_count(), 0);
        assert!(scheduler.get(id).is_none());
    }

    #[test]
    fn test_drained_snap_is_not_active() {
        let mut scheduler = SnapScheduler::new();
        let id = scheduler.add(SnapBack::from_release(0, 0, DEFAULT_STEP_FRACTION));

        let snap = scheduler.get_mut(id).unwrap();
        while snap.pop_x().is_some() {}
        while snap.pop_y().is_some() {}

        assert_eq!(scheduler.active_count(), 1);
        assert!(!scheduler.has_active());
    }
}
