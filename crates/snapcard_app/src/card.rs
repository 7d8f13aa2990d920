//! Draggable card widget
//!
//! A card accumulates drag deltas into a running offset while the pointer
//! is down. On release the offset is expanded into per-axis snap-back
//! queues; each tick pops one value per axis until the card rests at (0,0).

use snapcard_animation::{SnapBack, SnapId, SnapScheduler};
use snapcard_core::events::{event_types, Event, EventData};
use snapcard_core::geometry::{Offset, Rect};

/// Card interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// Resting at its layout position
    #[default]
    Idle,
    /// Pointer down, accumulating drag deltas
    Dragging,
    /// Released, draining snap-back queues one value per frame
    SnappingBack,
}

impl CardState {
    /// Check if the card is being actively dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self, CardState::Dragging)
    }

    /// Check if the card is animating back to rest
    pub fn is_snapping_back(&self) -> bool {
        matches!(self, CardState::SnappingBack)
    }
}

/// A draggable card widget
pub struct DraggableCard {
    widget_id: u64,
    state: CardState,
    offset: Offset,
    snap: Option<SnapId>,
    rest_bounds: Rect,
}

impl DraggableCard {
    pub fn new(widget_id: u64, rest_bounds: Rect) -> Self {
        Self {
            widget_id,
            state: CardState::Idle,
            offset: Offset::ZERO,
            snap: None,
            rest_bounds,
        }
    }

    pub fn widget_id(&self) -> u64 {
        self.widget_id
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Current displacement from the rest position
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Layout bounds when the card is at rest
    pub fn rest_bounds(&self) -> Rect {
        self.rest_bounds
    }

    /// Current on-screen bounds (rest bounds shifted by the offset)
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.rest_bounds.x + self.offset.x,
            self.rest_bounds.y + self.offset.y,
            self.rest_bounds.width,
            self.rest_bounds.height,
        )
    }

    /// Check if the card is idle at exactly (0,0)
    pub fn is_at_rest(&self) -> bool {
        self.state == CardState::Idle && self.offset.is_zero()
    }

    /// Handle a host-toolkit event addressed to this card.
    pub fn handle_event(
        &mut self,
        event: &Event,
        scheduler: &mut SnapScheduler,
        step_fraction: f32,
    ) {
        match event.event_type {
            event_types::DRAG => {
                if let EventData::Drag { delta_x, delta_y } = event.data {
                    self.on_drag(Offset::new(delta_x, delta_y), scheduler);
                }
            }
            event_types::DRAG_END => self.on_drag_end(scheduler, step_fraction),
            _ => {}
        }
    }

    /// Accumulate a drag delta. A drag that lands while the card is still
    /// snapping back cancels the pending queues; the gesture wins.
    pub fn on_drag(&mut self, delta: Offset, scheduler: &mut SnapScheduler) {
        if let Some(id) = self.snap.take() {
            scheduler.remove(id);
        }
        self.offset += delta;
        self.state = CardState::Dragging;
    }

    /// Release the drag: expand the rounded offset into snap-back queues.
    pub fn on_drag_end(&mut self, scheduler: &mut SnapScheduler, step_fraction: f32) {
        let snap = SnapBack::from_offset(self.offset, step_fraction);
        tracing::debug!(
            widget_id = self.widget_id,
            offset_x = self.offset.x,
            offset_y = self.offset.y,
            pending = ?snap.pending(),
            "drag released"
        );
        self.snap = Some(scheduler.add(snap));
        self.state = CardState::SnappingBack;
    }

    /// Advance one redraw frame. Each axis pops a queued value only while
    /// its displayed offset is non-zero, matching the per-axis drain rule.
    /// Returns true if the displayed offset changed.
    pub fn tick(&mut self, scheduler: &mut SnapScheduler) -> bool {
        let Some(id) = self.snap else {
            return false;
        };
        let Some(snap) = scheduler.get_mut(id) else {
            self.snap = None;
            self.state = CardState::Idle;
            return false;
        };

        let before = self.offset;
        if self.offset.x != 0.0 {
            if let Some(x) = snap.pop_x() {
                self.offset.x = x as f32;
            }
        }
        if self.offset.y != 0.0 {
            if let Some(y) = snap.pop_y() {
                self.offset.y = y as f32;
            }
        }

        // Leftover trailing zeros are discarded with the queues once both
        // axes are back at rest.
        if snap.is_drained() || self.offset.is_zero() {
            scheduler.remove(id);
            self.snap = None;
            self.state = CardState::Idle;
        }

        self.offset != before
    }

    /// Drop any pending snap-back, e.g. when the card leaves the screen.
    pub fn discard(&mut self, scheduler: &mut SnapScheduler) {
        if let Some(id) = self.snap.take() {
            scheduler.remove(id);
        }
    }
}
