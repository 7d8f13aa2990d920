//! Snap-back sequence generation
//!
//! When a card is released, each axis of its offset is expanded into an
//! ordered progression of intermediate offsets ending at 0. The widget
//! consumes one value per axis per frame until both queues are drained,
//! at which point it rests at (0,0).

use smallvec::SmallVec;
use snapcard_core::Offset;
use std::collections::VecDeque;

/// Fraction of the release offset used to size each animation step
pub const DEFAULT_STEP_FRACTION: f32 = 0.1;

/// Inline capacity covers the whole progression for the default fraction
pub type SnapRange = SmallVec<[i32; 12]>;

/// Expand a release offset into the progression of offsets back to zero.
///
/// The step is `round(|value * step_percentage|) + 1`; the `+ 1` keeps the
/// progression moving even when the fraction rounds to nothing. Positive
/// offsets walk down to 0, non-positive offsets walk up, and a final 0 is
/// appended unconditionally so the widget always lands exactly at rest.
pub fn range_from_offset_to_zero(value: i32, step_percentage: f32) -> SnapRange {
    // Add 1, because the progression step has to be positive
    let step = (value as f32 * step_percentage).abs().round() as i32 + 1;

    let mut range = SnapRange::new();
    let mut current = value;
    if value > 0 {
        while current >= 0 {
            range.push(current);
            current -= step;
        }
    } else {
        while current <= 0 {
            range.push(current);
            current += step;
        }
    }
    // Add 0, so the widget returns to its start position
    range.push(0);
    range
}

/// Expand a release offset using [`DEFAULT_STEP_FRACTION`].
pub fn snap_back_range(value: i32) -> SnapRange {
    range_from_offset_to_zero(value, DEFAULT_STEP_FRACTION)
}

/// Pending snap-back offsets for one widget, one queue per axis.
///
/// Queues are owned by the widget that released the drag and are discarded
/// with it. Once both queues are drained the widget's displayed offset
/// is (0,0).
#[derive(Clone, Debug, Default)]
pub struct SnapBack {
    x: VecDeque<i32>,
    y: VecDeque<i32>,
}

impl SnapBack {
    /// Build queues for a release at whole-pixel offset `(x, y)`.
    pub fn from_release(x: i32, y: i32, step_percentage: f32) -> Self {
        Self {
            x: range_from_offset_to_zero(x, step_percentage)
                .into_iter()
                .collect(),
            y: range_from_offset_to_zero(y, step_percentage)
                .into_iter()
                .collect(),
        }
    }

    /// Build queues for a release at a fractional offset, rounding each
    /// axis to whole pixels first.
    pub fn from_offset(offset: Offset, step_percentage: f32) -> Self {
        let (x, y) = offset.round_to_int();
        Self::from_release(x, y, step_percentage)
    }

    /// Pop the next horizontal offset, if any remain.
    pub fn pop_x(&mut self) -> Option<i32> {
        self.x.pop_front()
    }

    /// Pop the next vertical offset, if any remain.
    pub fn pop_y(&mut self) -> Option<i32> {
        self.y.pop_front()
    }

    /// Check whether both queues are empty.
    pub fn is_drained(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// Remaining queued values per axis.
    pub fn pending(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }
}
