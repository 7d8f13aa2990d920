//! Snapcard Animation System
//!
//! Snap-back sequences and per-frame scheduling.
//!
//! # Features
//!
//! - **Snap-back sequences**: decreasing offset progressions back to zero
//! - **Per-widget queues**: one pending-offset queue per axis, drained one
//!   value per frame
//! - **Scheduler**: tracks all active snap-backs for the board's tick

pub mod scheduler;
pub mod snapback;

pub use scheduler::{SnapId, SnapScheduler};
pub use snapback::{range_from_offset_to_zero, snap_back_range, SnapBack, DEFAULT_STEP_FRACTION};
