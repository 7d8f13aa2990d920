//! Snapcard Core Primitives
//!
//! This crate provides the foundational primitives for the snapcard demo:
//!
//! - **Event Dispatch**: pointer/drag events delivered by the host toolkit
//! - **Geometry**: offsets, points, and rects for widget positioning
//!
//! # Example
//!
//! ```rust
//! use snapcard_core::events::{event_types, Event, EventData, EventDispatcher};
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register(1, event_types::DRAG, |event| {
//!     if let EventData::Drag { delta_x, delta_y } = event.data {
//!         println!("dragged by ({delta_x}, {delta_y})");
//!     }
//! });
//!
//! let mut event = Event::drag(1, 4.0, -2.0, 0);
//! dispatcher.dispatch(&mut event);
//! ```

pub mod events;
pub mod geometry;

pub use events::{Event, EventData, EventDispatcher, EventType};
pub use geometry::{Offset, Point, Rect, Size};
