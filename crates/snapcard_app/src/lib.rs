//! Snapcard demo app
//!
//! Draggable card widgets that snap back to their rest position after
//! release. The host toolkit delivers drag deltas and release events; each
//! redraw frame consumes one queued snap-back offset per axis until the
//! card rests at (0,0) again.
//!
//! The demo runs headless-first: an explicit per-frame tick replaces the
//! host framework's implicit re-render scheduling, which makes the whole
//! flow scriptable from JSON scenarios.

pub mod board;
pub mod card;
pub mod headless;
pub mod runner;
pub mod scenario;

pub use board::{BoardError, CardBoard, CardId};
pub use card::{CardState, DraggableCard};
pub use headless::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use runner::{run_scenario, run_scenario_str, BoardReport, RunOutcome};
pub use scenario::{Scenario, ScenarioStep};
