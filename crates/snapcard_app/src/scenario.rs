//! Scenario definition for headless demo runs.
//!
//! Scenarios script the host-toolkit side of the demo: drags, releases,
//! frame ticks, and assertions about where cards ended up. Card indices
//! are stable insertion-order indices (0..=3 on the demo board).

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Sequence of scripted steps against a card board.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// A single scripted step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Apply a drag delta to a card
    Drag { card: usize, dx: f32, dy: f32 },
    /// Release a card, starting its snap-back
    Release { card: usize },
    /// Advance a fixed number of redraw frames
    Tick { frames: u32 },
    /// Advance logical time, converted to frames at the configured tick rate
    Wait { ms: u64 },
    /// Assert the card is idle at (0,0)
    AssertAtRest { card: usize },
    /// Assert the card's current whole-pixel offset
    AssertOffset { card: usize, x: i32, y: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_json() {
        let scenario = Scenario::from_json(
            r#"{
                "steps": [
                    { "type": "drag", "card": 0, "dx": 50.0, "dy": -10.0 },
                    { "type": "release", "card": 0 },
                    { "type": "tick", "frames": 12 },
                    { "type": "wait", "ms": 160 },
                    { "type": "assert_offset", "card": 0, "x": 0, "y": 0 },
                    { "type": "assert_at_rest", "card": 0 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.steps.len(), 6);
        assert!(matches!(
            scenario.steps[0],
            ScenarioStep::Drag { card: 0, dx, dy } if dx == 50.0 && dy == -10.0
        ));
        assert!(matches!(scenario.steps[3], ScenarioStep::Wait { ms: 160 }));
    }

    #[test]
    fn test_rejects_unknown_step() {
        let result = Scenario::from_json(r#"{ "steps": [ { "type": "swipe" } ] }"#);
        assert!(result.is_err());
    }
}
