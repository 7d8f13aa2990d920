//! Scenario runner that executes scripted steps against a card board.

use crate::board::CardBoard;
use crate::headless::{HeadlessRunConfig, HeadlessRuntime};
use crate::scenario::{Scenario, ScenarioStep};
use anyhow::Result;

/// Summary of a finished scenario run.
#[derive(Debug, Clone)]
pub struct BoardReport {
    /// Step kind that failed, if any
    pub failed_step: Option<String>,
    /// Index of the failing step within the scenario
    pub failed_index: Option<usize>,
    /// Failure message, if any
    pub message: Option<String>,
    /// Frames executed across the whole run
    pub elapsed_frames: u64,
    /// Logical milliseconds advanced across the whole run
    pub elapsed_ms: u64,
}

impl BoardReport {
    fn passed(elapsed_frames: u64, elapsed_ms: u64) -> Self {
        Self {
            failed_step: None,
            failed_index: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
        }
    }

    fn failed(
        step: &str,
        index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            failed_step: Some(step.to_string()),
            failed_index: Some(index),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
        }
    }
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: BoardReport },
    Failed { report: BoardReport },
}

impl RunOutcome {
    pub fn report(&self) -> &BoardReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a board.
pub fn run_scenario_str(
    board: &mut CardBoard,
    input: &str,
    cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let scenario = Scenario::from_json(input)?;
    run_scenario(board, &scenario, cfg)
}

/// Execute a pre-loaded scenario against a board.
pub fn run_scenario(
    board: &mut CardBoard,
    scenario: &Scenario,
    cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let mut elapsed_frames: u64 = 0;
    let mut elapsed_ms: u64 = 0;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Drag { card, dx, dy } => {
                if let Err(err) = board.drag(*card, *dx, *dy) {
                    let report = BoardReport::failed(
                        "drag",
                        step_index,
                        err.to_string(),
                        elapsed_frames,
                        elapsed_ms,
                    );
                    return Ok(RunOutcome::Failed { report });
                }
            }
            ScenarioStep::Release { card } => {
                if let Err(err) = board.release(*card) {
                    let report = BoardReport::failed(
                        "release",
                        step_index,
                        err.to_string(),
                        elapsed_frames,
                        elapsed_ms,
                    );
                    return Ok(RunOutcome::Failed { report });
                }
            }
            ScenarioStep::Tick { frames } => {
                run_frames(board, cfg, *frames, &mut elapsed_frames, &mut elapsed_ms)?;
            }
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, cfg.tick_ms);
                run_frames(board, cfg, frames, &mut elapsed_frames, &mut elapsed_ms)?;
            }
            ScenarioStep::AssertAtRest { card } => {
                let at_rest = board.card_at(*card).map(|c| c.is_at_rest());
                match at_rest {
                    Some(true) => {}
                    Some(false) => {
                        let offset = board.card_at(*card).map(|c| c.offset());
                        let report = BoardReport::failed(
                            "assert_at_rest",
                            step_index,
                            format!("card {card} not at rest, offset {offset:?}"),
                            elapsed_frames,
                            elapsed_ms,
                        );
                        return Ok(RunOutcome::Failed { report });
                    }
                    None => {
                        let report = BoardReport::failed(
                            "assert_at_rest",
                            step_index,
                            format!("no card at index {card}"),
                            elapsed_frames,
                            elapsed_ms,
                        );
                        return Ok(RunOutcome::Failed { report });
                    }
                }
            }
            ScenarioStep::AssertOffset { card, x, y } => {
                let actual = board.card_at(*card).map(|c| c.offset().round_to_int());
                if actual != Some((*x, *y)) {
                    let report = BoardReport::failed(
                        "assert_offset",
                        step_index,
                        format!("card {card}: expected ({x}, {y}), got {actual:?}"),
                        elapsed_frames,
                        elapsed_ms,
                    );
                    return Ok(RunOutcome::Failed { report });
                }
            }
        }
    }

    Ok(RunOutcome::Passed {
        report: BoardReport::passed(elapsed_frames, elapsed_ms),
    })
}

fn run_frames(
    board: &mut CardBoard,
    cfg: HeadlessRunConfig,
    frames: u32,
    elapsed_frames: &mut u64,
    elapsed_ms: &mut u64,
) -> Result<()> {
    if frames == 0 {
        return Ok(());
    }

    let mut run_cfg = cfg;
    run_cfg.max_frames = frames;
    HeadlessRuntime::run(run_cfg, |_ctx| {
        board.tick();
        *elapsed_frames = (*elapsed_frames).saturating_add(1);
        *elapsed_ms = (*elapsed_ms).saturating_add(cfg.tick_ms);
    })?;
    Ok(())
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
