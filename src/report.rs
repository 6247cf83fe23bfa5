//! Output side of a session: per-shot events, per-turn summaries and the
//! final report.

use alloc::vec::Vec;
use core::fmt;

use log::info;

use crate::board::{Board, Coordinate};
use crate::common::ShotOutcome;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    Won,
    Lost,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won => write!(f, "won"),
            GameOutcome::Lost => write!(f, "lost"),
        }
    }
}

/// What happened during one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    /// One-based turn number.
    pub turn: usize,
    pub valid_shots: usize,
    pub invalid_shots: usize,
    /// Size of every retry batch after the opening one, in order.
    pub retry_batches: Vec<usize>,
    /// The turn ended because the last ship went down.
    pub won: bool,
}

/// Final state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub score: i32,
    pub turns_played: usize,
    /// Shots that landed on the board (misses, hits and sinks).
    pub shots_fired: usize,
    pub invalid_shots: usize,
    pub ships_sunk: usize,
}

/// Receiver of session events. All methods default to doing nothing.
pub trait Reporter {
    /// A turn is about to start. `board` may be used for a snapshot.
    fn on_turn_start(&mut self, _turn: usize, _board: &Board) {}

    /// A shot was resolved; `score` already includes its effect.
    fn on_shot(&mut self, _at: Coordinate, _outcome: ShotOutcome, _score: i32) {}

    fn on_turn_complete(&mut self, _summary: &TurnSummary, _score: i32) {}

    fn on_finish(&mut self, _report: &GameReport) {}
}

impl<P: Reporter + ?Sized> Reporter for &mut P {
    fn on_turn_start(&mut self, turn: usize, board: &Board) {
        (**self).on_turn_start(turn, board)
    }

    fn on_shot(&mut self, at: Coordinate, outcome: ShotOutcome, score: i32) {
        (**self).on_shot(at, outcome, score)
    }

    fn on_turn_complete(&mut self, summary: &TurnSummary, score: i32) {
        (**self).on_turn_complete(summary, score)
    }

    fn on_finish(&mut self, report: &GameReport) {
        (**self).on_finish(report)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Routes events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_shot(&mut self, at: Coordinate, outcome: ShotOutcome, score: i32) {
        info!("shot at {}: {} (score {})", at, outcome, score);
    }

    fn on_finish(&mut self, report: &GameReport) {
        info!(
            "game {} after {} turn(s), final score {}",
            report.outcome, report.turns_played, report.score
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub shots: Vec<(Coordinate, ShotOutcome, i32)>,
    pub turns: Vec<TurnSummary>,
    pub report: Option<GameReport>,
}

impl Reporter for RecordingReporter {
    fn on_shot(&mut self, at: Coordinate, outcome: ShotOutcome, score: i32) {
        self.shots.push((at, outcome, score));
    }

    fn on_turn_complete(&mut self, summary: &TurnSummary, _score: i32) {
        self.turns.push(summary.clone());
    }

    fn on_finish(&mut self, report: &GameReport) {
        self.report = Some(*report);
    }
}
