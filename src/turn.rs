//! The turn engine: one opening batch of shots, then retry batches sized to
//! the previous batch's invalid shots until none are left.

use alloc::vec::Vec;

use log::{debug, info};

use crate::board::Coordinate;
use crate::common::InputError;
use crate::config::SHOTS_PER_TURN;
use crate::player::ShotSource;
use crate::report::{Reporter, TurnSummary};
use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEngine {
    shots_per_turn: usize,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(SHOTS_PER_TURN)
    }
}

/// Result of applying one batch.
struct BatchResult {
    fails: usize,
    won: bool,
}

impl TurnEngine {
    pub fn new(shots_per_turn: usize) -> Self {
        Self { shots_per_turn }
    }

    fn request<S: ShotSource>(source: &mut S, count: usize) -> Result<Vec<Coordinate>, InputError> {
        let batch = source.next_batch(count)?;
        if batch.len() != count {
            return Err(InputError::BatchSize {
                requested: count,
                received: batch.len(),
            });
        }
        Ok(batch)
    }

    /// Fire `batch` in order. Stops at the shot that sinks the last ship.
    fn apply<P: Reporter>(
        session: &mut GameSession,
        batch: &[Coordinate],
        reporter: &mut P,
        summary: &mut TurnSummary,
    ) -> BatchResult {
        let mut fails = 0;
        for &at in batch {
            let outcome = session.fire(at);
            reporter.on_shot(at, outcome, session.score());
            if outcome.is_valid() {
                summary.valid_shots += 1;
            } else {
                summary.invalid_shots += 1;
                fails += 1;
            }
            if session.has_won() {
                return BatchResult { fails, won: true };
            }
        }
        BatchResult { fails, won: false }
    }

    /// Play turn number `turn` (one-based) against `session`.
    ///
    /// Every retry round asks the source for exactly as many coordinates as
    /// the round before produced invalid shots. The turn ends when a round
    /// has no invalid shots or the last ship sinks.
    pub fn play_turn<S: ShotSource, P: Reporter>(
        &self,
        turn: usize,
        session: &mut GameSession,
        source: &mut S,
        reporter: &mut P,
    ) -> Result<TurnSummary, InputError> {
        let mut summary = TurnSummary {
            turn,
            ..TurnSummary::default()
        };

        let opening = Self::request(source, self.shots_per_turn)?;
        let mut result = Self::apply(session, &opening, reporter, &mut summary);

        while !result.won && result.fails > 0 {
            debug!("turn {}: retrying {} invalid shot(s)", turn, result.fails);
            summary.retry_batches.push(result.fails);
            let retry = Self::request(source, result.fails)?;
            result = Self::apply(session, &retry, reporter, &mut summary);
        }
        summary.won = result.won;

        info!(
            "turn {}: {} valid, {} invalid, score {}",
            turn,
            summary.valid_shots,
            summary.invalid_shots,
            session.score()
        );
        reporter.on_turn_complete(&summary, session.score());
        Ok(summary)
    }
}
