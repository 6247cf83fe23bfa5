use log::{error, info};
use rand::Rng;

use crate::common::GameError;
use crate::config::GameConfig;
use crate::placement::ShipPlacer;
use crate::player::ShotSource;
use crate::report::{GameOutcome, GameReport, Reporter};
use crate::session::GameSession;
use crate::turn::TurnEngine;

/// Runs whole sessions: fleet placement, the bounded turn loop and the
/// terminal win/loss decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameController {
    placer: ShipPlacer,
    turns: TurnEngine,
    max_turns: usize,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            placer: ShipPlacer::new(config.max_placement_attempts),
            turns: TurnEngine::new(config.shots_per_turn),
            max_turns: config.max_turns,
        }
    }

    /// Place a fresh random fleet. Fails with `PlacementInfeasible` when the
    /// placer runs out of attempts.
    pub fn setup<R: Rng>(&self, rng: &mut R) -> Result<GameSession, GameError> {
        GameSession::random(&self.placer, rng).map_err(|e| {
            error!("session setup failed: {}", e);
            GameError::from(e)
        })
    }

    /// Place a fleet and play it to the end.
    pub fn run<R: Rng, S: ShotSource, P: Reporter>(
        &self,
        rng: &mut R,
        source: &mut S,
        reporter: &mut P,
    ) -> Result<GameReport, GameError> {
        let mut session = self.setup(rng)?;
        self.play(&mut session, source, reporter)
    }

    /// Play turns against an already populated session until every ship is
    /// sunk or the turn limit is reached.
    pub fn play<S: ShotSource, P: Reporter>(
        &self,
        session: &mut GameSession,
        source: &mut S,
        reporter: &mut P,
    ) -> Result<GameReport, GameError> {
        let mut turns_played = 0;
        let mut shots_fired = 0;
        let mut invalid_shots = 0;

        for turn in 1..=self.max_turns {
            if session.has_won() {
                break;
            }
            reporter.on_turn_start(turn, session.board());
            let summary = self.turns.play_turn(turn, session, source, reporter)?;
            turns_played = turn;
            shots_fired += summary.valid_shots;
            invalid_shots += summary.invalid_shots;
        }

        let outcome = if session.has_won() {
            GameOutcome::Won
        } else {
            GameOutcome::Lost
        };
        let report = GameReport {
            outcome,
            score: session.score(),
            turns_played,
            shots_fired,
            invalid_shots,
            ships_sunk: session.ships_sunk(),
        };
        info!(
            "session {} with score {} after {} turn(s)",
            report.outcome, report.score, report.turns_played
        );
        reporter.on_finish(&report);
        Ok(report)
    }
}
