//! One game's mutable state and the shot resolver that mutates it.

use log::warn;
use rand::Rng;

use crate::board::{Board, Coordinate};
use crate::common::{BoardError, ShotOutcome};
use crate::placement::ShipPlacer;
use crate::ship::{HitLedger, ShipKind};

/// Board, hit ledger and score for a single session.
///
/// Only [`GameSession::resolve`] changes the ledger and score once the
/// fleet is on the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    ledger: HitLedger,
    score: i32,
}

impl GameSession {
    /// A session over a board that already carries its ships.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            ledger: HitLedger::new(),
            score: 0,
        }
    }

    /// A session with the full fleet placed at random.
    pub fn random<R: Rng>(placer: &ShipPlacer, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new();
        placer.place_all(rng, &mut board)?;
        Ok(Self::with_board(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> &HitLedger {
        &self.ledger
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        self.ledger.is_sunk(kind)
    }

    pub fn ships_sunk(&self) -> usize {
        self.ledger.sunk().count()
    }

    /// `true` once every kind in the catalog has been sunk.
    pub fn has_won(&self) -> bool {
        self.ledger.all_sunk()
    }

    /// Fire one shot at `(x, y)` and classify it.
    ///
    /// `OutOfBounds` and `AlreadyShot` leave every piece of state untouched.
    /// A miss costs one point; the hit that completes a ship awards its points.
    pub fn resolve(&mut self, x: usize, y: usize) -> ShotOutcome {
        let square = match self.board.square_mut(x, y) {
            Ok(square) => square,
            Err(_) => {
                warn!("shot at ({}, {}) is off the board", x, y);
                return ShotOutcome::OutOfBounds;
            }
        };
        if square.been_hit {
            warn!("square ({}, {}) was already shot", x, y);
            return ShotOutcome::AlreadyShot;
        }
        square.been_hit = true;

        match square.ship_kind {
            None => {
                self.score -= 1;
                ShotOutcome::Miss
            }
            Some(kind) => {
                let before = self.ledger.hits(kind);
                let hits = self.ledger.record_hit(kind);
                if hits == kind.length() && before < hits {
                    self.score += kind.points();
                    ShotOutcome::Sunk(kind)
                } else {
                    ShotOutcome::Hit(kind)
                }
            }
        }
    }

    /// [`GameSession::resolve`] for a [`Coordinate`].
    pub fn fire(&mut self, at: Coordinate) -> ShotOutcome {
        self.resolve(at.x, at.y)
    }
}
