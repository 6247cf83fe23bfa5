//! Random, non-overlapping fleet placement by rejection sampling.

use log::{debug, error, trace};
use rand::Rng;

use crate::board::{Board, Coordinate, Placement};
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipKind};

/// Places every catalog ship on a board at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacer {
    max_attempts: usize,
}

impl Default for ShipPlacer {
    fn default() -> Self {
        Self::new(MAX_PLACEMENT_ATTEMPTS)
    }
}

impl ShipPlacer {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Draw one candidate run for `kind` without looking at the board.
    ///
    /// The start along the ship's axis is drawn from `[0, BOARD_SIZE - len)`
    /// and the cross-axis from `[0, BOARD_SIZE)`.
    pub fn candidate<R: Rng>(rng: &mut R, kind: ShipKind) -> Placement {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let along = rng.random_range(0..BOARD_SIZE - kind.length());
        let across = rng.random_range(0..BOARD_SIZE);
        let origin = match orientation {
            Orientation::Horizontal => Coordinate::new(along, across),
            Orientation::Vertical => Coordinate::new(across, along),
        };
        Placement::new(kind, origin, orientation)
    }

    /// Returns a random run for `kind` that does not touch any ship already
    /// on `board`. Every collision discards the candidate and draws afresh.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        board: &Board,
        kind: ShipKind,
    ) -> Result<Placement, BoardError> {
        for attempt in 1..=self.max_attempts {
            let candidate = Self::candidate(rng, kind);
            if !board.collides(&candidate)? {
                debug!(
                    "placed {} at {} {:?} after {} attempt(s)",
                    kind, candidate.origin, candidate.orientation, attempt
                );
                return Ok(candidate);
            }
            trace!("{} collides at {}, resampling", kind, candidate.origin);
        }
        error!("gave up placing {} after {} attempts", kind, self.max_attempts);
        Err(BoardError::PlacementInfeasible {
            kind,
            attempts: self.max_attempts,
        })
    }

    /// Place every ship of the catalog, in catalog order.
    pub fn place_all<R: Rng>(&self, rng: &mut R, board: &mut Board) -> Result<(), BoardError> {
        for kind in ShipKind::ALL {
            let placement = self.random_placement(rng, board, kind)?;
            board.place(placement)?;
        }
        Ok(())
    }
}
