//! Common types: shot outcomes and the error kinds of board, input and game.

use alloc::string::String;
use core::fmt;

use crate::ship::ShipKind;

/// Classified result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Open water. Costs one point.
    Miss,
    /// Struck a ship that is still afloat.
    Hit(ShipKind),
    /// Struck the last intact square of a ship. Awards the ship's points.
    Sunk(ShipKind),
    /// Square was resolved by an earlier shot.
    AlreadyShot,
    /// Coordinate lies outside the board.
    OutOfBounds,
}

impl ShotOutcome {
    /// `Miss`, `Hit` and `Sunk` consume a shot; the others must be retried.
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Miss | ShotOutcome::Hit(_) | ShotOutcome::Sunk(_)
        )
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit(kind) => write!(f, "hit {}", kind),
            ShotOutcome::Sunk(kind) => write!(f, "sunk {}", kind),
            ShotOutcome::AlreadyShot => write!(f, "already shot"),
            ShotOutcome::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

/// Errors returned by Board operations and ship placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate is outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Ship run would leave the grid.
    ShipOutOfBounds,
    /// Ship run crosses a square already holding a ship.
    ShipOverlaps,
    /// Kind is already on the board.
    ShipAlreadyPlaced,
    /// Random placement ran out of attempts.
    PlacementInfeasible { kind: ShipKind, attempts: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Location ({}, {}) is off the board", x, y)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::PlacementInfeasible { kind, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                kind, attempts
            ),
        }
    }
}

/// Fatal conditions signalled by a shot source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Source has no more coordinates to give.
    Closed,
    /// Source answered with the wrong number of coordinates.
    BatchSize { requested: usize, received: usize },
    /// Underlying reader or writer failed.
    Io(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "Input source closed"),
            InputError::BatchSize {
                requested,
                received,
            } => write!(
                f,
                "Requested {} coordinates but received {}",
                requested, received
            ),
            InputError::Io(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        use alloc::string::ToString;
        InputError::Io(err.to_string())
    }
}

/// Errors that abort a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Input(InputError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        GameError::Input(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Input(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
