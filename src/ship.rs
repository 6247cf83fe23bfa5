//! Ship catalog: the six kinds in the fleet with their fixed length and
//! point value, plus the per-kind hit ledger.

use core::fmt;

use crate::config::NUM_SHIPS;

/// Orientation of a ship on the board.
///
/// A horizontal ship runs along `x`, a vertical one along `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Every kind of ship in the fleet. Catalog order is placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    AircraftCarrier,
    Battleship,
    Submarine,
    Destroyer,
    Cruiser,
    PatrolBoat,
}

impl ShipKind {
    /// The full catalog in placement order.
    pub const ALL: [ShipKind; NUM_SHIPS] = [
        ShipKind::AircraftCarrier,
        ShipKind::Battleship,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Cruiser,
        ShipKind::PatrolBoat,
    ];

    /// Number of squares the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine | ShipKind::Destroyer | ShipKind::Cruiser => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Points awarded once, when the ship is sunk.
    pub const fn points(self) -> i32 {
        match self {
            ShipKind::AircraftCarrier => 20,
            ShipKind::Battleship => 12,
            ShipKind::Submarine | ShipKind::Destroyer | ShipKind::Cruiser => 6,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Position in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "aircraft carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Cruiser => "cruiser",
            ShipKind::PatrolBoat => "patrol boat",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hits landed on each ship kind. A kind is sunk when its count reaches
/// the kind's length; counts never exceed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitLedger {
    hits: [usize; NUM_SHIPS],
}

impl HitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self, kind: ShipKind) -> usize {
        self.hits[kind.index()]
    }

    /// Record one more hit on `kind` and return the new count.
    /// Saturates at the kind's length.
    pub fn record_hit(&mut self, kind: ShipKind) -> usize {
        let slot = &mut self.hits[kind.index()];
        if *slot < kind.length() {
            *slot += 1;
        }
        *slot
    }

    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        self.hits(kind) == kind.length()
    }

    pub fn all_sunk(&self) -> bool {
        ShipKind::ALL.iter().all(|&k| self.is_sunk(k))
    }

    /// Kinds sunk so far, in catalog order.
    pub fn sunk(&self) -> impl Iterator<Item = ShipKind> + '_ {
        ShipKind::ALL.into_iter().filter(move |&k| self.is_sunk(k))
    }
}
