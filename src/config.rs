use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 16;
pub const NUM_SHIPS: usize = 6;
pub const SHIPS: [ShipKind; NUM_SHIPS] = ShipKind::ALL;

/// Shots requested at the start of every turn.
pub const SHOTS_PER_TURN: usize = 5;
pub const MAX_TURNS: usize = 6;

/// Candidate draws allowed per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 4096;

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 3 + 2;

/// Score for sinking every ship without a single miss.
pub const MAX_SCORE: i32 = 20 + 12 + 6 + 6 + 6 + 2;

/// Tunables for one session. `Default` is the standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_turns: usize,
    pub shots_per_turn: usize,
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: MAX_TURNS,
            shots_per_turn: SHOTS_PER_TURN,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}
