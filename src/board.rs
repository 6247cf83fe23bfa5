//! Board model: the 16×16 grid of squares with ship occupancy and hit state.

use alloc::string::String;
use core::fmt;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::ship::{Orientation, ShipKind};

/// A shot or placement coordinate. Both axes are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// `true` when the coordinate addresses a square on the board.
    pub const fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One grid square. `been_hit` only ever goes from `false` to `true`.
/// A square holds a ship exactly when `ship_kind` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    pub been_hit: bool,
    pub ship_kind: Option<ShipKind>,
}

impl Square {
    pub const EMPTY: Square = Square {
        been_hit: false,
        ship_kind: None,
    };

    pub const fn ship(kind: ShipKind) -> Self {
        Square {
            been_hit: false,
            ship_kind: Some(kind),
        }
    }

    pub const fn has_ship(&self) -> bool {
        self.ship_kind.is_some()
    }
}

/// A straight run of squares for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: ShipKind,
    pub origin: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(kind: ShipKind, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            kind,
            origin,
            orientation,
        }
    }

    /// Squares covered by the run, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let Coordinate { x, y } = self.origin;
        (0..self.kind.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(x + i, y),
            Orientation::Vertical => Coordinate::new(x, y + i),
        })
    }

    /// `true` when every square of the run lies on the board.
    pub fn fits(&self) -> bool {
        let len = self.kind.length();
        if !self.origin.in_bounds() {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.origin.x + len <= BOARD_SIZE,
            Orientation::Vertical => self.origin.y + len <= BOARD_SIZE,
        }
    }
}

/// The grid. Cells are addressed as `grid[x][y]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Square; BOARD_SIZE]; BOARD_SIZE],
    placements: [Option<Placement>; NUM_SHIPS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships, no shots).
    pub fn new() -> Self {
        Board {
            grid: [[Square::EMPTY; BOARD_SIZE]; BOARD_SIZE],
            placements: [None; NUM_SHIPS],
        }
    }

    fn check_bounds(x: usize, y: usize) -> Result<(), BoardError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Square at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<Square, BoardError> {
        Self::check_bounds(x, y)?;
        Ok(self.grid[x][y])
    }

    /// Mutable access to the square at (x, y).
    pub(crate) fn square_mut(&mut self, x: usize, y: usize) -> Result<&mut Square, BoardError> {
        Self::check_bounds(x, y)?;
        Ok(&mut self.grid[x][y])
    }

    /// Overwrite the square at (x, y).
    pub fn set(&mut self, x: usize, y: usize, square: Square) -> Result<(), BoardError> {
        Self::check_bounds(x, y)?;
        self.grid[x][y] = square;
        Ok(())
    }

    /// `true` if any square of `placement` already holds a ship.
    /// Runs that leave the board are reported as out of bounds.
    pub fn collides(&self, placement: &Placement) -> Result<bool, BoardError> {
        if !placement.fits() {
            return Err(BoardError::ShipOutOfBounds);
        }
        for c in placement.cells() {
            if self.get(c.x, c.y)?.has_ship() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Mark every square of `placement` as holding its ship.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        if self.placements[placement.kind.index()].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if self.collides(&placement)? {
            return Err(BoardError::ShipOverlaps);
        }
        for c in placement.cells() {
            self.set(c.x, c.y, Square::ship(placement.kind))?;
        }
        self.placements[placement.kind.index()] = Some(placement);
        Ok(())
    }

    /// Where `kind` was placed, if it has been.
    pub fn placement(&self, kind: ShipKind) -> Option<Placement> {
        self.placements[kind.index()]
    }

    /// Placed ships in catalog order.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.placements.iter().flatten().copied()
    }

    /// `true` once every kind in the catalog is on the board.
    pub fn fully_placed(&self) -> bool {
        self.placements.iter().all(Option::is_some)
    }

    /// All squares with their coordinates, column by column.
    pub fn squares(&self) -> impl Iterator<Item = (Coordinate, Square)> + '_ {
        self.grid.iter().enumerate().flat_map(|(x, col)| {
            col.iter()
                .enumerate()
                .map(move |(y, sq)| (Coordinate::new(x, y), *sq))
        })
    }

    /// Number of squares occupied by `kind`.
    pub fn count_kind(&self, kind: ShipKind) -> usize {
        self.squares()
            .filter(|(_, sq)| sq.ship_kind == Some(kind))
            .count()
    }

    /// Number of squares holding any ship.
    pub fn ship_cells(&self) -> usize {
        self.squares().filter(|(_, sq)| sq.has_ship()).count()
    }

    /// Number of squares that have been shot at.
    pub fn shots_taken(&self) -> usize {
        self.squares().filter(|(_, sq)| sq.been_hit).count()
    }

    /// Text snapshot of the board; see [`render_board`].
    pub fn render(&self, reveal: bool) -> String {
        render_board(self, reveal)
    }
}

/// Symbol alphabet for board snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Square has been shot at, ship or not.
    Hit,
    /// Intact ship square. Only shown when revealing.
    Ship,
    Blank,
}

impl Symbol {
    pub fn of(square: &Square, reveal: bool) -> Self {
        if square.been_hit {
            Symbol::Hit
        } else if reveal && square.has_ship() {
            Symbol::Ship
        } else {
            Symbol::Blank
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::Hit => 'X',
            Symbol::Ship => 'S',
            Symbol::Blank => '.',
        }
    }
}

/// Render the board one row per `y`, one column per `x`, symbols separated
/// by single spaces and every row terminated by a newline.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1));
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if x > 0 {
                out.push(' ');
            }
            out.push(Symbol::of(&board.grid[x][y], reveal).as_char());
        }
        out.push('\n');
    }
    out
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "  placements: {:?},", self.placements)?;
        writeln!(f, "  shots: {},", self.shots_taken())?;
        write!(f, "{}}}", render_board(self, true))
    }
}
