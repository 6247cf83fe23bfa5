#![cfg(feature = "std")]

use std::io::{self, Write};

use log::warn;

use crate::board::{render_board, Board, Coordinate};
use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::report::{GameOutcome, GameReport, Reporter, TurnSummary};

/// Print a board snapshot with axis labels.
pub fn write_board<W: Write>(out: &mut W, board: &Board, reveal: bool) -> io::Result<()> {
    write!(out, "    ")?;
    for x in 0..BOARD_SIZE {
        write!(out, "{:x} ", x)?;
    }
    writeln!(out)?;
    for (y, row) in render_board(board, reveal).lines().enumerate() {
        writeln!(out, " {:x}  {}", y, row)?;
    }
    if reveal {
        writeln!(out, "    Legend: X=Shot  S=Ship  .=Water")
    } else {
        writeln!(out, "    Legend: X=Shot  .=Unknown")
    }
}

/// Narrates the game on a terminal and prints the board before each turn.
/// With `reveal` set, intact ship squares are shown too.
///
/// The first write error is kept and later writes are skipped; check
/// [`ConsoleReporter::take_error`] once the game is over.
pub struct ConsoleReporter<W> {
    out: W,
    reveal: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, reveal: bool) -> Self {
        Self {
            out,
            reveal,
            error: None,
        }
    }

    /// The first write error seen, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<F>(&mut self, write: F)
    where
        F: FnOnce(&mut W, bool) -> io::Result<()>,
    {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = write(&mut self.out, self.reveal) {
            warn!("console output failed: {}", e);
            self.error = Some(e);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_turn_start(&mut self, turn: usize, board: &Board) {
        self.emit(|out, reveal| {
            writeln!(out, "\n=== Turn {} ===", turn)?;
            write_board(out, board, reveal)
        });
    }

    fn on_shot(&mut self, at: Coordinate, outcome: ShotOutcome, _score: i32) {
        self.emit(|out, _| match outcome {
            ShotOutcome::Miss => writeln!(out, "You missed at {}", at),
            ShotOutcome::Hit(_) => writeln!(out, "You hit a ship at location {}!", at),
            ShotOutcome::Sunk(kind) => writeln!(
                out,
                "You hit a ship at location {}!\nYou've sunk my {}!",
                at, kind
            ),
            ShotOutcome::AlreadyShot => writeln!(out, "You have already shot at square {}", at),
            ShotOutcome::OutOfBounds => writeln!(
                out,
                "You cannot shoot at location {}: it is off the board",
                at
            ),
        });
    }

    fn on_turn_complete(&mut self, summary: &TurnSummary, score: i32) {
        self.emit(|out, _| writeln!(out, "After turn {}, your score is {}", summary.turn, score));
    }

    fn on_finish(&mut self, report: &GameReport) {
        self.emit(|out, _| {
            match report.outcome {
                GameOutcome::Won => writeln!(out, "You won!")?,
                GameOutcome::Lost => writeln!(out, "Unfortunately, you lost.")?,
            }
            writeln!(out, "Your final score was: {}", report.score)?;
            out.flush()
        });
    }
}
