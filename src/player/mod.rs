//! Shot sources: everything that can supply coordinates to the turn engine.
//!
//! - `ScriptedSource`: pre-recorded coordinates, for tests and replays
//! - `RandomShooter`: seeded random fire, used by the simulator
//! - `CliSource`: interactive prompts over any reader/writer pair

use alloc::vec::Vec;

use crate::board::Coordinate;
use crate::common::InputError;

/// Supplier of shot coordinates.
///
/// The turn engine asks for an exact number of coordinates per call and
/// blocks until the batch arrives. A source either returns that many
/// well-formed pairs or a fatal [`InputError`]; bounds are not its concern.
pub trait ShotSource {
    fn next_batch(&mut self, count: usize) -> Result<Vec<Coordinate>, InputError>;
}

impl<S: ShotSource + ?Sized> ShotSource for &mut S {
    fn next_batch(&mut self, count: usize) -> Result<Vec<Coordinate>, InputError> {
        (**self).next_batch(count)
    }
}

pub mod ai;
pub use ai::RandomShooter;

pub mod scripted;
pub use scripted::ScriptedSource;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliSource;
