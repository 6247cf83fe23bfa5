use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Coordinate;
use crate::common::InputError;
use crate::config::BOARD_SIZE;

use super::ShotSource;

/// Fires at uniformly random squares.
///
/// It keeps no memory of earlier shots, so repeats happen and are sent back
/// through the retry loop like any other invalid shot.
pub struct RandomShooter {
    rng: SmallRng,
}

impl RandomShooter {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl ShotSource for RandomShooter {
    fn next_batch(&mut self, count: usize) -> Result<Vec<Coordinate>, InputError> {
        Ok((0..count)
            .map(|_| {
                Coordinate::new(
                    self.rng.random_range(0..BOARD_SIZE),
                    self.rng.random_range(0..BOARD_SIZE),
                )
            })
            .collect())
    }
}
