use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::board::Coordinate;
use crate::common::InputError;

use super::ShotSource;

/// Replays a fixed list of coordinates in order.
///
/// Every requested batch size is recorded so callers can check how the
/// turn engine drove the source.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Coordinate>,
    requests: Vec<usize>,
}

impl ScriptedSource {
    pub fn new<I, C>(shots: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        Self {
            queue: shots.into_iter().map(Into::into).collect(),
            requests: Vec::new(),
        }
    }

    /// Batch sizes requested so far, oldest first.
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }

    /// Coordinates not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ShotSource for ScriptedSource {
    fn next_batch(&mut self, count: usize) -> Result<Vec<Coordinate>, InputError> {
        self.requests.push(count);
        if self.queue.len() < count {
            return Err(InputError::Closed);
        }
        Ok(self.queue.drain(..count).collect())
    }
}
