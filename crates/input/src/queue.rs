//! Per-frame input buffer.
//!
//! Key presses arrive whenever the terminal delivers them; the game applies
//! them all at the start of the next tick. The buffer is fixed-size so the
//! hot loop never allocates. Presses beyond capacity within one tick are
//! dropped.

use arrayvec::ArrayVec;
use log::warn;

use crate::types::GameAction;

/// Maximum number of actions buffered between two ticks
pub const INPUT_QUEUE_CAPACITY: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<GameAction, INPUT_QUEUE_CAPACITY>,
    dropped: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer an action. Returns false if the queue was full.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.pending.try_push(action).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
            warn!("input queue full, dropping {:?}", action);
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total actions dropped because the queue was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Take every pending action, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = GameAction> + '_ {
        self.pending.drain(..)
    }
}
