//! Per-tick command collection.
//!
//! The session expects at most one instance of each command per tick. Key
//! events arriving between two ticks are pushed here and the batch is drained
//! into the session on the tick. Duplicates within a tick are dropped, and the
//! first occurrence keeps its position.

use arrayvec::ArrayVec;

use crate::types::Command;

const CAPACITY: usize = Command::ALL.len();

/// Commands observed during one tick, in arrival order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBatch {
    commands: ArrayVec<Command, CAPACITY>,
    seen: u8,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command. Returns false if it was already recorded this tick.
    pub fn push(&mut self, command: Command) -> bool {
        let mask = 1u8 << command.bit();
        if self.seen & mask != 0 {
            return false;
        }
        self.seen |= mask;
        // Capacity equals the number of distinct commands, so this cannot overflow.
        self.commands.push(command);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Take this tick's commands and start an empty batch.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.seen = 0;
        self.commands.drain(..)
    }
}
