// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::actor_io::ActorRef;
use crate::error::{PiError, Result};
use crate::messages::{Message, WorkUnit};
use log::warn;

/// Fixed pool of worker mailboxes with cyclic dispatch
/// Dropping the router closes every worker mailbox
pub struct RoundRobinRouter<R: ActorRef> {
    workers: Vec<R>,
    counter: usize,
}

impl<R: ActorRef> RoundRobinRouter<R> {
    pub fn new(workers: Vec<R>) -> Result<Self> {
        if workers.is_empty() {
            return Err(PiError::InvalidConfiguration(
                "router needs at least one worker".to_string(),
            ));
        }
        Ok(Self {
            workers,
            counter: 0,
        })
    }

    pub fn pool_size(&self) -> usize {
        self.workers.len()
    }

    /// Delivers the unit to worker `counter mod N`, regardless of its backlog
    /// Returns the index of the chosen worker
    pub fn submit(&mut self, unit: WorkUnit, reply_to: R) -> usize {
        let index = self.counter % self.workers.len();
        self.counter = self.counter.wrapping_add(1);

        if !self.workers[index].tell(Message::Work(unit, reply_to)) {
            warn!(
                "Worker {} mailbox closed, unit {} dropped",
                index, unit.sequence_index
            );
        }
        index
    }
}
