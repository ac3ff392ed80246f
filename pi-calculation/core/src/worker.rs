// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::actor_io::{ActorRef, Mailbox};
use crate::messages::Message;
use crate::series;
use crate::shutdown_signal::ShutdownSignal;
use log::{debug, warn};

/// Stateless worker that computes partial sums for the work units it receives
pub struct Worker<SD: ShutdownSignal> {
    id: usize,
    shutdown_signal: SD,
}

impl<SD: ShutdownSignal> Worker<SD> {
    pub fn new(id: usize, shutdown_signal: SD) -> Self {
        Self {
            id,
            shutdown_signal,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Handles one message, replying to the sender of a work unit
    /// Returns false if the message was not a work unit
    pub fn handle<R: ActorRef>(&self, message: Message<R>) -> bool {
        match message {
            Message::Work(unit, reply_to) => {
                let result = series::compute(&unit);
                if !reply_to.tell(Message::Result(result)) {
                    warn!(
                        "Worker {} could not return result for unit {}, supervisor gone",
                        self.id, unit.sequence_index
                    );
                }
                true
            }
            other => {
                warn!("Worker {} ignored unhandled {} message", self.id, other.kind());
                false
            }
        }
    }

    /// Processes messages until the mailbox closes or shutdown is requested
    pub async fn run<R: ActorRef, M: Mailbox<R>>(self, mut mailbox: M) {
        debug!("Worker {} started", self.id);
        let shutdown = self.shutdown_signal.cancelled();
        tokio::pin!(shutdown);

        loop {
            let message = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    debug!("Worker {} cancelled", self.id);
                    break;
                }
                message = mailbox.recv() => message,
            };

            match message {
                Some(message) => {
                    self.handle(message);
                }
                None => break,
            }
        }

        debug!("Worker {} stopped", self.id);
    }
}
