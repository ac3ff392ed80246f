// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::actor_io::{ActorRef, Mailbox};
use crate::messages::{CompletionNotice, Message, ResultUnit, WorkUnit};
use crate::router::RoundRobinRouter;
use crate::shutdown_signal::ShutdownSignal;
use log::{debug, info, warn};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    Idle,
    Awaiting,
    Completed,
}

/// What handling a single message did to the supervisor
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Start accepted, this many work units were submitted
    Dispatched(u64),
    /// Result added to the running total
    Accumulated,
    /// Last expected result arrived, notice sent to the listener
    Completed(CompletionNotice),
    /// Message dropped without touching any state
    Unhandled,
}

/// Owns dispatch, aggregation and completion detection for one run
pub struct Supervisor<R: ActorRef> {
    self_ref: R,
    router: RoundRobinRouter<R>,
    listener: R,
    chunk_size: u64,
    expected_result_count: u64,
    received_result_count: u64,
    accumulated_value: f64,
    received: Vec<bool>,
    start_timestamp: Instant,
    state: SupervisorState,
}

impl<R: ActorRef> Supervisor<R> {
    /// `self_ref` is the handle workers reply to
    pub fn new(
        self_ref: R,
        router: RoundRobinRouter<R>,
        listener: R,
        chunk_size: u64,
        number_of_chunks: u64,
    ) -> Self {
        Self {
            self_ref,
            router,
            listener,
            chunk_size,
            expected_result_count: number_of_chunks,
            received_result_count: 0,
            accumulated_value: 0.0,
            received: vec![false; number_of_chunks as usize],
            start_timestamp: Instant::now(),
            state: SupervisorState::Idle,
        }
    }

    pub fn state(&self) -> SupervisorState {
        self.state
    }

    pub fn received_result_count(&self) -> u64 {
        self.received_result_count
    }

    pub fn accumulated_value(&self) -> f64 {
        self.accumulated_value
    }

    pub fn handle(&mut self, message: Message<R>) -> Outcome {
        match (self.state, message) {
            (SupervisorState::Idle, Message::Start) => self.dispatch(),
            (SupervisorState::Awaiting, Message::Result(result)) => self.accumulate(result),
            (state, other) => {
                warn!(
                    "Supervisor ignored unhandled {} message while {:?}",
                    other.kind(),
                    state
                );
                Outcome::Unhandled
            }
        }
    }

    fn dispatch(&mut self) -> Outcome {
        info!(
            "Dispatching {} work units of {} elements to {} workers",
            self.expected_result_count,
            self.chunk_size,
            self.router.pool_size()
        );

        for sequence_index in 0..self.expected_result_count {
            let unit = WorkUnit::new(sequence_index, self.chunk_size);
            self.router.submit(unit, self.self_ref.clone());
        }

        self.state = SupervisorState::Awaiting;
        Outcome::Dispatched(self.expected_result_count)
    }

    fn accumulate(&mut self, result: ResultUnit) -> Outcome {
        let seen = match self.received.get_mut(result.sequence_index as usize) {
            Some(seen) => seen,
            None => {
                warn!(
                    "Supervisor ignored result for unknown unit {}",
                    result.sequence_index
                );
                return Outcome::Unhandled;
            }
        };
        if *seen {
            warn!(
                "Supervisor ignored duplicate result for unit {}",
                result.sequence_index
            );
            return Outcome::Unhandled;
        }
        *seen = true;

        self.received_result_count += 1;
        self.accumulated_value += result.value;

        if self.received_result_count < self.expected_result_count {
            return Outcome::Accumulated;
        }

        let notice = CompletionNotice {
            approximate_value: self.accumulated_value,
            elapsed_time: self.start_timestamp.elapsed(),
        };
        info!(
            "All {} results received after {:?}",
            self.received_result_count, notice.elapsed_time
        );

        if !self.listener.tell(Message::Completion(notice)) {
            warn!("Listener mailbox closed, completion notice dropped");
        }
        self.state = SupervisorState::Completed;
        Outcome::Completed(notice)
    }

    /// Processes messages until completion or shutdown
    /// Returning drops the router, which stops the worker pool
    pub async fn run<M: Mailbox<R>, SD: ShutdownSignal>(
        mut self,
        mut mailbox: M,
        shutdown_signal: SD,
    ) {
        debug!("Supervisor started");
        let shutdown = shutdown_signal.cancelled();
        tokio::pin!(shutdown);

        while self.state != SupervisorState::Completed {
            let message = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(
                        "Supervisor cancelled with {}/{} results",
                        self.received_result_count, self.expected_result_count
                    );
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

        debug!("Supervisor stopped, releasing {} workers", self.router.pool_size());
    }
}
