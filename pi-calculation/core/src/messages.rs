// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Describes one contiguous slice of the series
/// Covers indices `[sequence_index * chunk_size, (sequence_index + 1) * chunk_size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUnit {
    pub sequence_index: u64,
    pub chunk_size: u64,
}

impl WorkUnit {
    pub fn new(sequence_index: u64, chunk_size: u64) -> Self {
        Self {
            sequence_index,
            chunk_size,
        }
    }

    /// First series index covered by this unit
    pub fn first_index(&self) -> u64 {
        self.sequence_index * self.chunk_size
    }

    /// Last series index covered by this unit (inclusive)
    pub fn last_index(&self) -> u64 {
        (self.sequence_index + 1) * self.chunk_size - 1
    }
}

/// Partial sum computed by a worker for one work unit
/// Carries the sequence index of the unit it answers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultUnit {
    pub sequence_index: u64,
    pub value: f64,
}

/// Final aggregated value, sent once to the listener
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub approximate_value: f64,
    pub elapsed_time: Duration,
}

/// Envelope received by every actor
/// `R` is the handle used to reply to the sender of a work unit
#[derive(Debug, Clone)]
pub enum Message<R> {
    /// Start signal for the supervisor
    Start,
    /// Work assignment with the handle the result must be sent to
    Work(WorkUnit, R),
    /// Partial result returned by a worker
    Result(ResultUnit),
    /// Terminal notice for the listener
    Completion(CompletionNotice),
}

impl<R> Message<R> {
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Start => "Start",
            Message::Work(..) => "Work",
            Message::Result(_) => "Result",
            Message::Completion(_) => "Completion",
        }
    }
}
