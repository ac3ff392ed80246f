// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod actor_io;
pub use actor_io::{ActorRef, Mailbox};

pub mod config;
pub use config::ComputationConfig;

pub mod error;
pub use error::{PiError, Result};

pub mod listener;
pub use listener::{Listener, Reporter};

pub mod messages;
pub use messages::{CompletionNotice, Message, ResultUnit, WorkUnit};

pub mod router;
pub use router::RoundRobinRouter;

pub mod series;

pub mod shutdown_signal;
pub use shutdown_signal::ShutdownSignal;

pub mod supervisor;
pub use supervisor::{Outcome, Supervisor, SupervisorState};

pub mod worker;
pub use worker::Worker;

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;

#[cfg(test)]
mod test_support;
