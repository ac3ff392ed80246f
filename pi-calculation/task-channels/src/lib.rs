// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod channel_reporter;
pub use channel_reporter::ChannelReporter;

pub mod channel_shutdown_signal;
pub use channel_shutdown_signal::ChannelShutdownSignal;

pub mod channel_wrappers;
pub use channel_wrappers::{ChannelActorRef, ChannelMailbox};

pub mod computation;
pub use computation::{run_computation, run_computation_with_shutdown};

pub mod tokio_runtime;
pub use tokio_runtime::{ActorHandle, TokioRuntime};
