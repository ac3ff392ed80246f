// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::debug;
use pi_calculation_core::WorkerRuntime;
use tokio::task::{JoinError, JoinHandle};

/// Tokio task-based runtime, one task per actor
pub struct TokioRuntime;

/// Spawned actor task together with its name
pub struct ActorHandle {
    pub name: String,
    handle: JoinHandle<()>,
}

impl WorkerRuntime for TokioRuntime {
    type Handle = ActorHandle;
    type Error = JoinError;

    fn spawn<F, Fut>(name: &str, f: F) -> Self::Handle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        debug!("Spawning actor {}", name);
        ActorHandle {
            name: name.to_string(),
            handle: tokio::spawn(f()),
        }
    }

    async fn join(actor: Self::Handle) -> Result<(), Self::Error> {
        actor.handle.await?;
        debug!("Actor {} joined", actor.name);
        Ok(())
    }
}
