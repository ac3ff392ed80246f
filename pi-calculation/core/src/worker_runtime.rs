// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trait for abstracting the execution context of an actor (tasks, threads)
pub trait WorkerRuntime: Send + 'static {
    type Handle: Send;
    type Error: std::fmt::Display + Send;

    /// Spawn an actor loop under a name used in logs and join errors
    fn spawn<F, Fut>(name: &str, f: F) -> Self::Handle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static;

    /// Wait for the actor loop to finish
    fn join(handle: Self::Handle)
        -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}
