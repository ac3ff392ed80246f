// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trait for shutdown signaling shared by every actor of a computation group
pub trait ShutdownSignal: Clone + Send + Sync + 'static {
    fn is_cancelled(&self) -> bool;

    /// Request shutdown of the whole group
    fn cancel(&self);

    /// Resolves once shutdown has been requested
    fn cancelled(&self) -> impl std::future::Future<Output = ()> + Send + 'static;
}
