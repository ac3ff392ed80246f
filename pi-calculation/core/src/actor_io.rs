// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::messages::Message;
use async_trait::async_trait;

/// Handle used to send messages to an actor's mailbox
/// Different implementations for tokio channels, test probes, etc.
pub trait ActorRef: Clone + Send + Sync + Sized + 'static {
    /// Enqueue a message without waiting for it to be processed
    /// Returns true if the message was enqueued, false if the mailbox is closed
    fn tell(&self, message: Message<Self>) -> bool;
}

/// Trait for receiving messages from an actor's mailbox asynchronously
#[async_trait]
pub trait Mailbox<R: ActorRef>: Send {
    /// Receive the next message
    /// Returns None if every handle to the mailbox has been dropped
    async fn recv(&mut self) -> Option<Message<R>>;
}
