// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::actor_io::{ActorRef, Mailbox};
use crate::messages::Message;
use crate::shutdown_signal::ShutdownSignal;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Actor handle that records every message it is told
#[derive(Clone, Debug, Default)]
pub struct RecordingRef {
    inbox: Arc<Mutex<Vec<Message<RecordingRef>>>>,
    closed: Arc<AtomicBool>,
}

impl RecordingRef {
    pub fn messages(&self) -> Vec<Message<RecordingRef>> {
        self.inbox.lock().unwrap().clone()
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl ActorRef for RecordingRef {
    fn tell(&self, message: Message<Self>) -> bool {
        if self.closed.load(Ordering::SeqCst) {
            return false;
        }
        self.inbox.lock().unwrap().push(message);
        true
    }
}

/// Mailbox preloaded with messages, closed once drained
pub struct QueuedMailbox {
    queue: VecDeque<Message<RecordingRef>>,
}

impl QueuedMailbox {
    pub fn new(messages: Vec<Message<RecordingRef>>) -> Self {
        Self {
            queue: messages.into(),
        }
    }
}

#[async_trait]
impl Mailbox<RecordingRef> for QueuedMailbox {
    async fn recv(&mut self) -> Option<Message<RecordingRef>> {
        self.queue.pop_front()
    }
}

/// AtomicBool-based shutdown signal
#[derive(Clone, Default)]
pub struct FlagShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl ShutdownSignal for FlagShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    fn cancelled(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let flag = self.flag.clone();
        async move {
            while !flag.load(Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        }
    }
}
