// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::actor_io::{ActorRef, Mailbox};
use crate::messages::{CompletionNotice, Message};
use crate::shutdown_signal::ShutdownSignal;
use log::{debug, info, warn};

/// Output boundary for the final result
pub trait Reporter: Send {
    fn report(&mut self, notice: &CompletionNotice);
}

impl<F> Reporter for F
where
    F: FnMut(&CompletionNotice) + Send,
{
    fn report(&mut self, notice: &CompletionNotice) {
        (self)(notice)
    }
}

/// Terminal sink: reports the completion notice and shuts the group down
pub struct Listener<REP: Reporter, SD: ShutdownSignal> {
    reporter: REP,
    shutdown_signal: SD,
}

impl<REP: Reporter, SD: ShutdownSignal> Listener<REP, SD> {
    pub fn new(reporter: REP, shutdown_signal: SD) -> Self {
        Self {
            reporter,
            shutdown_signal,
        }
    }

    /// Returns true once the completion notice has been handled
    pub fn handle<R: ActorRef>(&mut self, message: Message<R>) -> bool {
        match message {
            Message::Completion(notice) => {
                info!(
                    "Pi approximation {} computed in {:?}",
                    notice.approximate_value, notice.elapsed_time
                );
                self.reporter.report(&notice);
                self.shutdown_signal.cancel();
                true
            }
            other => {
                warn!("Listener ignored unhandled {} message", other.kind());
                false
            }
        }
    }

    pub async fn run<R: ActorRef, M: Mailbox<R>>(mut self, mut mailbox: M) {
        debug!("Listener started");
        let shutdown = self.shutdown_signal.cancelled();
        tokio::pin!(shutdown);

        loop {
            let message = tokio::select! {
                biased;
                _ = &mut shutdown => break,
                message = mailbox.recv() => message,
            };

            match message {
                Some(message) => {
                    if self.handle(message) {
                        break;
                    }
                }
                None => break,
            }
        }

        debug!("Listener stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ResultUnit;
    use crate::test_support::{FlagShutdownSignal, RecordingRef};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn notice(value: f64) -> CompletionNotice {
        CompletionNotice {
            approximate_value: value,
            elapsed_time: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_completion_is_reported_then_group_shut_down() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();
        let shutdown = FlagShutdownSignal::default();
        let mut listener = Listener::new(
            move |n: &CompletionNotice| sink.lock().unwrap().push(*n),
            shutdown.clone(),
        );

        assert!(listener.handle::<RecordingRef>(Message::Completion(notice(3.0))));

        assert_eq!(*reported.lock().unwrap(), vec![notice(3.0)]);
        assert!(shutdown.is_cancelled());
    }

    #[test]
    fn test_other_messages_leave_group_running() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();
        let shutdown = FlagShutdownSignal::default();
        let mut listener = Listener::new(
            move |n: &CompletionNotice| sink.lock().unwrap().push(*n),
            shutdown.clone(),
        );

        assert!(!listener.handle::<RecordingRef>(Message::Start));
        assert!(!listener.handle::<RecordingRef>(Message::Result(ResultUnit {
            sequence_index: 0,
            value: 4.0,
        })));

        assert!(reported.lock().unwrap().is_empty());
        assert!(!shutdown.is_cancelled());
    }
}
