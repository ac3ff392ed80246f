// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use pi_calculation_core::{ActorRef, Mailbox, Message};
use tokio::sync::mpsc;

/// Handle to an actor's tokio mailbox
#[derive(Clone, Debug)]
pub struct ChannelActorRef {
    pub tx: mpsc::UnboundedSender<Message<ChannelActorRef>>,
}

impl ActorRef for ChannelActorRef {
    fn tell(&self, message: Message<Self>) -> bool {
        self.tx.send(message).is_ok()
    }
}

pub struct ChannelMailbox {
    pub rx: mpsc::UnboundedReceiver<Message<ChannelActorRef>>,
}

#[async_trait]
impl Mailbox<ChannelActorRef> for ChannelMailbox {
    async fn recv(&mut self) -> Option<Message<ChannelActorRef>> {
        self.rx.recv().await
    }
}

/// Creates an unbounded mailbox and the handle that feeds it
pub fn mailbox() -> (ChannelActorRef, ChannelMailbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelActorRef { tx }, ChannelMailbox { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_calculation_core::WorkUnit;

    #[tokio::test]
    async fn test_messages_from_one_sender_keep_order() {
        let (actor, mut inbox) = mailbox();
        let (reply, _reply_inbox) = mailbox();

        for i in 0..5 {
            assert!(actor.tell(Message::Work(WorkUnit::new(i, 1), reply.clone())));
        }
        drop(actor);

        let mut received = Vec::new();
        while let Some(message) = inbox.recv().await {
            if let Message::Work(unit, _) = message {
                received.push(unit.sequence_index);
            }
        }
        assert_eq!(received, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_tell_fails_once_mailbox_dropped() {
        let (actor, inbox) = mailbox();
        drop(inbox);
        assert!(!actor.tell(Message::Start));
    }
}
