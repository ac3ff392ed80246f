// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::warn;
use pi_calculation_core::{CompletionNotice, Reporter};
use tokio::sync::oneshot;

/// Hands the completion notice back to the caller of the computation
pub struct ChannelReporter {
    tx: Option<oneshot::Sender<CompletionNotice>>,
}

impl ChannelReporter {
    pub fn new(tx: oneshot::Sender<CompletionNotice>) -> Self {
        Self { tx: Some(tx) }
    }
}

impl Reporter for ChannelReporter {
    fn report(&mut self, notice: &CompletionNotice) {
        match self.tx.take() {
            Some(tx) => {
                if tx.send(*notice).is_err() {
                    warn!("Caller stopped waiting, completion notice dropped");
                }
            }
            None => warn!("Completion notice already reported"),
        }
    }
}
