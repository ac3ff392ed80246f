// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pi_calculation_core::ShutdownSignal;
use tokio_util::sync::CancellationToken;

/// Tokio CancellationToken-based shutdown signal
#[derive(Clone, Default)]
pub struct ChannelShutdownSignal {
    token: CancellationToken,
}

impl ChannelShutdownSignal {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl ShutdownSignal for ChannelShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    fn cancel(&self) {
        self.token.cancel();
    }

    fn cancelled(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        self.token.clone().cancelled_owned()
    }
}
