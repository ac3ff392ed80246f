// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::channel_reporter::ChannelReporter;
use crate::channel_shutdown_signal::ChannelShutdownSignal;
use crate::channel_wrappers::{self, ChannelActorRef};
use crate::tokio_runtime::{ActorHandle, TokioRuntime};
use log::{debug, error, info};
use pi_calculation_core::{
    ActorRef, CompletionNotice, ComputationConfig, Listener, Message, PiError, Result,
    RoundRobinRouter, ShutdownSignal, Supervisor, Worker, WorkerRuntime,
};
use tokio::sync::oneshot;

/// Runs one computation group to completion
pub async fn run_computation(config: &ComputationConfig) -> Result<CompletionNotice> {
    run_computation_with_shutdown(config, ChannelShutdownSignal::default()).await
}

/// Runs one computation group, stopping early if `shutdown_signal` is cancelled
/// from outside (e.g. Ctrl+C)
pub async fn run_computation_with_shutdown(
    config: &ComputationConfig,
    shutdown_signal: ChannelShutdownSignal,
) -> Result<CompletionNotice> {
    config.validate()?;

    info!(
        "Starting computation: {} workers, {} chunks of {} elements",
        config.worker_pool_size, config.number_of_chunks, config.elements_per_chunk
    );

    let mut handles: Vec<ActorHandle> = Vec::new();

    // Listener
    let (report_tx, report_rx) = oneshot::channel();
    let (listener_ref, listener_mailbox) = channel_wrappers::mailbox();
    let listener = Listener::new(ChannelReporter::new(report_tx), shutdown_signal.clone());
    handles.push(TokioRuntime::spawn("listener", move || {
        listener.run::<ChannelActorRef, _>(listener_mailbox)
    }));

    // Worker pool
    let mut pool = Vec::with_capacity(config.worker_pool_size);
    for worker_id in 0..config.worker_pool_size {
        let (worker_ref, worker_mailbox) = channel_wrappers::mailbox();
        let worker = Worker::new(worker_id, shutdown_signal.clone());
        handles.push(TokioRuntime::spawn(&format!("worker-{}", worker_id), move || {
            worker.run::<ChannelActorRef, _>(worker_mailbox)
        }));
        pool.push(worker_ref);
    }
    debug!("Spawned {} workers", pool.len());

    // Supervisor
    let router = RoundRobinRouter::new(pool)?;
    let (supervisor_ref, supervisor_mailbox) = channel_wrappers::mailbox();
    let supervisor = Supervisor::new(
        supervisor_ref.clone(),
        router,
        listener_ref,
        config.elements_per_chunk,
        config.number_of_chunks,
    );
    let supervisor_signal = shutdown_signal.clone();
    handles.push(TokioRuntime::spawn("supervisor", move || {
        supervisor.run(supervisor_mailbox, supervisor_signal)
    }));

    start(&supervisor_ref);
    drop(supervisor_ref);

    shutdown_signal.cancelled().await;
    debug!("Shutdown observed, joining {} actors", handles.len());

    let mut failure = None;
    for handle in handles {
        let actor = handle.name.clone();
        if let Err(e) = TokioRuntime::join(handle).await {
            error!("Actor {} task failed: {}", actor, e);
            failure.get_or_insert(PiError::Join {
                actor,
                message: e.to_string(),
            });
        }
    }
    if let Some(e) = failure {
        return Err(e);
    }

    report_rx.await.map_err(|_| PiError::Interrupted)
}

fn start(supervisor: &ChannelActorRef) {
    if !supervisor.tell(Message::Start) {
        error!("Supervisor mailbox closed before start");
    }
}
