// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use log::{info, warn};
use pi_calculation_core::ComputationConfig;
use pi_calculation_task_channels::{run_computation_with_shutdown, ChannelShutdownSignal};
use std::path::PathBuf;
use std::process::ExitCode;

/// Approximates pi with a supervised pool of worker tasks
#[derive(Debug, Parser)]
#[command(name = "pi-calculation", version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Number of workers in the pool
    #[arg(short, long)]
    workers: Option<usize>,

    /// Number of series elements per work unit
    #[arg(short, long)]
    elements: Option<u64>,

    /// Number of work units
    #[arg(short = 'n', long)]
    chunks: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> ComputationConfig {
        let mut config = match ComputationConfig::load(&self.config) {
            Ok(cfg) => {
                info!("Loaded config from {}", self.config.display());
                cfg
            }
            Err(e) => {
                warn!("Failed to load {}: {}", self.config.display(), e);
                warn!("Using default configuration...");
                ComputationConfig::default()
            }
        };

        if let Some(workers) = self.workers {
            config.worker_pool_size = workers;
        }
        if let Some(elements) = self.elements {
            config.elements_per_chunk = elements;
        }
        if let Some(chunks) = self.chunks {
            config.number_of_chunks = chunks;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config();

    println!("Starting Pi calculation!");
    println!("Number of workers: {}", config.worker_pool_size);

    let shutdown_signal = ChannelShutdownSignal::default();

    // Setup Ctrl+C handler
    let ctrl_c_signal = shutdown_signal.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n\n=== Ctrl+C received, initiating shutdown ===");
            ctrl_c_signal.token().cancel();
        }
    });

    match run_computation_with_shutdown(&config, shutdown_signal).await {
        Ok(notice) => {
            println!("\n\tPi approximation: \t\t{}", notice.approximate_value);
            println!("\tCalculation time: \t{:?}", notice.elapsed_time);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Pi calculation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "pi-calculation",
            "--config",
            "/nonexistent/config.json",
            "--workers",
            "2",
            "--elements",
            "5",
            "-n",
            "3",
        ]);

        let config = cli.resolve_config();
        assert_eq!(config, ComputationConfig::new(2, 5, 3));
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let cli = Cli::parse_from(["pi-calculation", "--config", "/nonexistent/config.json"]);
        assert_eq!(cli.resolve_config(), ComputationConfig::default());
    }
}
