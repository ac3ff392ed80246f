// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{PiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of one pi computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputationConfig {
    pub worker_pool_size: usize,
    pub elements_per_chunk: u64,
    pub number_of_chunks: u64,
}

impl Default for ComputationConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: 8,
            elements_per_chunk: 10_000,
            number_of_chunks: 10_000,
        }
    }
}

impl ComputationConfig {
    pub fn new(worker_pool_size: usize, elements_per_chunk: u64, number_of_chunks: u64) -> Self {
        Self {
            worker_pool_size,
            elements_per_chunk,
            number_of_chunks,
        }
    }

    /// Load configuration from a JSON file
    /// Missing fields fall back to their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ComputationConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Rejects parameters the actor mesh cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.worker_pool_size == 0 {
            return Err(PiError::InvalidConfiguration(
                "worker_pool_size must be at least 1".to_string(),
            ));
        }
        if self.elements_per_chunk == 0 {
            return Err(PiError::InvalidConfiguration(
                "elements_per_chunk must be at least 1".to_string(),
            ));
        }
        if self.number_of_chunks == 0 {
            return Err(PiError::InvalidConfiguration(
                "number_of_chunks must be at least 1".to_string(),
            ));
        }

        // The largest denominator is 2 * total_terms - 1
        let fits = self
            .number_of_chunks
            .checked_mul(self.elements_per_chunk)
            .and_then(|total| total.checked_mul(2));
        if fits.is_none() {
            return Err(PiError::InvalidConfiguration(format!(
                "{} chunks of {} elements exceed the supported series length",
                self.number_of_chunks, self.elements_per_chunk
            )));
        }

        Ok(())
    }

    pub fn total_terms(&self) -> u64 {
        self.number_of_chunks * self.elements_per_chunk
    }
}
