// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Errors surfaced at the boundary of a pi computation
#[derive(Debug, Error)]
pub enum PiError {
    /// Pool size, chunk size or chunk count rejected before any actor starts
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration file could not be read
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The group shut down before a completion notice was reported
    #[error("Computation interrupted before completion")]
    Interrupted,

    /// An actor task failed while being joined
    #[error("Actor {actor} failed: {message}")]
    Join { actor: String, message: String },
}

pub type Result<T> = std::result::Result<T, PiError>;
