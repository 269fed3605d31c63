//! Error types for Mullion operations.
//!
//! This module provides the main error type [`MullionError`]. Layout
//! computation itself never fails; errors only arise while setting an engine
//! up or writing its output.

use std::io;

use thiserror::Error;

/// The main error type for Mullion operations.
#[derive(Debug, Error)]
pub enum MullionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
