//! Error types for Ridgeline operations.
//!
//! This module provides the main error type [`RidgelineError`]. The roof
//! solver itself never fails; these errors come from the layers around it:
//! reading files, loading configuration, checking user input and rendering.

use std::io;

use thiserror::Error;

use ridgeline_core::roof::InputError;

use crate::export;

/// The main error type for Ridgeline operations.
#[derive(Debug, Error)]
pub enum RidgelineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}
