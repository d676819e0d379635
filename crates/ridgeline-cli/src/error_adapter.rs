//! Error adapter for converting RidgelineError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use ridgeline::{
    RidgelineError,
    roof::{InputError, MAX_ANGLE, MIN_ANGLE},
};

/// Adapter giving a [`RidgelineError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a RidgelineError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RidgelineError::Io(_) => "ridgeline::io",
            RidgelineError::Config(_) => "ridgeline::config",
            RidgelineError::InvalidInput(_) => "ridgeline::input",
            RidgelineError::Export(_) => "ridgeline::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            RidgelineError::Io(_) => return None,
            RidgelineError::Config(_) => {
                "check the file given with --config, or ridgeline/config.toml in the current directory"
                    .to_string()
            }
            RidgelineError::InvalidInput(InputError::AngleOutOfRange { .. }) => {
                format!("roof slopes must be between {MIN_ANGLE}° and {MAX_ANGLE}°")
            }
            RidgelineError::InvalidInput(InputError::NotFinite { .. }) => {
                "dimensions and slopes must be ordinary numbers".to_string()
            }
            RidgelineError::Export(_) => {
                "check the [style] and [canvas] sections of the configuration".to_string()
            }
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`RidgelineError`] for rendering with miette.
pub fn to_reportable(err: &RidgelineError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
