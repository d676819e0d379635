//! CLI logic for the Ridgeline roof calculator.
//!
//! This module contains the core CLI logic: assembling the roof from a file
//! and flags, printing the report, writing the drawing and, on request,
//! running an interactive session.

pub mod error_adapter;
pub mod session;

mod args;
mod config;

pub use args::{Args, ReportFormat};

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};

use ridgeline::{RidgelineError, RoofCalculator, export, roof::RoofInput};

/// Where and how results are written.
#[derive(Debug, Clone, Copy)]
pub struct Output<'a> {
    svg_path: &'a str,
    format: ReportFormat,
}

impl<'a> Output<'a> {
    pub fn new(svg_path: &'a str, format: ReportFormat) -> Self {
        Self { svg_path, format }
    }
}

/// Run the Ridgeline CLI application
///
/// Solves the roof described by the input file and flags, prints the report
/// on stdout and writes the SVG cross-section to the output file. With
/// `--interactive`, keeps reading changes from stdin afterwards.
///
/// # Errors
///
/// Returns `RidgelineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Out-of-range or non-finite input values
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RidgelineError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Processing roof"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let base = match &args.input {
        Some(path) => config::load_roof(path)?,
        None => RoofInput::default(),
    };
    let input = args.apply_overrides(base);
    input.validate()?;

    let calculator = RoofCalculator::new(app_config);
    let output = Output::new(&args.output, args.format);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    emit(&calculator, &output, &input, &mut writer)?;

    if args.interactive {
        let stdin = io::stdin();
        session::run_session(&calculator, &output, input, stdin.lock(), &mut writer)?;
    }

    Ok(())
}

/// Solves `input`, prints its report and rewrites the SVG.
pub(crate) fn emit<W: Write>(
    calculator: &RoofCalculator,
    output: &Output<'_>,
    input: &RoofInput,
    writer: &mut W,
) -> Result<(), RidgelineError> {
    let geometry = calculator.solve(input);
    let report = calculator.report(input, &geometry);

    match output.format {
        ReportFormat::Text => write!(writer, "{report}")?,
        ReportFormat::Toml => {
            let text = toml::to_string(&report)
                .map_err(|err| export::Error::Render(err.to_string()))?;
            write!(writer, "{text}")?;
        }
    }
    writer.flush()?;
    debug!("Report printed");

    let svg = calculator.render_svg(input, &geometry)?;
    fs::write(output.svg_path, svg)?;
    info!(output_file = output.svg_path; "SVG exported successfully");

    Ok(())
}
