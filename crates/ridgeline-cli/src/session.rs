//! Line-oriented interactive session.
//!
//! Each line is one command:
//!
//! | Line | Effect |
//! |------|--------|
//! | `left_angle = 35` | change one field, recalculate, print and redraw |
//! | `show` | print the current report again |
//! | `quit`, `exit` | end the session |
//! | empty, `# comment` | ignored |
//!
//! A rejected line leaves the current roof untouched.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use ridgeline::{
    RidgelineError, RoofCalculator,
    roof::{RoofField, RoofInput, validate_field},
};

use crate::{Output, emit};

/// A parsed session line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(RoofField, f64),
    Show,
    Quit,
}

/// Parses a single line; `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns a message for unknown commands, unknown fields and values that
/// are not numbers.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    match line {
        "show" => return Ok(Some(Command::Show)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        _ => {}
    }

    let Some((name, value)) = line.split_once('=') else {
        return Err(format!(
            "expected `field = value`, `show` or `quit`, got `{line}`"
        ));
    };

    let field = name.parse::<RoofField>()?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("`{}` is not a number", value.trim()))?;

    Ok(Some(Command::Set(field, value)))
}

/// Runs commands from `reader` until it ends or the user quits.
///
/// Every accepted change re-solves the roof, prints the report to `writer`
/// and rewrites the SVG. Returns the final roof.
///
/// # Errors
///
/// Returns an error if reading input, writing output or rendering fails.
/// Invalid lines are reported on `writer` and do not end the session.
pub fn run_session<R: BufRead, W: Write>(
    calculator: &RoofCalculator,
    output: &Output<'_>,
    mut input: RoofInput,
    reader: R,
    writer: &mut W,
) -> Result<RoofInput, RidgelineError> {
    info!("Starting interactive session");

    for line in reader.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                warn!(line; "Rejected session input");
                writeln!(writer, "error: {message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => emit(calculator, output, &input, writer)?,
            Command::Set(field, value) => {
                if let Err(err) = validate_field(field, value) {
                    writeln!(writer, "error: {err}")?;
                    continue;
                }
                input.set(field, value);
                debug!(field = field.name(), value; "Roof updated");
                emit(calculator, output, &input, writer)?;
            }
        }
    }

    info!("Interactive session finished");
    Ok(input)
}
