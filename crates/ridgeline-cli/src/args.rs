//! Command-line argument definitions for the Ridgeline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the roof to solve, where the drawing goes,
//! how the report is printed, the configuration file and logging verbosity.

use clap::{Parser, ValueEnum};

use ridgeline::roof::{RoofField, RoofInput};

/// Output format of the results report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned label/value table
    #[default]
    Text,
    /// TOML key/value table
    Toml,
}

/// Command-line arguments for the Ridgeline roof calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML roof file
    #[arg(long)]
    pub input: Option<String>,

    /// Building width in mm
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Building length in mm
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Left gutter height in mm
    #[arg(long, allow_negative_numbers = true)]
    pub left_gutter_height: Option<f64>,

    /// Right gutter height in mm
    #[arg(long, allow_negative_numbers = true)]
    pub right_gutter_height: Option<f64>,

    /// Left roof slope in degrees
    #[arg(long)]
    pub left_angle: Option<f64>,

    /// Right roof slope in degrees
    #[arg(long)]
    pub right_angle: Option<f64>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "roof.svg")]
    pub output: String,

    /// Report format printed on stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read `field = value` changes from stdin after the first calculation
    #[arg(long)]
    pub interactive: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Values given on the command line, paired with the field they replace.
    pub fn overrides(&self) -> impl Iterator<Item = (RoofField, f64)> {
        [
            (RoofField::Width, self.width),
            (RoofField::Length, self.length),
            (RoofField::LeftGutterHeight, self.left_gutter_height),
            (RoofField::RightGutterHeight, self.right_gutter_height),
            (RoofField::LeftAngle, self.left_angle),
            (RoofField::RightAngle, self.right_angle),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
    }

    /// Applies the command-line values on top of `input`.
    pub fn apply_overrides(&self, mut input: RoofInput) -> RoofInput {
        for (field, value) in self.overrides() {
            input.set(field, value);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ridgeline"]);
        assert_eq!(args.output, "roof.svg");
        assert_eq!(args.format, ReportFormat::Text);
        assert_eq!(args.log_level, "info");
        assert!(!args.interactive);
        assert_eq!(args.overrides().count(), 0);
    }

    #[test]
    fn test_overrides_win() {
        let args = Args::parse_from([
            "ridgeline",
            "--width",
            "7200",
            "--left-angle",
            "40",
            "--format",
            "toml",
        ]);
        let input = args.apply_overrides(RoofInput::default());

        assert_eq!(input.width(), 7200.0);
        assert_eq!(input.left_angle(), 40.0);
        assert_eq!(input.right_angle(), 30.0);
        assert_eq!(args.format, ReportFormat::Toml);
    }

    #[test]
    fn test_negative_dimension_accepted() {
        let args = Args::parse_from(["ridgeline", "--length", "-10"]);
        assert_eq!(args.length, Some(-10.0));
    }
}
