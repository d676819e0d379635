//! Human-readable results of a roof calculation.
//!
//! A [`Report`] lists the eleven derived values in a fixed order, each with a
//! localized label and a display-formatted value. It prints as an aligned
//! two-column table and serializes to a flat key/value table for TOML output.

use std::fmt;

use serde::{
    Deserialize, Serialize,
    ser::{SerializeMap, Serializer},
};

use ridgeline_core::{
    format::{format_degrees, format_millimeters, format_square_meters},
    roof::{RoofGeometry, RoofInput},
};

/// Language of report rows and diagram labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "nl")]
    Dutch,
}

/// A labelled quantity shown in the report or on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Width,
    RidgeHeight,
    RidgePosition,
    LeftWallHeight,
    RightWallHeight,
    LeftSlope,
    RightSlope,
    LeftRoofLength,
    RightRoofLength,
    LeftRoofArea,
    RightRoofArea,
    TotalRoofArea,
}

impl Term {
    /// Stable machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            Term::Width => "width",
            Term::RidgeHeight => "ridge_height",
            Term::RidgePosition => "ridge_position",
            Term::LeftWallHeight => "left_wall_height",
            Term::RightWallHeight => "right_wall_height",
            Term::LeftSlope => "left_slope",
            Term::RightSlope => "right_slope",
            Term::LeftRoofLength => "left_roof_length",
            Term::RightRoofLength => "right_roof_length",
            Term::LeftRoofArea => "left_roof_area",
            Term::RightRoofArea => "right_roof_area",
            Term::TotalRoofArea => "total_roof_area",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Term::Width => "Width",
                Term::RidgeHeight => "Ridge height",
                Term::RidgePosition => "Ridge position from left",
                Term::LeftWallHeight => "Left wall height",
                Term::RightWallHeight => "Right wall height",
                Term::LeftSlope => "Left roof slope",
                Term::RightSlope => "Right roof slope",
                Term::LeftRoofLength => "Left rafter length",
                Term::RightRoofLength => "Right rafter length",
                Term::LeftRoofArea => "Left roof area",
                Term::RightRoofArea => "Right roof area",
                Term::TotalRoofArea => "Total roof area",
            },
            Language::Dutch => match self {
                Term::Width => "Breedte",
                Term::RidgeHeight => "Nokhoogte",
                Term::RidgePosition => "Nokpositie van links",
                Term::LeftWallHeight => "Linker Muurhoogte",
                Term::RightWallHeight => "Rechter Muurhoogte",
                Term::LeftSlope => "Linker Dakhelling",
                Term::RightSlope => "Rechter Dakhelling",
                Term::LeftRoofLength => "Linker Daklengte",
                Term::RightRoofLength => "Rechter Daklengte",
                Term::LeftRoofArea => "Oppervlakte linker dakdeel",
                Term::RightRoofArea => "Oppervlakte rechter dakdeel",
                Term::TotalRoofArea => "Totale dakoppervlakte",
            },
        }
    }
}

type ValueFormatter = fn(&RoofInput, &RoofGeometry) -> String;

/// Report rows in display order, each with the way its value is printed.
const REPORT_ROWS: [(Term, ValueFormatter); 11] = [
    (Term::RidgeHeight, |_, geometry| format_millimeters(geometry.ridge_height())),
    (Term::RidgePosition, |_, geometry| format_millimeters(geometry.ridge_position())),
    (Term::LeftWallHeight, |_, geometry| format_millimeters(geometry.left_wall_height())),
    (Term::RightWallHeight, |_, geometry| format_millimeters(geometry.right_wall_height())),
    (Term::LeftSlope, |input, _| format_degrees(input.left_angle())),
    (Term::RightSlope, |input, _| format_degrees(input.right_angle())),
    (Term::LeftRoofLength, |_, geometry| format_millimeters(geometry.left_roof_length())),
    (Term::RightRoofLength, |_, geometry| format_millimeters(geometry.right_roof_length())),
    (Term::LeftRoofArea, |_, geometry| format_square_meters(geometry.left_roof_area())),
    (Term::RightRoofArea, |_, geometry| format_square_meters(geometry.right_roof_area())),
    (Term::TotalRoofArea, |_, geometry| format_square_meters(geometry.total_roof_area())),
];

/// One labelled, formatted result.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    term: Term,
    label: &'static str,
    value: String,
}

impl ReportRow {
    pub fn term(&self) -> Term {
        self.term
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The results panel of a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    language: Language,
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(input: &RoofInput, geometry: &RoofGeometry, language: Language) -> Self {
        let rows = REPORT_ROWS
            .iter()
            .map(|&(term, format)| ReportRow {
                term,
                label: term.label(language),
                value: format(input, geometry),
            })
            .collect();

        Self { language, rows }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Formatted value of `term`, if it is part of the report.
    pub fn value(&self, term: Term) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.term == term)
            .map(ReportRow::value)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0)
            + 1;

        for row in &self.rows {
            let label = format!("{}:", row.label);
            writeln!(f, "{label:<width$} {}", row.value)?;
        }
        Ok(())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(row.term.key(), &row.value)?;
        }
        map.end()
    }
}
