//! Asymmetric gable roof geometry.
//!
//! This module holds the roof solver: given the span, building length, two
//! gutter heights and two independent slope angles it derives where the ridge
//! sits, how high it is, how long each rafter is and how much roof surface
//! each side has.
//!
//! # Overview
//!
//! - [`RoofInput`] - The six user-controlled dimensions
//! - [`RoofGeometry`] - The derived record produced by [`solve`]
//! - [`RoofField`] - Names a single input field, used by input layers that
//!   change one value at a time
//! - [`InputError`] - Rejections raised by [`RoofInput::validate`]
//!
//! # Cross-Section
//!
//! ```text
//!                    ridge
//!                     /\
//!        left plane  /  \  right plane
//!                   /    \
//!   left eave ─►   /      \
//!                 |        \  ◄─ right eave
//!                 |         |
//!   ground ───────┴─────────┴──────
//!                 |◄─ rp ─►|
//!                 |◄─── width ───►|
//! ```
//!
//! All lengths are millimeters, all areas square meters and all angles
//! degrees. The solver is total: it never fails and lets out-of-domain values
//! fall through the arithmetic (`NaN` propagates like it would in a
//! spreadsheet). Range checks belong to the input layer, see
//! [`RoofInput::validate`].

use std::{fmt, str::FromStr};

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closest the ridge may get to either wall, in millimeters.
pub const MIN_RIDGE_OFFSET: f64 = 100.0;

/// Shortest rafter length reported, in millimeters.
pub const MIN_RAFTER_LENGTH: f64 = 2500.0;

/// Angle difference, in degrees, below which both slopes count as equal.
pub const DEGENERATE_ANGLE_TOLERANCE: f64 = 0.1;

/// Square millimeters per square meter.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Smallest slope angle accepted by [`RoofInput::validate`].
pub const MIN_ANGLE: f64 = 5.0;

/// Largest slope angle accepted by [`RoofInput::validate`].
pub const MAX_ANGLE: f64 = 60.0;

/// Identifies one of the six roof input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoofField {
    Width,
    Length,
    LeftGutterHeight,
    RightGutterHeight,
    LeftAngle,
    RightAngle,
}

impl RoofField {
    /// All fields in input-form order.
    pub const ALL: [RoofField; 6] = [
        Self::Width,
        Self::Length,
        Self::LeftGutterHeight,
        Self::RightGutterHeight,
        Self::LeftAngle,
        Self::RightAngle,
    ];

    /// Returns the snake_case name used in roof files and interactive input.
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Length => "length",
            Self::LeftGutterHeight => "left_gutter_height",
            Self::RightGutterHeight => "right_gutter_height",
            Self::LeftAngle => "left_angle",
            Self::RightAngle => "right_angle",
        }
    }

    /// Returns `true` for the two slope fields.
    pub fn is_angle(self) -> bool {
        matches!(self, Self::LeftAngle | Self::RightAngle)
    }
}

impl fmt::Display for RoofField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoofField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown roof field `{s}`, valid fields: width, length, left_gutter_height, \
                     right_gutter_height, left_angle, right_angle"
                )
            })
    }
}

/// Errors raised when an input layer checks a [`RoofInput`].
///
/// The solver itself never produces these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: RoofField, value: f64 },

    #[error("{field} must be between {min}° and {max}°, got {value}°")]
    AngleOutOfRange {
        field: RoofField,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// The user-controlled roof dimensions.
///
/// Missing fields in a deserialized roof file fall back to the calculator's
/// starting values (see [`RoofInput::default`]).
///
/// # Examples
///
/// ```
/// # use ridgeline_core::roof::RoofInput;
/// let input = RoofInput::default()
///     .with_width(7200.0)
///     .with_angles(35.0, 20.0);
/// assert_eq!(input.width(), 7200.0);
/// assert_eq!(input.right_angle(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofInput {
    width: f64,
    length: f64,
    left_gutter_height: f64,
    right_gutter_height: f64,
    left_angle: f64,
    right_angle: f64,
}

impl Default for RoofInput {
    fn default() -> Self {
        Self {
            width: 6000.0,
            length: 10000.0,
            left_gutter_height: 2500.0,
            right_gutter_height: 2500.0,
            left_angle: 30.0,
            right_angle: 30.0,
        }
    }
}

impl RoofInput {
    /// Creates an input from all six values.
    pub fn new(
        width: f64,
        length: f64,
        left_gutter_height: f64,
        right_gutter_height: f64,
        left_angle: f64,
        right_angle: f64,
    ) -> Self {
        Self {
            width,
            length,
            left_gutter_height,
            right_gutter_height,
            left_angle,
            right_angle,
        }
    }

    /// Span between the two outer wall faces, in millimeters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Building length, in millimeters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Wall height at the left eave, in millimeters.
    pub fn left_gutter_height(&self) -> f64 {
        self.left_gutter_height
    }

    /// Wall height at the right eave, in millimeters.
    pub fn right_gutter_height(&self) -> f64 {
        self.right_gutter_height
    }

    /// Pitch of the left plane, in degrees.
    pub fn left_angle(&self) -> f64 {
        self.left_angle
    }

    /// Pitch of the right plane, in degrees.
    pub fn right_angle(&self) -> f64 {
        self.right_angle
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_gutter_heights(mut self, left: f64, right: f64) -> Self {
        self.left_gutter_height = left;
        self.right_gutter_height = right;
        self
    }

    pub fn with_angles(mut self, left: f64, right: f64) -> Self {
        self.left_angle = left;
        self.right_angle = right;
        self
    }

    /// Returns the value of a single field.
    pub fn get(&self, field: RoofField) -> f64 {
        match field {
            RoofField::Width => self.width,
            RoofField::Length => self.length,
            RoofField::LeftGutterHeight => self.left_gutter_height,
            RoofField::RightGutterHeight => self.right_gutter_height,
            RoofField::LeftAngle => self.left_angle,
            RoofField::RightAngle => self.right_angle,
        }
    }

    /// Overwrites a single field.
    pub fn set(&mut self, field: RoofField, value: f64) {
        let slot = match field {
            RoofField::Width => &mut self.width,
            RoofField::Length => &mut self.length,
            RoofField::LeftGutterHeight => &mut self.left_gutter_height,
            RoofField::RightGutterHeight => &mut self.right_gutter_height,
            RoofField::LeftAngle => &mut self.left_angle,
            RoofField::RightAngle => &mut self.right_angle,
        };
        *slot = value;
    }

    /// Checks the input against the ranges an input form enforces.
    ///
    /// Every value must be finite and both angles must lie within
    /// [`MIN_ANGLE`]..=[`MAX_ANGLE`]. Dimensions are otherwise accepted as
    /// typed, zero and negative values included.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found, in field order.
    pub fn validate(&self) -> Result<(), InputError> {
        RoofField::ALL
            .into_iter()
            .try_for_each(|field| validate_field(field, self.get(field)))
    }
}

/// Checks a single field value, see [`RoofInput::validate`].
///
/// # Errors
///
/// Returns [`InputError::NotFinite`] for `NaN` or infinite values and
/// [`InputError::AngleOutOfRange`] for angles outside the accepted range.
pub fn validate_field(field: RoofField, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if field.is_angle() && !(MIN_ANGLE..=MAX_ANGLE).contains(&value) {
        return Err(InputError::AngleOutOfRange {
            field,
            value,
            min: MIN_ANGLE,
            max: MAX_ANGLE,
        });
    }
    Ok(())
}

/// The derived roof geometry produced by [`solve`].
///
/// Lengths and heights are millimeters, areas square meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofGeometry {
    width: f64,
    ridge_position: f64,
    ridge_height: f64,
    left_roof_height: f64,
    right_roof_height: f64,
    left_wall_height: f64,
    right_wall_height: f64,
    left_roof_length: f64,
    right_roof_length: f64,
    left_roof_area: f64,
    right_roof_area: f64,
    total_roof_area: f64,
}

impl RoofGeometry {
    /// Horizontal distance from the left wall to the ridge.
    pub fn ridge_position(&self) -> f64 {
        self.ridge_position
    }

    /// Horizontal distance from the ridge to the right wall.
    pub fn ridge_distance_from_right(&self) -> f64 {
        self.width - self.ridge_position
    }

    /// Height of the ridge apex above the ground.
    pub fn ridge_height(&self) -> f64 {
        self.ridge_height
    }

    /// Rise of the left plane measured from the left eave at the ridge position.
    pub fn left_roof_height(&self) -> f64 {
        self.left_roof_height
    }

    /// Rise of the right plane measured from the right eave at the ridge position.
    pub fn right_roof_height(&self) -> f64 {
        self.right_roof_height
    }

    pub fn left_wall_height(&self) -> f64 {
        self.left_wall_height
    }

    pub fn right_wall_height(&self) -> f64 {
        self.right_wall_height
    }

    /// Left rafter length, never below [`MIN_RAFTER_LENGTH`].
    pub fn left_roof_length(&self) -> f64 {
        self.left_roof_length
    }

    /// Right rafter length, never below [`MIN_RAFTER_LENGTH`].
    pub fn right_roof_length(&self) -> f64 {
        self.right_roof_length
    }

    pub fn left_roof_area(&self) -> f64 {
        self.left_roof_area
    }

    pub fn right_roof_area(&self) -> f64 {
        self.right_roof_area
    }

    /// Sum of both roof areas.
    pub fn total_roof_area(&self) -> f64 {
        self.total_roof_area
    }
}

/// Solves the roof geometry for the given input.
///
/// The ridge sits where the two roof planes, rising from their eaves at their
/// own pitch, intersect. When both pitches are within
/// [`DEGENERATE_ANGLE_TOLERANCE`] of each other the ridge is centered instead.
/// An intersection closer than [`MIN_RIDGE_OFFSET`] to either wall is pulled
/// back, in which case the taller of the two plane heights becomes the ridge
/// height. Rafter lengths are floored at [`MIN_RAFTER_LENGTH`] after the
/// geometry is fixed, and areas follow from the floored lengths.
///
/// # Examples
///
/// ```
/// # use ridgeline_core::roof::{RoofInput, solve};
/// let geometry = solve(&RoofInput::default());
/// assert_eq!(geometry.ridge_position(), 3000.0);
/// assert_eq!(
///     geometry.total_roof_area(),
///     geometry.left_roof_area() + geometry.right_roof_area()
/// );
/// ```
pub fn solve(input: &RoofInput) -> RoofGeometry {
    let tan_left = degrees_to_radians(input.left_angle).tan();
    let tan_right = degrees_to_radians(input.right_angle).tan();

    let ridge_position = ridge_position(input, tan_left, tan_right);

    let left_roof_height = tan_left * ridge_position;
    let right_roof_height = tan_right * (input.width - ridge_position);

    let ridge_height = js_max(
        input.left_gutter_height + left_roof_height,
        input.right_gutter_height + right_roof_height,
    );

    let left_roof_length = js_max(
        rafter_length(ridge_position, ridge_height - input.left_gutter_height),
        MIN_RAFTER_LENGTH,
    );
    let right_roof_length = js_max(
        rafter_length(
            input.width - ridge_position,
            ridge_height - input.right_gutter_height,
        ),
        MIN_RAFTER_LENGTH,
    );

    let left_roof_area = left_roof_length * input.length / MM2_PER_M2;
    let right_roof_area = right_roof_length * input.length / MM2_PER_M2;

    RoofGeometry {
        width: input.width,
        ridge_position,
        ridge_height,
        left_roof_height,
        right_roof_height,
        left_wall_height: input.left_gutter_height,
        right_wall_height: input.right_gutter_height,
        left_roof_length,
        right_roof_length,
        left_roof_area,
        right_roof_area,
        total_roof_area: left_roof_area + right_roof_area,
    }
}

/// Places the ridge horizontally, measured from the left wall.
fn ridge_position(input: &RoofInput, tan_left: f64, tan_right: f64) -> f64 {
    if (input.left_angle - input.right_angle).abs() < DEGENERATE_ANGLE_TOLERANCE {
        trace!(
            left_angle = input.left_angle,
            right_angle = input.right_angle;
            "Slopes are equal, centering ridge"
        );
        return input.width / 2.0;
    }

    let height_diff = input.right_gutter_height - input.left_gutter_height;
    let intersection = (input.width * tan_right + height_diff) / (tan_left + tan_right);

    // Upper bound first: for spans at or below twice the offset the lower bound wins.
    let clamped = js_max(
        MIN_RIDGE_OFFSET,
        js_min(input.width - MIN_RIDGE_OFFSET, intersection),
    );
    trace!(intersection, clamped; "Ridge placed at plane intersection");
    clamped
}

fn rafter_length(run: f64, rise: f64) -> f64 {
    (run.powi(2) + rise.powi(2)).sqrt()
}

fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

// `f64::max` and `f64::min` discard a NaN operand; the solver lets NaN through.
fn js_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn js_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}
