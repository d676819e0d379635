//! To-scale placement of the roof cross-section on the canvas.
//!
//! The house is scaled uniformly so that its width and its tallest point,
//! each with some headroom, fit inside the padded canvas. It is then centered
//! horizontally, and the span from ground to ridge is centered vertically.
//!
//! ```text
//!                  ridge
//!                   /\
//!       left eave  /  \
//!                 |    \ right eave
//!                 |     |
//!     ------------+-----+------------  ground
//!            left foot  right foot
//! ```
//!
//! Layout is pure arithmetic. Degenerate inputs produce non-finite
//! coordinates rather than errors.

use log::debug;

use ridgeline_core::{
    format::{format_degrees, format_millimeters, format_number},
    geometry::{Bounds, Point},
};

use crate::{
    config::CanvasConfig,
    export::RoofDiagram,
    report::{Language, Term},
};

/// Horizontal distance of the wall height labels from the walls.
const WALL_LABEL_GAP: f64 = 25.0;

/// Vertical distance of the width label below the ground line.
const WIDTH_LABEL_DROP: f64 = 40.0;

/// Vertical distance of the ridge distance labels above the ground line.
const RIDGE_DISTANCE_LIFT: f64 = 20.0;

/// Vertical distance of the ridge height label above the ridge.
const RIDGE_HEIGHT_LIFT: f64 = 30.0;

/// Perpendicular distance of plane labels from the roof line.
const PLANE_LABEL_OFFSET: f32 = 20.0;

/// What a diagram label describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Width,
    LeftWallHeight,
    RightWallHeight,
    RidgeHeight,
    RidgeFromLeft,
    RidgeFromRight,
    LeftAngle,
    RightAngle,
    LeftRoofLength,
    RightRoofLength,
}

/// A positioned piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    kind: LabelKind,
    text: String,
    anchor: Point,
    rotation: f32,
    offset: f32,
}

impl LabelPlacement {
    fn new(kind: LabelKind, text: String, anchor: Point) -> Self {
        Self {
            kind,
            text,
            anchor,
            rotation: 0.0,
            offset: 0.0,
        }
    }

    fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Rotation about the anchor in degrees, clockwise.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Shift along the rotated vertical axis; negative is up.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// The computed cross-section: scale, outline, ground line and labels.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    scale: f64,
    start_x: f64,
    ground_y: f64,
    outline: [Point; 5],
    ground_line: (Point, Point),
    labels: Vec<LabelPlacement>,
}

impl DiagramLayout {
    pub fn new(diagram: &RoofDiagram, canvas: &CanvasConfig, language: Language) -> Self {
        let canvas_width = canvas.width();
        let canvas_height = canvas.height();
        let padding = canvas.padding();
        let buffer = canvas.buffer();

        let width = diagram.width();
        let left_gutter = diagram.left_gutter_height();
        let right_gutter = diagram.right_gutter_height();
        let ridge_position = diagram.ridge_position();
        let ridge_height = diagram.ridge_height();

        let max_height = ridge_height.max(left_gutter).max(right_gutter) * buffer;
        let max_width = width * buffer;
        let scale_x = (canvas_width - 2.0 * padding) / max_width;
        let scale_y = (canvas_height - 2.0 * padding) / max_height;
        let scale = scale_x.min(scale_y);

        let scaled_width = width * scale;
        let scaled_left_gutter = left_gutter * scale;
        let scaled_right_gutter = right_gutter * scale;
        let scaled_ridge_position = ridge_position * scale;
        let scaled_ridge_height = ridge_height * scale;

        let start_x = (canvas_width - scaled_width) / 2.0;
        let ground_y =
            canvas_height - padding - (canvas_height - 2.0 * padding - scaled_ridge_height) / 2.0;
        let end_x = start_x + scaled_width;
        let ridge_x = start_x + scaled_ridge_position;
        let ridge_y = ground_y - scaled_ridge_height;

        debug!(scale, start_x, ground_y; "Diagram scaled");

        let left_foot = point(start_x, ground_y);
        let left_eave = point(start_x, ground_y - scaled_left_gutter);
        let ridge = point(ridge_x, ridge_y);
        let right_eave = point(end_x, ground_y - scaled_right_gutter);
        let right_foot = point(end_x, ground_y);

        let ground_line = (
            point(padding / 2.0, ground_y),
            point(canvas_width - padding / 2.0, ground_y),
        );

        let left_plane_center = left_eave.midpoint(ridge);
        let right_plane_center = ridge.midpoint(right_eave);
        let left_plane_rotation = left_eave.angle_to(ridge);
        let right_plane_rotation = ridge.angle_to(right_eave);

        let labels = vec![
            LabelPlacement::new(
                LabelKind::Width,
                format!("{}: {} mm", Term::Width.label(language), format_number(width)),
                point(start_x + scaled_width / 2.0, ground_y + WIDTH_LABEL_DROP),
            ),
            LabelPlacement::new(
                LabelKind::LeftWallHeight,
                format!("{} mm", format_number(left_gutter)),
                point(start_x - WALL_LABEL_GAP, ground_y - scaled_left_gutter / 2.0),
            )
            .with_rotation(-90.0),
            LabelPlacement::new(
                LabelKind::RightWallHeight,
                format!("{} mm", format_number(right_gutter)),
                point(end_x + WALL_LABEL_GAP, ground_y - scaled_right_gutter / 2.0),
            )
            .with_rotation(90.0),
            LabelPlacement::new(
                LabelKind::RidgeHeight,
                format_millimeters(ridge_height),
                point(ridge_x, ridge_y - RIDGE_HEIGHT_LIFT),
            ),
            LabelPlacement::new(
                LabelKind::RidgeFromLeft,
                format_millimeters(ridge_position),
                point(
                    start_x + scaled_ridge_position / 2.0,
                    ground_y - RIDGE_DISTANCE_LIFT,
                ),
            ),
            LabelPlacement::new(
                LabelKind::RidgeFromRight,
                format_millimeters(diagram.ridge_distance_from_right()),
                point(
                    ridge_x + (scaled_width - scaled_ridge_position) / 2.0,
                    ground_y - RIDGE_DISTANCE_LIFT,
                ),
            ),
            LabelPlacement::new(
                LabelKind::LeftAngle,
                format_degrees(diagram.left_angle()),
                left_plane_center,
            )
            .with_rotation(left_plane_rotation)
            .with_offset(-PLANE_LABEL_OFFSET),
            LabelPlacement::new(
                LabelKind::RightAngle,
                format_degrees(diagram.right_angle()),
                right_plane_center,
            )
            .with_rotation(right_plane_rotation)
            .with_offset(-PLANE_LABEL_OFFSET),
            LabelPlacement::new(
                LabelKind::LeftRoofLength,
                format_millimeters(diagram.left_roof_length()),
                left_plane_center,
            )
            .with_rotation(left_plane_rotation)
            .with_offset(PLANE_LABEL_OFFSET),
            LabelPlacement::new(
                LabelKind::RightRoofLength,
                format_millimeters(diagram.right_roof_length()),
                right_plane_center,
            )
            .with_rotation(right_plane_rotation)
            .with_offset(PLANE_LABEL_OFFSET),
        ];

        Self {
            scale,
            start_x,
            ground_y,
            outline: [left_foot, left_eave, ridge, right_eave, right_foot],
            ground_line,
            labels,
        }
    }

    /// Canvas units per millimeter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Canvas x of the left wall.
    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    /// Canvas y of the ground line.
    pub fn ground_y(&self) -> f64 {
        self.ground_y
    }

    /// Left foot, left eave, ridge, right eave, right foot.
    pub fn outline(&self) -> &[Point; 5] {
        &self.outline
    }

    pub fn ridge(&self) -> Point {
        self.outline[2]
    }

    pub fn ground_line(&self) -> (Point, Point) {
        self.ground_line
    }

    pub fn labels(&self) -> &[LabelPlacement] {
        &self.labels
    }

    pub fn label(&self, kind: LabelKind) -> Option<&LabelPlacement> {
        self.labels.iter().find(|label| label.kind == kind)
    }

    /// Bounding box of the house outline, or `None` if any corner is not finite.
    pub fn figure_bounds(&self) -> Option<Bounds> {
        if !self.outline.iter().all(|corner| corner.is_finite()) {
            return None;
        }
        Bounds::enclosing(self.outline)
    }
}

fn point(x: f64, y: f64) -> Point {
    Point::new(x as f32, y as f32)
}
