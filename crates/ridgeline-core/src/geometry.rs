//! Geometric primitives for diagram drawing.
//!
//! This module provides the canvas-space types used when a solved roof is
//! turned into a picture. Roof dimensions themselves are millimeters in `f64`
//! (see [`crate::roof`]); once scaled onto a canvas they become the `f32`
//! pixel coordinates defined here.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Ridgeline uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, so heights above the ground line are
//!   subtracted from the ground's y-coordinate

/// A 2D point representing a position in canvas space.
///
/// # Examples
///
/// ```
/// # use ridgeline_core::geometry::Point;
/// let eave = Point::new(100.0, 400.0);
/// let ridge = Point::new(300.0, 200.0);
///
/// let mid = eave.midpoint(ridge);
/// assert_eq!(mid.x(), 200.0);
/// assert_eq!(mid.y(), 300.0);
///
/// // Direction of the roof line, measured clockwise from +X
/// assert!((eave.angle_to(ridge) + 45.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns the direction from this point toward `other`, in degrees.
    ///
    /// Because the y-axis points down, a line rising to the right yields a
    /// negative angle, which is also the rotation SVG needs to lay text along
    /// that line.
    pub fn angle_to(self, other: Point) -> f32 {
        let delta = other.sub_point(self);
        delta.y.atan2(delta.x).to_degrees()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates the smallest bounds enclosing every point.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ridgeline_core::geometry::{Bounds, Point};
    /// let outline = [
    ///     Point::new(150.0, 450.0),
    ///     Point::new(150.0, 300.0),
    ///     Point::new(400.0, 150.0),
    ///     Point::new(650.0, 300.0),
    /// ];
    /// let bounds = Bounds::enclosing(outline).unwrap();
    /// assert_eq!(bounds.min_y(), 150.0);
    /// assert_eq!(bounds.width(), 500.0);
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let start = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(start, |acc, point| Self {
            min_x: acc.min_x.min(point.x),
            min_y: acc.min_y.min(point.y),
            max_x: acc.max_x.max(point.x),
            max_y: acc.max_y.max(point.y),
        }))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
