//! Rendering targets for a solved roof.
//!
//! Renderers consume a [`RoofDiagram`], never the solver directly, so new
//! targets can be added without touching the geometry code.

pub mod svg;

use thiserror::Error;

use ridgeline_core::roof::{RoofGeometry, RoofInput};

/// The values a renderer needs to draw a roof cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofDiagram {
    width: f64,
    left_gutter_height: f64,
    right_gutter_height: f64,
    left_angle: f64,
    right_angle: f64,
    ridge_position: f64,
    ridge_height: f64,
    left_wall_height: f64,
    right_wall_height: f64,
    left_roof_length: f64,
    right_roof_length: f64,
}

impl RoofDiagram {
    pub fn new(input: &RoofInput, geometry: &RoofGeometry) -> Self {
        Self {
            width: input.width(),
            left_gutter_height: input.left_gutter_height(),
            right_gutter_height: input.right_gutter_height(),
            left_angle: input.left_angle(),
            right_angle: input.right_angle(),
            ridge_position: geometry.ridge_position(),
            ridge_height: geometry.ridge_height(),
            left_wall_height: geometry.left_wall_height(),
            right_wall_height: geometry.right_wall_height(),
            left_roof_length: geometry.left_roof_length(),
            right_roof_length: geometry.right_roof_length(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn left_gutter_height(&self) -> f64 {
        self.left_gutter_height
    }

    pub fn right_gutter_height(&self) -> f64 {
        self.right_gutter_height
    }

    pub fn left_angle(&self) -> f64 {
        self.left_angle
    }

    pub fn right_angle(&self) -> f64 {
        self.right_angle
    }

    pub fn ridge_position(&self) -> f64 {
        self.ridge_position
    }

    pub fn ridge_distance_from_right(&self) -> f64 {
        self.width - self.ridge_position
    }

    pub fn ridge_height(&self) -> f64 {
        self.ridge_height
    }

    pub fn left_wall_height(&self) -> f64 {
        self.left_wall_height
    }

    pub fn right_wall_height(&self) -> f64 {
        self.right_wall_height
    }

    pub fn left_roof_length(&self) -> f64 {
        self.left_roof_length
    }

    pub fn right_roof_length(&self) -> f64 {
        self.right_roof_length
    }
}

/// A single Renderer trait that works with any output format
pub trait Renderer {
    /// Renders the diagram to the target's textual representation.
    fn render(&self, diagram: &RoofDiagram) -> Result<String, Error>;
}

/// Failure to produce a diagram in the requested format.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use ridgeline_core::roof::solve;

    use super::*;

    #[test]
    fn test_diagram_from_solution() {
        let input = RoofInput::default().with_gutter_heights(2500.0, 3000.0);
        let geometry = solve(&input);
        let diagram = RoofDiagram::new(&input, &geometry);

        assert_eq!(diagram.width(), 6000.0);
        assert_eq!(diagram.right_gutter_height(), 3000.0);
        assert_eq!(diagram.ridge_position(), geometry.ridge_position());
        assert_eq!(diagram.ridge_height(), geometry.ridge_height());
        assert_eq!(
            diagram.ridge_distance_from_right(),
            geometry.ridge_distance_from_right()
        );
        assert_eq!(diagram.left_roof_length(), geometry.left_roof_length());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Render("bad canvas".to_string());
        assert_eq!(err.to_string(), "Render error: bad canvas");
        assert!(std::error::Error::source(&err).is_none());
    }
}
