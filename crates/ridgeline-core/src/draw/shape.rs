//! Straight lines and closed outlines.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// A straight stroke between two points.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    from: Point,
    to: Point,
    stroke: &'a StrokeDefinition,
}

impl<'a> Line<'a> {
    pub fn new(from: Point, to: Point, stroke: &'a StrokeDefinition) -> Self {
        Self { from, to, stroke }
    }
}

impl Drawable for Line<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(apply_stroke!(line, self.stroke)));
        output
    }
}

/// A closed outline through a list of points, optionally filled.
///
/// # Examples
///
/// ```
/// # use ridgeline_core::draw::{Drawable, Polygon, StrokeDefinition};
/// # use ridgeline_core::geometry::Point;
/// let stroke = StrokeDefinition::default();
/// let gable = Polygon::new(
///     vec![
///         Point::new(0.0, 100.0),
///         Point::new(50.0, 20.0),
///         Point::new(100.0, 100.0),
///     ],
///     &stroke,
/// );
/// assert!(!gable.render_to_layers().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<'a> {
    points: Vec<Point>,
    stroke: &'a StrokeDefinition,
    fill: Option<Color>,
}

impl<'a> Polygon<'a> {
    pub fn new(points: Vec<Point>, stroke: &'a StrokeDefinition) -> Self {
        Self {
            points,
            stroke,
            fill: None,
        }
    }

    /// Sets the interior fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn points_attribute(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Drawable for Polygon<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut polygon = svg_element::Polygon::new().set("points", self.points_attribute());

        polygon = match self.fill {
            Some(fill) => polygon
                .set("fill", fill.opaque().to_string())
                .set("fill-opacity", fill.alpha()),
            None => polygon.set("fill", "none"),
        };

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Content,
            Box::new(apply_stroke!(polygon, self.stroke)),
        );
        output
    }
}
