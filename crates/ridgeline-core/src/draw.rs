//! Drawable building blocks for roof diagrams.
//!
//! Every drawable knows its own placement in canvas coordinates and renders
//! itself into a [`LayeredOutput`], which keeps fills underneath outlines and
//! text on top regardless of the order items were drawn in.
//!
//! # Overview
//!
//! - [`Drawable`] - Trait implemented by everything that can be put on a canvas
//! - [`Line`], [`Polygon`] - Straight strokes and closed, optionally filled outlines
//! - [`Label`], [`TextDefinition`] - Text anchored at a point, optionally rotated
//! - [`StrokeDefinition`], [`StrokeStyle`] - Line appearance
//! - [`RenderLayer`], [`LayeredOutput`] - Z-ordering of SVG nodes

mod layer;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{Line, Polygon};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Label, TextDefinition};

/// Something that can render itself to SVG nodes.
pub trait Drawable {
    /// Renders this element, assigning each produced node to a layer.
    fn render_to_layers(&self) -> LayeredOutput;
}
