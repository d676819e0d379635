//! SVG rendering of the roof cross-section.

use log::{debug, info};
use svg::{Document, node::element::Rectangle};

use ridgeline_core::{
    color::Color,
    draw::{Drawable, Label, LayeredOutput, Line, Polygon, RenderLayer, StrokeDefinition, TextDefinition},
};

use crate::{
    config::{CanvasConfig, StyleConfig},
    export::{self, RoofDiagram},
    layout::DiagramLayout,
    report::Language,
};

/// Builder for [`SvgRenderer`].
///
/// Unset sections fall back to their defaults.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    canvas: Option<&'a CanvasConfig>,
    language: Language,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_canvas(mut self, canvas: &'a CanvasConfig) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Resolves colors, strokes and fonts.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a color or stroke style does not
    /// parse, or the canvas leaves no room to draw.
    pub fn build(self) -> Result<SvgRenderer, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);
        let canvas = self.canvas.copied().unwrap_or_default();

        canvas.validate().map_err(export::Error::Render)?;

        Ok(SvgRenderer {
            canvas,
            language: self.language,
            background_color: style.background_color().map_err(export::Error::Render)?,
            fill_color: style.fill_color().map_err(export::Error::Render)?,
            outline_stroke: style.outline_stroke().map_err(export::Error::Render)?,
            ground_stroke: style.ground_stroke().map_err(export::Error::Render)?,
            text: style.text_definition().map_err(export::Error::Render)?,
        })
    }
}

/// Draws a [`RoofDiagram`] as a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    canvas: CanvasConfig,
    language: Language,
    background_color: Option<Color>,
    fill_color: Color,
    outline_stroke: StrokeDefinition,
    ground_stroke: StrokeDefinition,
    text: TextDefinition,
}

impl SvgRenderer {
    fn render_layers(&self, layout: &DiagramLayout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        if let Some(color) = self.background_color {
            let background = Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.canvas.width())
                .set("height", self.canvas.height())
                .set("fill", color.opaque().to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(background));
        }

        let (ground_from, ground_to) = layout.ground_line();
        output.merge(Line::new(ground_from, ground_to, &self.ground_stroke).render_to_layers());

        let house = Polygon::new(layout.outline().to_vec(), &self.outline_stroke)
            .with_fill(self.fill_color);
        output.merge(house.render_to_layers());

        for placement in layout.labels() {
            let label = Label::new(&self.text, placement.text(), placement.anchor())
                .with_rotation(placement.rotation())
                .with_offset(placement.offset());
            output.merge(label.render_to_layers());
        }

        output
    }
}

impl export::Renderer for SvgRenderer {
    fn render(&self, diagram: &RoofDiagram) -> Result<String, export::Error> {
        let layout = DiagramLayout::new(diagram, &self.canvas, self.language);
        debug!(labels = layout.labels().len(); "Diagram laid out");

        let width = self.canvas.width();
        let height = self.canvas.height();
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        for node in self.render_layers(&layout).render() {
            doc = doc.add(node);
        }

        info!(width, height; "SVG document rendered");
        Ok(doc.to_string())
    }
}
