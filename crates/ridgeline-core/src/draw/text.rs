//! Text labels for dimensions and angles.
//!
//! A [`Label`] is centered on an anchor point. It may be rotated about that
//! anchor (to follow a roof plane or run up a wall) and shifted perpendicular
//! to its baseline, so a value can sit just above or below the line it
//! describes.
//!
//! # Quick Start
//!
//! ```
//! # use ridgeline_core::draw::{Drawable, Label, TextDefinition};
//! # use ridgeline_core::geometry::Point;
//! let style = TextDefinition::default();
//! let label = Label::new(&style, "3464 mm", Point::new(250.0, 300.0))
//!     .with_rotation(-30.0)
//!     .with_offset(20.0);
//!
//! assert_eq!(label.content(), "3464 mm");
//! assert!(!label.render_to_layers().is_empty());
//! ```

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Font settings shared by every label of a diagram.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `'Century Gothic', CenturyGothic, AppleGothic, sans-serif` |
/// | Font size | `24` |
/// | Bold | `true` |
/// | Color | black |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Color,
}

impl TextDefinition {
    pub fn new(font_family: impl Into<String>, font_size: u16) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            ..Self::default()
        }
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "'Century Gothic', CenturyGothic, AppleGothic, sans-serif".to_string(),
            font_size: 24,
            bold: true,
            color: Color::default(),
        }
    }
}

/// A single line of text placed at an anchor point.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    definition: &'a TextDefinition,
    content: String,
    anchor: Point,
    rotation: f32,
    offset: f32,
}

impl<'a> Label<'a> {
    pub fn new(definition: &'a TextDefinition, content: impl Into<String>, anchor: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            anchor,
            rotation: 0.0,
            offset: 0.0,
        }
    }

    /// Rotates the label about its anchor, in degrees clockwise.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Shifts the baseline along the label's own vertical axis; negative moves it up.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Drawable for Label<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let definition = self.definition;

        let mut text = svg_element::Text::new("")
            .set("text-anchor", "middle")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size())
            .set("fill", definition.color().opaque().to_string())
            .set("fill-opacity", definition.color().alpha());

        if definition.is_bold() {
            text = text.set("font-weight", "bold");
        }

        text = if self.rotation == 0.0 {
            text.set("x", self.anchor.x())
                .set("y", self.anchor.y() + self.offset)
        } else {
            text.set("x", 0)
                .set("y", self.offset)
                .set(
                    "transform",
                    format!(
                        "translate({} {}) rotate({})",
                        self.anchor.x(),
                        self.anchor.y(),
                        self.rotation
                    ),
                )
        };

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(text.add(SvgText::new(self.content.as_str()))),
        );
        output
    }
}
