//! Configuration types for Ridgeline diagram rendering.
//!
//! This module provides configuration structures that control how the roof
//! cross-section is sized, styled and labelled. All types implement
//! [`serde::Deserialize`] so they can be loaded from a TOML file; every
//! section and every field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining all sections.
//! - [`CanvasConfig`] - Canvas size, padding and the headroom buffer.
//! - [`StyleConfig`] - Colors, stroke and font settings.
//! - [`LabelConfig`] - Language of the report and diagram labels.
//!
//! # Example
//!
//! ```
//! # use ridgeline::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 800.0);
//! assert!(config.style().outline_color().is_ok());
//! ```

use serde::Deserialize;

use ridgeline_core::{
    color::Color,
    draw::{StrokeDefinition, StrokeStyle, TextDefinition},
};

use crate::report::Language;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Label configuration section.
    #[serde(default)]
    labels: LabelConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig, labels: LabelConfig) -> Self {
        Self {
            canvas,
            style,
            labels,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the label configuration.
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }
}

/// Canvas geometry for the cross-section diagram.
///
/// The roof is scaled to fit inside the canvas minus `padding` on every side,
/// with `buffer` as extra headroom on both the width and the tallest height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f64,
    height: f64,
    padding: f64,
    buffer: f64,
}

impl CanvasConfig {
    pub fn new(width: f64, height: f64, padding: f64, buffer: f64) -> Self {
        Self {
            width,
            height,
            padding,
            buffer,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Checks that the padded drawing area is non-empty.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending value when the canvas cannot
    /// hold a drawing.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.height.is_finite() && self.padding.is_finite()) {
            return Err("canvas width, height and padding must be finite".to_string());
        }
        if self.padding < 0.0 {
            return Err(format!("canvas padding must not be negative, got {}", self.padding));
        }
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(format!(
                "canvas {}x{} leaves no room inside a padding of {}",
                self.width, self.height, self.padding
            ));
        }
        if !(self.buffer.is_finite() && self.buffer > 0.0) {
            return Err(format!("canvas buffer must be positive, got {}", self.buffer));
        }
        Ok(())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 100.0,
            buffer: 1.2,
        }
    }
}

/// Visual styling of the rendered diagram.
///
/// Colors are CSS color strings and are parsed when the renderer is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    outline_color: String,
    fill_color: String,
    ground_color: String,
    ground_style: String,
    stroke_width: f32,
    font_family: String,
    font_size: u16,
    bold: bool,
    text_color: String,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn outline_color(&self) -> Result<Color, String> {
        parse_color("outline", &self.outline_color)
    }

    pub fn fill_color(&self) -> Result<Color, String> {
        parse_color("fill", &self.fill_color)
    }

    pub fn ground_color(&self) -> Result<Color, String> {
        parse_color("ground", &self.ground_color)
    }

    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text", &self.text_color)
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Stroke used for the house outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline color cannot be parsed.
    pub fn outline_stroke(&self) -> Result<StrokeDefinition, String> {
        Ok(StrokeDefinition::solid(self.outline_color()?, self.stroke_width))
    }

    /// Stroke used for the ground line, including its dash pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the ground color or `ground_style` is invalid.
    pub fn ground_stroke(&self) -> Result<StrokeDefinition, String> {
        let style = self
            .ground_style
            .parse::<StrokeStyle>()
            .map_err(|err| format!("Invalid ground style in config: {err}"))?;
        Ok(StrokeDefinition::solid(self.ground_color()?, self.stroke_width).with_style(style))
    }

    /// Font settings for all labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the text color cannot be parsed.
    pub fn text_definition(&self) -> Result<TextDefinition, String> {
        let mut definition = TextDefinition::new(self.font_family.as_str(), self.font_size);
        definition.set_bold(self.bold);
        definition.set_color(self.text_color()?);
        Ok(definition)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        let text = TextDefinition::default();
        Self {
            background_color: None,
            outline_color: "#000".to_string(),
            fill_color: "rgba(200, 200, 255, 0.3)".to_string(),
            ground_color: "#666".to_string(),
            ground_style: "solid".to_string(),
            stroke_width: 2.0,
            font_family: text.font_family().to_string(),
            font_size: text.font_size(),
            bold: text.is_bold(),
            text_color: "#000".to_string(),
        }
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {name} color in config: {err}"))
}

/// Label settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    language: Language,
}

impl LabelConfig {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.canvas(), CanvasConfig::new(800.0, 600.0, 100.0, 1.2));
        assert_eq!(config.style().stroke_width(), 2.0);
        assert_eq!(config.labels().language(), Language::English);
        assert!(config.style().background_color().unwrap().is_none());
        assert!(config.style().ground_stroke().is_ok());
        assert!(config.style().text_definition().unwrap().is_bold());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            width = 1200.0

            [style]
            fill_color = "lightblue"
            ground_style = "dashed"

            [labels]
            language = "nl"
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas().width(), 1200.0);
        assert_eq!(config.canvas().height(), 600.0);
        assert_eq!(config.style().stroke_width(), 2.0);
        assert!(config.style().fill_color().is_ok());
        assert_eq!(
            *config.style().ground_stroke().unwrap().style(),
            StrokeStyle::Dashed
        );
        assert_eq!(config.labels().language(), Language::Dutch);
    }

    #[test]
    fn test_empty_document() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(*config.canvas(), CanvasConfig::default());
    }

    #[test]
    fn test_invalid_colors_are_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "not-a-color"
            outline_color = "nope"
            "#,
        )
        .unwrap();

        let err = config.style().background_color().unwrap_err();
        assert!(err.contains("background color"));
        let err = config.style().outline_stroke().unwrap_err();
        assert!(err.contains("outline color"));
    }

    #[test]
    fn test_invalid_ground_style() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            ground_style = "wavy"
            "#,
        )
        .unwrap();

        assert!(config.style().ground_stroke().unwrap_err().contains("ground style"));
    }

    #[test]
    fn test_canvas_validate() {
        assert!(CanvasConfig::default().validate().is_ok());
        assert!(CanvasConfig::new(200.0, 600.0, 100.0, 1.2).validate().is_err());
        assert!(CanvasConfig::new(800.0, 600.0, -1.0, 1.2).validate().is_err());
        assert!(CanvasConfig::new(800.0, 600.0, 100.0, 0.0).validate().is_err());
        assert!(CanvasConfig::new(f64::NAN, 600.0, 100.0, 1.2).validate().is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [labels]
            language = "fr"
            "#,
        );
        assert!(result.is_err());
    }
}
