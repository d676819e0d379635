//! Stroke definitions for lines and outlines.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"` |
//!
//! Use [`apply_stroke!`](crate::apply_stroke!) to copy a definition onto an
//! SVG element:
//!
//! ```
//! use ridgeline_core::draw::StrokeDefinition;
//! use ridgeline_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::solid(Color::new("#666").unwrap(), 2.0);
//! let ground = svg_element::Line::new()
//!     .set("x1", 50)
//!     .set("x2", 750);
//!
//! let ground = ridgeline_core::apply_stroke!(ground, &stroke);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
    /// 2px dot, 3px gap
    Dotted,
    /// Custom SVG dasharray pattern, e.g. `"10,5,2,5"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            pattern if is_dash_pattern(pattern) => Ok(Self::Custom(pattern.to_string())),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted or a dash pattern like `10,5`"
            )),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

fn is_dash_pattern(s: &str) -> bool {
    let mut lengths = s
        .split([',', ' '])
        .filter(|part| !part.is_empty())
        .peekable();
    lengths.peek().is_some() && lengths.all(|part| part.parse::<f32>().is_ok_and(|v| v >= 0.0))
}

/// Color, width and pattern of a stroke.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Replaces the line pattern.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke` (opaque), `stroke-opacity`, `stroke-width` and, for patterned
/// styles, `stroke-dasharray`.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().opaque().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>(), Ok(StrokeStyle::Solid));
        assert_eq!("dashed".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
        assert_eq!("dotted".parse::<StrokeStyle>(), Ok(StrokeStyle::Dotted));
        assert_eq!(
            "10,5,2,5".parse::<StrokeStyle>(),
            Ok(StrokeStyle::Custom("10,5,2,5".to_string()))
        );
        assert_eq!(
            "8 4".parse::<StrokeStyle>(),
            Ok(StrokeStyle::Custom("8 4".to_string()))
        );
        assert!("wavy".parse::<StrokeStyle>().is_err());
        assert!("".parse::<StrokeStyle>().is_err());
        assert!("5,-1".parse::<StrokeStyle>().is_err());
    }

    #[test]
    fn test_stroke_style_svg_value() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3".to_string()));
    }

    #[test]
    fn test_apply_stroke_solid() {
        let stroke = StrokeDefinition::solid(Color::new("red").unwrap(), 2.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke).to_string();

        assert!(line.contains("stroke-width=\"2\""));
        assert!(line.contains("stroke-opacity=\"1\""));
        assert!(!line.contains("stroke-dasharray"));
    }

    #[test]
    fn test_apply_stroke_dashed() {
        let stroke = StrokeDefinition::solid(Color::default(), 1.0).with_style(StrokeStyle::Dashed);
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke).to_string();

        assert!(line.contains("stroke-dasharray=\"5,5\""));
    }
}
