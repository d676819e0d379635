//! Ridgeline - A calculator for asymmetric gable roofs.
//!
//! Given the width and length of a building, the height of each gutter and the
//! slope of each roof plane, Ridgeline finds where the ridge sits, how high it
//! is, how long each rafter must be and how much roof surface results. The
//! solution can be printed as a report and drawn to scale as an SVG
//! cross-section.

pub mod config;
pub mod export;
pub mod layout;
pub mod report;

mod error;

pub use ridgeline_core::{color, draw, format, geometry, roof};

pub use error::RidgelineError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Renderer, RoofDiagram};
use report::Report;
use roof::{RoofGeometry, RoofInput};

/// Entry point for solving, reporting and rendering roofs.
///
/// # Examples
///
/// ```rust
/// use ridgeline::{RoofCalculator, config::AppConfig, roof::RoofInput};
///
/// let calculator = RoofCalculator::new(AppConfig::default());
/// let input = RoofInput::default().with_angles(45.0, 15.0);
///
/// let geometry = calculator.solve(&input);
/// let report = calculator.report(&input, &geometry);
/// let svg = calculator
///     .render_svg(&input, &geometry)
///     .expect("Failed to render");
///
/// println!("{report}");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct RoofCalculator {
    config: AppConfig,
}

impl RoofCalculator {
    /// Create a new calculator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Solve the roof geometry for `input`.
    ///
    /// Solving never fails. Use [`RoofInput::validate`] first to keep angles
    /// inside the accepted range.
    pub fn solve(&self, input: &RoofInput) -> RoofGeometry {
        info!(input:?; "Solving roof geometry");
        let geometry = roof::solve(input);
        debug!(
            ridge_position = geometry.ridge_position(),
            ridge_height = geometry.ridge_height();
            "Roof solved"
        );
        trace!(geometry:?; "Solved geometry");
        geometry
    }

    /// Build the results report in the configured language.
    pub fn report(&self, input: &RoofInput, geometry: &RoofGeometry) -> Report {
        Report::new(input, geometry, self.config.labels().language())
    }

    /// Render the to-scale cross-section as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`RidgelineError::Export`] if the style or canvas
    /// configuration is invalid.
    pub fn render_svg(
        &self,
        input: &RoofInput,
        geometry: &RoofGeometry,
    ) -> Result<String, RidgelineError> {
        info!("Rendering SVG diagram");
        let renderer = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_canvas(self.config.canvas())
            .with_language(self.config.labels().language())
            .build()?;

        let svg = renderer.render(&RoofDiagram::new(input, geometry))?;
        debug!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
