//! End-to-end tests of the public calculator API.

use float_cmp::assert_approx_eq;

use ridgeline::{
    RidgelineError, RoofCalculator,
    config::{AppConfig, CanvasConfig, LabelConfig, StyleConfig},
    report::{Language, Term},
    roof::{InputError, RoofField, RoofInput},
};

#[test]
fn test_symmetric_house() {
    let calculator = RoofCalculator::default();
    let input = RoofInput::default();
    let geometry = calculator.solve(&input);

    assert_eq!(geometry.ridge_position(), 3000.0);
    assert_approx_eq!(f64, geometry.ridge_height(), 4232.050807568877, epsilon = 1e-6);
    assert_approx_eq!(f64, geometry.left_roof_length(), 3464.1016151377544, epsilon = 1e-6);
    assert_approx_eq!(f64, geometry.total_roof_area(), 69.28203230275509, epsilon = 1e-9);

    let report = calculator.report(&input, &geometry);
    assert_eq!(report.language(), Language::English);
    assert_eq!(report.value(Term::TotalRoofArea), Some("69.28 m²"));
}

#[test]
fn test_report_and_diagram_use_configured_language() {
    let config = AppConfig::new(
        CanvasConfig::default(),
        StyleConfig::default(),
        LabelConfig::new(Language::Dutch),
    );
    let calculator = RoofCalculator::new(config);
    let input = RoofInput::default().with_angles(45.0, 15.0);
    let geometry = calculator.solve(&input);

    let report = calculator.report(&input, &geometry);
    assert_eq!(report.rows()[1].label(), "Nokpositie van links");

    let svg = calculator.render_svg(&input, &geometry).unwrap();
    assert!(svg.contains("Breedte: 6000 mm"));
    assert!(svg.contains("45°"));
}

#[test]
fn test_clamped_narrow_building_renders() {
    let calculator = RoofCalculator::default();
    let input = RoofInput::default().with_width(300.0).with_angles(5.0, 60.0);
    let geometry = calculator.solve(&input);

    assert_eq!(geometry.ridge_position(), 200.0);
    assert!(geometry.left_roof_length() >= 2500.0);

    let svg = calculator.render_svg(&input, &geometry).unwrap();
    assert!(svg.contains("200 mm"));
    assert!(svg.contains("100 mm"));
}

#[test]
fn test_config_errors_surface_as_export_errors() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        outline_color = "not a color"
        "#,
    )
    .unwrap();
    let calculator = RoofCalculator::new(config);
    let input = RoofInput::default();

    let err = calculator
        .render_svg(&input, &calculator.solve(&input))
        .unwrap_err();
    assert!(matches!(err, RidgelineError::Export(_)));
    assert!(err.to_string().contains("outline color"));
}

#[test]
fn test_input_validation_error_conversion() {
    let input = RoofInput::default().with_angles(2.0, 30.0);
    let err: RidgelineError = input.validate().unwrap_err().into();

    match err {
        RidgelineError::InvalidInput(InputError::AngleOutOfRange { field, .. }) => {
            assert_eq!(field, RoofField::LeftAngle);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
