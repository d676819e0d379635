//! Display formatting for roof measurements.
//!
//! Results are shown the way the calculator has always shown them:
//!
//! | Quantity | Rule | Example |
//! |----------|------|---------|
//! | Lengths, heights | rounded half up to whole millimeters | `3464 mm` |
//! | Areas | fixed two decimals | `69.28 m²` |
//! | Angles, raw inputs | number as typed | `30°`, `6000` |
//!
//! Non-finite values are never rejected here; they print as `NaN`,
//! `Infinity` or `-Infinity`.
//!
//! # Examples
//!
//! ```
//! # use ridgeline_core::format::{format_millimeters, format_square_meters, format_degrees};
//! assert_eq!(format_millimeters(3464.1016), "3464 mm");
//! assert_eq!(format_millimeters(2.5), "3 mm");
//! assert_eq!(format_square_meters(69.282032), "69.28 m²");
//! assert_eq!(format_degrees(30.0), "30°");
//! ```

/// Formats a length in whole millimeters, e.g. `4232 mm`.
pub fn format_millimeters(value: f64) -> String {
    format!("{} mm", format_number(round_half_up(value)))
}

/// Formats an area with two decimals, e.g. `34.64 m²`.
pub fn format_square_meters(value: f64) -> String {
    format!("{} m²", to_fixed(value, 2))
}

/// Formats an angle as entered, e.g. `30°` or `22.5°`.
pub fn format_degrees(value: f64) -> String {
    format!("{}°", format_number(value))
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// `2.5` becomes `3.0` and `-2.5` becomes `-2.0`. Non-finite values are
/// returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    // Subtracting the floor is exact, unlike adding 0.5 first.
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Formats a number in its shortest round-tripping form.
///
/// Integral values print without a fractional part (`6000`), negative zero
/// prints as `0`, and magnitudes outside `1e-7..1e21` switch to exponent
/// notation (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-7..1e21).contains(&magnitude) {
        let exponent_form = format!("{value:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }

    format!("{value}")
}

/// Formats a number with exactly `digits` decimals.
///
/// Rounds on the exact binary value; a value lying exactly halfway between two
/// candidates rounds away from zero (`0.125` becomes `0.13`). Negative zero
/// prints without a sign. Magnitudes of `1e21` and above fall back to
/// [`format_number`], so `2.5e21` prints as `2.5e+21`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }
    if value.abs() >= 1e21 {
        return format_number(value);
    }
    if value == 0.0 {
        return format!("{:.digits$}", 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    match halfway_units(magnitude, digits) {
        Some(units) => format!("{sign}{}", insert_decimal_point(&units, digits)),
        None => format!("{sign}{magnitude:.digits$}"),
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// When `magnitude` sits exactly halfway between two `digits`-decimal values,
/// returns the upper one as an integer count of `10^-digits` units.
fn halfway_units(magnitude: f64, digits: usize) -> Option<String> {
    let exponent = i32::try_from(digits).ok()?;
    let factor = 2.0 * 10f64.powi(exponent);
    let doubled = magnitude * factor;

    // The product must be exact and an odd integer to be a true tie.
    let rounding_error = magnitude.mul_add(factor, -doubled);
    if rounding_error != 0.0 || doubled.fract() != 0.0 || doubled % 2.0 != 1.0 {
        return None;
    }

    Some(format!("{:.0}", (doubled + 1.0) / 2.0))
}

fn insert_decimal_point(units: &str, digits: usize) -> String {
    if digits == 0 {
        return units.to_string();
    }
    let padded = format!("{units:0>width$}", width = digits + 1);
    let (whole, fraction) = padded.split_at(padded.len() - digits);
    format!("{whole}.{fraction}")
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_approx_eq!(f64, round_half_up(2.5), 3.0);
        assert_approx_eq!(f64, round_half_up(2.4999), 2.0);
        assert_approx_eq!(f64, round_half_up(-2.5), -2.0);
        assert_approx_eq!(f64, round_half_up(-2.6), -3.0);
        assert_approx_eq!(f64, round_half_up(0.49999999999999994), 0.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_format_millimeters() {
        assert_eq!(format_millimeters(4232.050807568877), "4232 mm");
        assert_eq!(format_millimeters(3464.1016151377544), "3464 mm");
        assert_eq!(format_millimeters(2500.0), "2500 mm");
        assert_eq!(format_millimeters(-0.4), "0 mm");
        assert_eq!(format_millimeters(-12.5), "-12 mm");
    }

    #[test]
    fn test_format_millimeters_non_finite() {
        assert_eq!(format_millimeters(f64::NAN), "NaN mm");
        assert_eq!(format_millimeters(f64::INFINITY), "Infinity mm");
        assert_eq!(format_millimeters(f64::NEG_INFINITY), "-Infinity mm");
    }

    #[test]
    fn test_format_square_meters() {
        assert_eq!(format_square_meters(69.28203230275508), "69.28 m²");
        assert_eq!(format_square_meters(34.64101615137754), "34.64 m²");
        assert_eq!(format_square_meters(25.0), "25.00 m²");
        assert_eq!(format_square_meters(0.0), "0.00 m²");
        assert_eq!(format_square_meters(f64::NAN), "NaN m²");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_uses_binary_value() {
        // 1.005 is stored slightly below 1.005
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.006, 2), "1.01");
    }

    #[test]
    fn test_to_fixed_huge_values_use_exponent_form() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(-3.5e22, 2), "-3.5e+22");
        assert_eq!(to_fixed(9.99e20, 0), "999000000000000000000");
        assert_eq!(format_square_meters(2.5e21), "2.5e+21 m²");
    }

    #[test]
    fn test_to_fixed_negative_values() {
        assert_eq!(to_fixed(-3.14159, 2), "-3.14");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(6000.0), "6000");
        assert_eq!(format_number(30.5), "30.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-2500.0), "-2500");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-8), "1.5e-8");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(30.0), "30°");
        assert_eq!(format_degrees(22.5), "22.5°");
    }
}
