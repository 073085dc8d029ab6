//! Rounding helpers shared by metric derivation, baseline comparison and display.
//!
//! Every rounding decision in the workspace goes through this module. Values
//! are rounded by their exact binary value, and only exact ties go to the
//! even neighbour, so derived values agree with the figures the baseline
//! profiles were sampled with.

/// Rounds `value` to the provided number of decimal places.
///
/// `0.35` is stored slightly below 35 hundredths and rounds to `0.3`, even
/// though `0.35 * 10` evaluates to exactly `3.5`.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    let scaled = value * scale;
    // exact remainder of the multiplication
    let error = value.mul_add(scale, -scaled);

    let mut rounded = scaled.round_ties_even();
    if (scaled - scaled.trunc()).abs() == 0.5 && error != 0.0 {
        rounded = if error > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        };
    }
    normalize_zero(rounded / scale)
}

/// Rounds `value` to the nearest whole number.
#[must_use]
pub fn round_whole(value: f64) -> f64 {
    normalize_zero(value.round_ties_even())
}

/// Divides `numerator` by `denominator`, yielding zero when the divisor is zero.
#[must_use]
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

// -0.0 would otherwise leak into the display layer as "-0".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
