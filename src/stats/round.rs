//! Decimal rounding applied to reported fields.

/// Round `value` to `places` decimals, half away from zero.
///
/// Negative zero is normalised to `0.0` so serialised output never shows `-0.0`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    rounded + 0.0
}
