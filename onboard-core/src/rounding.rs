/// Rounds `value` to `digits` decimal places, with ties going to the even neighbour.
///
/// Non-finite values pass through unchanged.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10_f64.powi(digits);
    (value * scale).round_ties_even() / scale
}
