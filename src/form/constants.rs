/// Upper bound of the grams input.
pub const GRAMS_MAX: f64 = 1000.0;

/// Upper bound of the calories input.
pub const CALORIES_MAX: f64 = 2000.0;

/// Both numeric inputs move in increments of this size.
pub const INPUT_STEP: f64 = 5.0;

/// Alert text shown when submitting without a food name.
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a food name";

/// Snap a raw input to the nearest step and clamp it into `[0, max]`.
///
/// Non-finite input collapses to 0.
pub fn snap_to_step(value: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let snapped = (value / INPUT_STEP).round() * INPUT_STEP;
    snapped.clamp(0.0, max)
}
