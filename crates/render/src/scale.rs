//! Slide scaling math.
//!
//! Slides are authored against a fixed design box and scaled as a whole to
//! fit the measured container, so layout never reflows with the viewport.

/// Width of the design box slides are authored against, in CSS pixels.
pub const DESIGN_WIDTH: f64 = 1000.0;

/// Height of the design box, in CSS pixels.
pub const DESIGN_HEIGHT: f64 = 600.0;

/// Margin factor keeping a fitted slide off the container edges.
const FIT_MARGIN: f64 = 0.9;

/// Scale factor that fits the design box into a `width` by `height`
/// container with a small margin.
///
/// Never negative; degenerate containers (zero, negative, or NaN
/// dimensions) produce 0.
pub fn fit_scale(width: f64, height: f64) -> f64 {
    // f64::min keeps the non-NaN operand, so NaN has to be rejected here.
    if width.is_nan() || height.is_nan() {
        return 0.0;
    }
    let fit = (width / DESIGN_WIDTH).min(height / DESIGN_HEIGHT);
    (fit * FIT_MARGIN).max(0.0)
}
