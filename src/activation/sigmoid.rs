/// Slope applied to the argument of the logistic function.
pub const SLOPE: f64 = 0.5;

/// Sigmoid activation: `1 / (1 + e^(-0.5 x))`.
///
/// Maps every real input into the open interval (0, 1).
pub fn psi(x: f64) -> f64 {
    1.0 / (1.0 + (-SLOPE * x).exp())
}

/// Derivative used during backpropagation, written through the function's
/// own output: `psi(x) * (1 - psi(x))`.
///
/// Takes the pre-activation `x`, not the activated value.
pub fn dpsidx(x: f64) -> f64 {
    let fx = psi(x);
    fx * (1.0 - fx)
}
