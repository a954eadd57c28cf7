/// Squared Euclidean distance between a desired and an actual output.
pub fn squared_error(desired: &[f64], actual: &[f64]) -> f64 {
    desired
        .iter()
        .zip(actual)
        .map(|(d, a)| (d - a).powi(2))
        .sum()
}

/// Training-set error accumulator.
///
/// Each example's squared error is squared once more before it is summed, and
/// the reported value is the square root of that sum:
/// `sqrt(Σ_examples (Σ_i (d_i - a_i)^2)^2)`.
/// This is not an MSE or RMSE; callers comparing runs rely on this exact form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StackedSquaredError {
    total: f64,
}

impl StackedSquaredError {
    pub fn new() -> StackedSquaredError {
        StackedSquaredError::default()
    }

    /// Adds one example and returns its (single-squared) error.
    pub fn add(&mut self, desired: &[f64], actual: &[f64]) -> f64 {
        let err = squared_error(desired, actual);
        self.total += err * err;
        err
    }

    pub fn value(&self) -> f64 {
        self.total.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_error_sums_components() {
        assert_eq!(squared_error(&[1.0, 2.0], &[0.0, 0.0]), 5.0);
    }

    #[test]
    fn empty_accumulator_is_zero() {
        assert_eq!(StackedSquaredError::new().value(), 0.0);
    }

    #[test]
    fn errors_are_squared_twice() {
        let mut acc = StackedSquaredError::new();
        assert_eq!(acc.add(&[3.0], &[1.0]), 4.0);
        assert_eq!(acc.add(&[0.0, 0.0], &[1.0, 1.0]), 2.0);
        // sqrt(4^2 + 2^2)
        assert_eq!(acc.value(), 20.0f64.sqrt());
    }
}
