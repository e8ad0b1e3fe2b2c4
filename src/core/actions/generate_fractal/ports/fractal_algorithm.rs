use crate::core::data::complex::Complex;

/// Per-sample computation over the complex plane.
///
/// Implementations must be pure: the same point always yields the same value,
/// so samples can be computed in any order and on any thread.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, point: Complex) -> Self::Success;
}
