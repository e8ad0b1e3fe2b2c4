use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::escape_time::escape_time;

/// Escape time of `z ← z² + seed` with the sampled point as the orbit's start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    seed: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, point: Complex) -> Self::Success {
        escape_time(point, self.seed, self.max_iterations)
    }
}

impl JuliaAlgorithm {
    pub fn new(seed: Complex, max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::ZeroMaxIterationsError);
        }

        Ok(Self {
            seed,
            max_iterations,
        })
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constructor() {
        let algorithm = JuliaAlgorithm::new(Complex::new(-0.7, 0.27), 256);

        assert!(algorithm.is_ok());
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            JuliaAlgorithm::new(Complex::new(-0.7, 0.27), 0),
            Err(FractalError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_zero_seed_fills_the_unit_disc() {
        // With seed 0 the Julia set is the unit circle: inside stays, outside escapes
        let algorithm = JuliaAlgorithm::new(Complex::new(0.0, 0.0), 50).unwrap();

        assert_eq!(algorithm.compute(Complex::new(0.5, 0.5)), 50);
        assert!(algorithm.compute(Complex::new(1.1, 0.0)) < 50);
    }

    #[test]
    fn test_seed_differs_from_mandelbrot_constant() {
        let algorithm = JuliaAlgorithm::new(Complex::new(1.0, 0.0), 100).unwrap();

        // The Mandelbrot orbit of 0 never escapes, but with seed 1 it does
        assert_eq!(algorithm.compute(Complex::new(0.0, 0.0)), 2);
    }
}
