use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::escape_time::escape_time;

/// Escape time of `z ← z² + c` where the added constant is the sampled point itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, point: Complex) -> Self::Success {
        escape_time(point, point, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
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
        let algorithm = MandelbrotAlgorithm::new(256);

        assert!(algorithm.is_ok());
        assert_eq!(algorithm.unwrap().max_iterations(), 256);
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(FractalError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_known_points() {
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();

        assert_eq!(algorithm.compute(Complex::new(0.0, 0.0)), 100);
        assert_eq!(algorithm.compute(Complex::new(-1.0, 0.0)), 100);
        assert_eq!(algorithm.compute(Complex::new(3.0, 0.0)), 0);
    }

    #[test]
    fn test_set_is_symmetric_about_real_axis() {
        let algorithm = MandelbrotAlgorithm::new(200).unwrap();

        for (real, imag) in [(-0.75, 0.1), (0.3, 0.5), (-1.25, 0.2), (0.26, 0.01)] {
            assert_eq!(
                algorithm.compute(Complex::new(real, imag)),
                algorithm.compute(Complex::new(real, -imag))
            );
        }
    }
}
