use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Which quadratic escape-time family to render.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia {
        seed: Complex,
    },
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    pub fn algorithm(self, max_iterations: u32) -> Result<EscapeTimeAlgorithm, FractalError> {
        Ok(match self {
            Self::Mandelbrot => EscapeTimeAlgorithm::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            Self::Julia { seed } => EscapeTimeAlgorithm::Julia(JuliaAlgorithm::new(seed, max_iterations)?),
        })
    }
}

/// Static dispatch over the concrete algorithms so render code stays generic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeAlgorithm {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, point: Complex) -> Self::Success {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.compute(point),
            Self::Julia(algorithm) => algorithm.compute(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mandelbrot() {
        assert_eq!(FractalKinds::default(), FractalKinds::Mandelbrot);
    }

    #[test]
    fn display_names() {
        assert_eq!(FractalKinds::Mandelbrot.display_name(), "Mandelbrot");
        assert_eq!(
            FractalKinds::Julia {
                seed: Complex::default()
            }
            .display_name(),
            "Julia"
        );
    }

    #[test]
    fn algorithm_matches_kind() {
        let seed = Complex::new(-0.4, 0.6);

        assert!(matches!(
            FractalKinds::Mandelbrot.algorithm(10),
            Ok(EscapeTimeAlgorithm::Mandelbrot(_))
        ));
        assert!(matches!(
            FractalKinds::Julia { seed }.algorithm(10),
            Ok(EscapeTimeAlgorithm::Julia(julia)) if julia.seed() == seed
        ));
    }

    #[test]
    fn algorithm_rejects_zero_max_iterations() {
        assert_eq!(
            FractalKinds::Mandelbrot.algorithm(0),
            Err(FractalError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn dispatch_matches_concrete_algorithm() {
        let point = Complex::new(-0.1, 0.65);
        let seed = Complex::new(0.285, 0.01);
        let mandelbrot = MandelbrotAlgorithm::new(80).unwrap();
        let julia = JuliaAlgorithm::new(seed, 80).unwrap();

        assert_eq!(
            FractalKinds::Mandelbrot.algorithm(80).unwrap().compute(point),
            mandelbrot.compute(point)
        );
        assert_eq!(
            FractalKinds::Julia { seed }.algorithm(80).unwrap().compute(point),
            julia.compute(point)
        );
    }
}
