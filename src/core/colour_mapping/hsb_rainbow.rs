use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::hsb::hsb_to_rgb;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Colours escape counts as hues: `iterations / max_iterations` at full
/// saturation and brightness. Points that never escaped are black.
///
/// Hues are quantised to 8-bit channels, so neighbouring counts share a
/// colour once `max_iterations` is large. Above about 3060 iterations even
/// `max_iterations - 1` rounds to the same red as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsbRainbow {
    max_iterations: u32,
}

pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

impl ColourMap<u32> for HsbRainbow {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        if iterations > self.max_iterations {
            return Err(Box::new(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        // equality, not >=: the evaluator returns exactly max_iterations for interior points
        if iterations == self.max_iterations {
            return Ok(INTERIOR_COLOUR);
        }

        let hue = iterations as f32 / self.max_iterations as f32;

        Ok(hsb_to_rgb(hue, 1.0, 1.0))
    }

    fn display_name(&self) -> &str {
        "HSB rainbow"
    }
}

impl HsbRainbow {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
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
    fn test_map_returns_black_at_max_iterations() {
        for max_iterations in [1, 2, 100, 5000] {
            let mapper = HsbRainbow::new(max_iterations);

            assert_eq!(mapper.map(max_iterations).unwrap(), Colour::BLACK);
        }
    }

    #[test]
    fn test_map_zero_iterations_is_red() {
        let mapper = HsbRainbow::new(100);

        assert_eq!(mapper.map(0).unwrap(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_first_and_last_escape_counts_differ() {
        for max_iterations in [2, 3, 100, 1000, 3000] {
            let mapper = HsbRainbow::new(max_iterations);

            assert_ne!(
                mapper.map(0).unwrap(),
                mapper.map(max_iterations - 1).unwrap(),
                "max_iterations = {}",
                max_iterations
            );
        }
    }

    #[test]
    fn test_last_escape_count_wraps_to_red_for_large_caps() {
        let below = HsbRainbow::new(3000);
        assert_eq!(below.map(2999).unwrap(), Colour { r: 255, g: 0, b: 1 });
        assert_ne!(below.map(0).unwrap(), below.map(2999).unwrap());

        for max_iterations in [3100, 5000, 100_000] {
            let mapper = HsbRainbow::new(max_iterations);

            assert_eq!(
                mapper.map(max_iterations - 1).unwrap(),
                mapper.map(0).unwrap(),
                "max_iterations = {}",
                max_iterations
            );
        }
    }

    #[test]
    fn test_escaped_points_are_never_black() {
        let mapper = HsbRainbow::new(256);

        for iterations in 0..256 {
            assert_ne!(mapper.map(iterations).unwrap(), Colour::BLACK);
        }
    }

    #[test]
    fn test_map_third_is_green() {
        let mapper = HsbRainbow::new(3);

        assert_eq!(mapper.map(1).unwrap(), Colour { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn test_map_rejects_iterations_above_max() {
        let mapper = HsbRainbow::new(10);
        let err = mapper.map(11).unwrap_err();

        assert_eq!(err.to_string(), "iterations 11 exceeds maximum 10");
    }
}
