use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParams;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexError {
    PointOutsideGrid { point: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelToComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} sample grid",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexError {}

/// Mapping between pixel columns/rows and plane coordinates for one render.
///
/// Column `col` samples `min_x + col * step_x` and row `row` samples
/// `max_y - row * step_y`, so row 0 is the top of the display. The grid has
/// exactly `width` columns and `height` rows; samples never run past the
/// buffer no matter how the steps accumulate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    region: PlaneRegion,
    step_x: f64,
    step_y: f64,
}

impl SampleGrid {
    #[must_use]
    pub fn new(params: &RenderParams) -> Self {
        let region = params.region();
        let width = params.width();
        let height = params.height();

        Self {
            width,
            height,
            region,
            step_x: region.width().abs() / f64::from(width),
            step_y: region.height().abs() / f64::from(height),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn region(&self) -> PlaneRegion {
        self.region
    }

    #[must_use]
    pub fn step_x(&self) -> f64 {
        self.step_x
    }

    #[must_use]
    pub fn step_y(&self) -> f64 {
        self.step_y
    }

    #[inline]
    #[must_use]
    pub fn sample_point(&self, column: u32, row: u32) -> Complex {
        Complex {
            real: self.region.min_x() + f64::from(column) * self.step_x,
            imag: self.region.max_y() - f64::from(row) * self.step_y,
        }
    }

    #[must_use]
    pub fn contains_pixel(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Translates a pixel of this grid back into the plane coordinate it sampled.
    pub fn pixel_to_complex(&self, point: Point) -> Result<Complex, PixelToComplexError> {
        if !self.contains_pixel(point) {
            return Err(PixelToComplexError::PointOutsideGrid {
                point,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.sample_point(point.x as u32, point.y as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn create_grid(width: u32, height: u32, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> SampleGrid {
        let region = PlaneRegion::new(min_x, max_x, min_y, max_y).unwrap();
        let params = RenderParams::new(width, height, region, 100).unwrap();

        SampleGrid::new(&params)
    }

    #[test]
    fn test_steps_are_region_size_over_pixel_count() {
        let grid = create_grid(100, 80, -2.0, 2.0, -1.6, 1.6);

        assert!((grid.step_x() - 0.04).abs() < EPSILON);
        assert!((grid.step_y() - 0.04).abs() < EPSILON);
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let grid = create_grid(100, 100, -2.0, 1.0, -1.0, 1.0);

        let result = grid.pixel_to_complex(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, 1.0);
    }

    #[test]
    fn test_pixel_to_complex_last_pixel_stops_one_step_short_of_max() {
        let grid = create_grid(100, 100, -2.0, 2.0, -1.6, 1.6);

        let result = grid.pixel_to_complex(Point { x: 99, y: 99 }).unwrap();

        assert!((result.real - (2.0 - grid.step_x())).abs() < EPSILON);
        assert!((result.imag - (-1.6 + grid.step_y())).abs() < EPSILON);
    }

    #[test]
    fn test_imaginary_part_decreases_down_the_rows() {
        let grid = create_grid(10, 10, -1.0, 1.0, -1.0, 1.0);

        let upper = grid.sample_point(3, 2);
        let lower = grid.sample_point(3, 7);

        assert!(upper.imag > lower.imag);
        assert_eq!(upper.real, lower.real);
    }

    #[test]
    fn test_center_pixel_of_symmetric_region_is_origin() {
        let grid = create_grid(100, 100, -1.0, 1.0, -1.0, 1.0);

        let result = grid.pixel_to_complex(Point { x: 50, y: 50 }).unwrap();

        assert!(result.real.abs() < EPSILON);
        assert!(result.imag.abs() < EPSILON);
    }

    #[test]
    fn test_pixel_outside_grid_fails() {
        let grid = create_grid(100, 100, -1.0, 1.0, -1.0, 1.0);
        let past_edge = Point { x: 100, y: 10 };
        let negative = Point { x: -1, y: 10 };

        assert_eq!(
            grid.pixel_to_complex(past_edge),
            Err(PixelToComplexError::PointOutsideGrid {
                point: past_edge,
                width: 100,
                height: 100
            })
        );
        assert_eq!(
            grid.pixel_to_complex(negative),
            Err(PixelToComplexError::PointOutsideGrid {
                point: negative,
                width: 100,
                height: 100
            })
        );
    }
}
