use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::{PixelToComplexError, SampleGrid};

/// A finished render: the image plus the grid it was sampled on.
///
/// The grid travels with the image so a later click is translated with the
/// steps that produced what is on screen, not whatever was rendered since.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    buffer: PixelBuffer,
    grid: SampleGrid,
}

impl RenderResult {
    #[must_use]
    pub fn new(buffer: PixelBuffer, grid: SampleGrid) -> Self {
        Self { buffer, grid }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    #[must_use]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    #[must_use]
    pub fn region(&self) -> PlaneRegion {
        self.grid.region()
    }

    #[must_use]
    pub fn step_x(&self) -> f64 {
        self.grid.step_x()
    }

    #[must_use]
    pub fn step_y(&self) -> f64 {
        self.grid.step_y()
    }

    pub fn pixel_to_complex(&self, point: Point) -> Result<Complex, PixelToComplexError> {
        self.grid.pixel_to_complex(point)
    }
}
