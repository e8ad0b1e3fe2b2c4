use crate::core::data::plane_region::PlaneRegion;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderParamsError {
    ZeroMaxIterations,
    ZeroDimensions { width: u32, height: u32 },
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::ZeroDimensions { width, height } => {
                write!(f, "render size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RenderParamsError {}

/// Everything a single render needs, read fresh from the viewer for each request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    width: u32,
    height: u32,
    region: PlaneRegion,
    max_iterations: u32,
}

impl RenderParams {
    pub fn new(
        width: u32,
        height: u32,
        region: PlaneRegion,
        max_iterations: u32,
    ) -> Result<Self, RenderParamsError> {
        if max_iterations == 0 {
            return Err(RenderParamsError::ZeroMaxIterations);
        }

        if width == 0 || height == 0 {
            return Err(RenderParamsError::ZeroDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            region,
            max_iterations,
        })
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
