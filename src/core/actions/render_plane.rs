use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer_cancelable,
};
use crate::core::colour_mapping::hsb_rainbow::HsbRainbow;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::render_params::RenderParams;
use crate::core::data::render_result::RenderResult;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderPlaneError {
    Cancelled(Cancelled),
    Fractal(FractalError),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Fractal(err) => write!(f, "fractal error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderPlaneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Fractal(err) => Some(err),
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<Cancelled> for RenderPlaneError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<FractalError> for RenderPlaneError {
    fn from(err: FractalError) -> Self {
        Self::Fractal(err)
    }
}

impl From<GeneratePixelBufferCancelableError> for RenderPlaneError {
    fn from(err: GeneratePixelBufferCancelableError) -> Self {
        match err {
            GeneratePixelBufferCancelableError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferCancelableError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferCancelableError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Renders one panel: samples every pixel of `params` with the escape-time
/// iteration for `fractal`, then colours the counts with [`HsbRainbow`].
pub fn render_plane(params: &RenderParams, fractal: FractalKinds) -> Result<RenderResult, RenderPlaneError> {
    render_plane_cancelable(params, fractal, &NeverCancel)
}

/// Cancel-aware [`render_plane`].
///
/// [`RenderPlaneError::Cancelled`] means a newer request superseded this one
/// and should be dropped silently.
pub fn render_plane_cancelable<C: CancelToken>(
    params: &RenderParams,
    fractal: FractalKinds,
    cancel: &C,
) -> Result<RenderResult, RenderPlaneError> {
    let grid = SampleGrid::new(params);
    let algorithm = fractal.algorithm(params.max_iterations())?;
    let colour_map = HsbRainbow::new(params.max_iterations());

    let escape_counts = generate_fractal_parallel_rayon_cancelable(&grid, &algorithm, cancel)?;

    cancel.check()?;

    let buffer = generate_pixel_buffer_cancelable(
        escape_counts,
        &colour_map,
        grid.width(),
        grid.height(),
        cancel,
    )?;

    Ok(RenderResult::new(buffer, grid))
}
