use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::viewer::form::{DrawForm, FormError};
use crate::controllers::viewer::layout::{Panel, ViewerLayout};
use crate::controllers::viewer::viewer_config::ViewerConfig;
use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::render_params::{RenderParams, RenderParamsError};
use crate::core::data::sample_grid::{PixelToComplexError, SampleGrid};
use crate::core::fractals::fractal_kinds::FractalKinds;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    Form(FormError),
    Params(RenderParamsError),
    Click(PixelToComplexError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{}", err),
            Self::Params(err) => write!(f, "invalid render parameters: {}", err),
            Self::Click(err) => write!(f, "click outside image: {}", err),
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::Click(err) => Some(err),
        }
    }
}

impl From<FormError> for RequestError {
    fn from(err: FormError) -> Self {
        Self::Form(err)
    }
}

impl From<RenderParamsError> for RequestError {
    fn from(err: RenderParamsError) -> Self {
        Self::Params(err)
    }
}

impl From<PixelToComplexError> for RequestError {
    fn from(err: PixelToComplexError) -> Self {
        Self::Click(err)
    }
}

/// Everything the viewer remembers between events, independent of any
/// windowing toolkit.
#[derive(Debug)]
pub struct ViewerState {
    pub form: DrawForm,
    julia_region: PlaneRegion,
    displayed_mandelbrot: Option<SampleGrid>,
    panel_sizes: Option<[(u32, u32); 2]>,
    user_point: Complex,
    point_label: String,
    status: Option<String>,
    presented_mandelbrot_generation: u64,
    presented_julia_generation: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ViewerState {
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        let user_point = Complex::default();

        Self {
            form: DrawForm::from_config(config),
            julia_region: config.julia_region,
            displayed_mandelbrot: None,
            panel_sizes: None,
            user_point,
            point_label: user_point.to_string(),
            status: None,
            presented_mandelbrot_generation: 0,
            presented_julia_generation: 0,
        }
    }

    #[must_use]
    pub fn user_point(&self) -> Complex {
        self.user_point
    }

    #[must_use]
    pub fn point_label(&self) -> &str {
        &self.point_label
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Reads the form and builds a Mandelbrot request sized to the panel.
    pub fn draw_request(&self, panel_size: (u32, u32)) -> Result<RenderRequest, RequestError> {
        let values = self.form.parse()?;
        let (width, height) = panel_size;

        Ok(RenderRequest {
            params: RenderParams::new(width, height, values.region, values.max_iterations)?,
            fractal: FractalKinds::Mandelbrot,
        })
    }

    /// Handles a click at `local`, relative to the Mandelbrot panel.
    ///
    /// Returns `Ok(None)` while no Mandelbrot frame is displayed. Otherwise
    /// the click is translated with the grid of the displayed frame, becomes
    /// the user-selected point, and seeds a Julia request over the fixed
    /// Julia region. The iteration cap is read from the form now.
    pub fn click(&mut self, local: Point, julia_size: (u32, u32)) -> Result<Option<RenderRequest>, RequestError> {
        let Some(grid) = self.displayed_mandelbrot else {
            return Ok(None);
        };

        let seed = grid.pixel_to_complex(local)?;
        self.user_point = seed;
        self.point_label = seed.to_string();

        let max_iterations = self.form.parse_max_iterations()?;
        let (width, height) = julia_size;

        Ok(Some(RenderRequest {
            params: RenderParams::new(width, height, self.julia_region, max_iterations)?,
            fractal: FractalKinds::Julia { seed },
        }))
    }

    fn presented_generation_mut(&mut self, panel: Panel) -> &mut u64 {
        match panel {
            Panel::Mandelbrot => &mut self.presented_mandelbrot_generation,
            Panel::Julia => &mut self.presented_julia_generation,
        }
    }

    /// Decides whether a finished frame may be shown.
    ///
    /// Frames older than the one on screen, or rendered for a panel size that
    /// has since changed, are rejected. An accepted Mandelbrot frame becomes
    /// the reference for click translation.
    pub fn accept_frame(
        &mut self,
        panel: Panel,
        generation: u64,
        grid: &SampleGrid,
        panel_size: (u32, u32),
    ) -> bool {
        let presented = self.presented_generation_mut(panel);

        if generation <= *presented || (grid.width(), grid.height()) != panel_size {
            return false;
        }

        *presented = generation;

        if panel == Panel::Mandelbrot {
            self.displayed_mandelbrot = Some(*grid);
        }

        true
    }

    /// Forgets the displayed Mandelbrot frame.
    pub fn discard_frames(&mut self) {
        self.displayed_mandelbrot = None;
    }

    /// Takes the panel sizes of a new surface layout. Displayed frames are
    /// discarded only if a panel changed size; returns whether one did.
    pub fn relayout(&mut self, layout: Option<&ViewerLayout>) -> bool {
        let panel_sizes = layout.map(|layout| Panel::ALL.map(|panel| layout.panel_size(panel)));

        if panel_sizes == self.panel_sizes {
            return false;
        }

        self.panel_sizes = panel_sizes;
        self.discard_frames();

        true
    }
}
