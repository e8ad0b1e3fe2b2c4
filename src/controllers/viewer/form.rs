use crate::controllers::viewer::viewer_config::ViewerConfig;
use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormField {
    MaxIterations,
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl FormField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MaxIterations => "Max Iterations",
            Self::MinX => "Min X Axis Plot",
            Self::MaxX => "Max X Axis Plot",
            Self::MinY => "Min Y Axis Plot",
            Self::MaxY => "Max Y Axis Plot",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    InvalidNumber { field: FormField, text: String },
    ZeroMaxIterations,
    InvalidRegion(PlaneRegionError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { field, text } => {
                write!(f, "{}: \"{}\" is not a valid number", field.label(), text)
            }
            Self::ZeroMaxIterations => {
                write!(f, "{} must be greater than zero", FormField::MaxIterations.label())
            }
            Self::InvalidRegion(err) => write!(f, "invalid plot bounds: {}", err),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaneRegionError> for FormError {
    fn from(err: PlaneRegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

/// Validated contents of the draw form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FormValues {
    pub region: PlaneRegion,
    pub max_iterations: u32,
}

/// The editable text behind the controls strip.
///
/// Text is kept verbatim so the user can type freely; it is only parsed when
/// a draw or a click needs the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawForm {
    pub max_iterations: String,
    pub min_x: String,
    pub max_x: String,
    pub min_y: String,
    pub max_y: String,
}

impl DrawForm {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        let region = config.mandelbrot_region;

        Self {
            max_iterations: config.max_iterations.to_string(),
            min_x: region.min_x().to_string(),
            max_x: region.max_x().to_string(),
            min_y: region.min_y().to_string(),
            max_y: region.max_y().to_string(),
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::MaxIterations => &mut self.max_iterations,
            FormField::MinX => &mut self.min_x,
            FormField::MaxX => &mut self.max_x,
            FormField::MinY => &mut self.min_y,
            FormField::MaxY => &mut self.max_y,
        }
    }

    pub fn parse_max_iterations(&self) -> Result<u32, FormError> {
        let max_iterations = self
            .max_iterations
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidNumber {
                field: FormField::MaxIterations,
                text: self.max_iterations.clone(),
            })?;

        if max_iterations == 0 {
            return Err(FormError::ZeroMaxIterations);
        }

        Ok(max_iterations)
    }

    pub fn parse_region(&self) -> Result<PlaneRegion, FormError> {
        let min_x = parse_bound(FormField::MinX, &self.min_x)?;
        let max_x = parse_bound(FormField::MaxX, &self.max_x)?;
        let min_y = parse_bound(FormField::MinY, &self.min_y)?;
        let max_y = parse_bound(FormField::MaxY, &self.max_y)?;

        Ok(PlaneRegion::new(min_x, max_x, min_y, max_y)?)
    }

    pub fn parse(&self) -> Result<FormValues, FormError> {
        Ok(FormValues {
            max_iterations: self.parse_max_iterations()?,
            region: self.parse_region()?,
        })
    }
}

impl Default for DrawForm {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

fn parse_bound(field: FormField, text: &str) -> Result<f64, FormError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}
