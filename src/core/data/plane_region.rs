use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRegionError {
    NonFiniteBound,
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlaneRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound => write!(f, "plane region bounds must be finite numbers"),
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane region size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PlaneRegionError {}

/// Rectangle of the complex plane, `min_x..=max_x` on the real axis and
/// `min_y..=max_y` on the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl PlaneRegion {
    /// `(-2, 2, -1.6, 1.6)`: the whole Mandelbrot set with a little margin.
    pub const DEFAULT_VIEW: Self = Self {
        min_x: -2.0,
        max_x: 2.0,
        min_y: -1.6,
        max_y: 1.6,
    };

    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, PlaneRegionError> {
        if ![min_x, max_x, min_y, max_y].iter().all(|bound| bound.is_finite()) {
            return Err(PlaneRegionError::NonFiniteBound);
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlaneRegionError::InvalidSize { width, height });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
