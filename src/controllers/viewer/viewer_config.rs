use crate::core::data::plane_region::PlaneRegion;

pub const DEFAULT_WINDOW_WIDTH: u32 = 850;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 750;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Startup settings for the two-panel viewer.
///
/// `max_iterations` and `mandelbrot_region` only seed the form; whatever the
/// user types afterwards wins. `julia_region` never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub max_iterations: u32,
    pub mandelbrot_region: PlaneRegion,
    pub julia_region: PlaneRegion,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            mandelbrot_region: PlaneRegion::DEFAULT_VIEW,
            julia_region: PlaneRegion::DEFAULT_VIEW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();

        assert_eq!(config.window_width, 850);
        assert_eq!(config.window_height, 750);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.mandelbrot_region.min_x(), -2.0);
        assert_eq!(config.mandelbrot_region.max_x(), 2.0);
        assert_eq!(config.mandelbrot_region.min_y(), -1.6);
        assert_eq!(config.mandelbrot_region.max_y(), 1.6);
        assert_eq!(config.julia_region, PlaneRegion::DEFAULT_VIEW);
    }
}
