use clap::Parser;

use crate::controllers::viewer::viewer_config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, ViewerConfig,
};
use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};

/// Startup overrides for the viewer window and the initial form values.
#[derive(Debug, Parser)]
#[command(
    name = "viewer",
    about = "Mandelbrot and Julia set viewer",
    version
)]
pub struct ViewerArgs {
    /// Initial "Max Iterations" value
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Initial "Min X Axis Plot" value
    #[arg(long, allow_negative_numbers = true, default_value_t = PlaneRegion::DEFAULT_VIEW.min_x())]
    pub min_x: f64,

    /// Initial "Max X Axis Plot" value
    #[arg(long, allow_negative_numbers = true, default_value_t = PlaneRegion::DEFAULT_VIEW.max_x())]
    pub max_x: f64,

    /// Initial "Min Y Axis Plot" value
    #[arg(long, allow_negative_numbers = true, default_value_t = PlaneRegion::DEFAULT_VIEW.min_y())]
    pub min_y: f64,

    /// Initial "Max Y Axis Plot" value
    #[arg(long, allow_negative_numbers = true, default_value_t = PlaneRegion::DEFAULT_VIEW.max_y())]
    pub max_y: f64,

    /// Window width in logical pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub height: u32,
}

impl ViewerArgs {
    pub fn into_config(self) -> Result<ViewerConfig, PlaneRegionError> {
        Ok(ViewerConfig {
            window_width: self.width,
            window_height: self.height,
            max_iterations: self.iterations,
            mandelbrot_region: PlaneRegion::new(self.min_x, self.max_x, self.min_y, self.max_y)?,
            ..ViewerConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_default_config() {
        let args = ViewerArgs::try_parse_from(["viewer"]).unwrap();

        assert_eq!(args.into_config().unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_negative_bounds_and_overrides() {
        let args = ViewerArgs::try_parse_from([
            "viewer",
            "--iterations",
            "500",
            "--min-x",
            "-0.8",
            "--max-x",
            "-0.7",
            "--min-y",
            "0.05",
            "--max-y",
            "0.15",
            "--width",
            "1200",
        ])
        .unwrap();

        let config = args.into_config().unwrap();

        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.window_height, 750);
        assert_eq!(config.mandelbrot_region.min_x(), -0.8);
        assert_eq!(config.mandelbrot_region.max_y(), 0.15);
        assert_eq!(config.julia_region, PlaneRegion::DEFAULT_VIEW);
    }

    #[test]
    fn test_zero_iterations_rejected_by_parser() {
        assert!(ViewerArgs::try_parse_from(["viewer", "--iterations", "0"]).is_err());
    }

    #[test]
    fn test_inverted_region_rejected() {
        let args =
            ViewerArgs::try_parse_from(["viewer", "--min-x", "1", "--max-x", "-1"]).unwrap();

        assert!(matches!(
            args.into_config(),
            Err(PlaneRegionError::InvalidSize { .. })
        ));
    }
}
