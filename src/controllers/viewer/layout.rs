use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BORDER_WIDTH: u32 = 2;
pub const BORDER_COLOUR: Colour = Colour::WHITE;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Panel {
    Mandelbrot,
    Julia,
}

impl Panel {
    pub const ALL: [Self; 2] = [Self::Mandelbrot, Self::Julia];

    /// Fill shown until the panel's first frame arrives.
    #[must_use]
    pub const fn placeholder_colour(self) -> Colour {
        match self {
            Self::Mandelbrot => Colour::BLACK,
            Self::Julia => Colour::BLUE,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayoutError {
    SurfaceTooSmall {
        width: u32,
        height: u32,
        controls_height: u32,
    },
    PixelRect(PixelRectError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceTooSmall {
                width,
                height,
                controls_height,
            } => write!(
                f,
                "{}x{} surface leaves no room for two panels above {}px of controls",
                width, height, controls_height
            ),
            Self::PixelRect(err) => write!(f, "panel rect error: {}", err),
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::SurfaceTooSmall { .. } => None,
        }
    }
}

impl From<PixelRectError> for LayoutError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PanelRects {
    frame: PixelRect,
    inner: PixelRect,
}

/// Where the two panels sit on the drawing surface.
///
/// The surface is split into equal halves above the controls strip, Mandelbrot
/// on the left and Julia on the right. Each half is framed by a
/// [`BORDER_WIDTH`] border and the inside of the frame is what gets rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewerLayout {
    surface_width: u32,
    surface_height: u32,
    mandelbrot: PanelRects,
    julia: PanelRects,
}

impl ViewerLayout {
    pub fn new(surface_width: u32, surface_height: u32, controls_height: u32) -> Result<Self, LayoutError> {
        let frame_width = surface_width / 2;
        let frame_height = surface_height.saturating_sub(controls_height);
        let inner_width = frame_width.saturating_sub(2 * BORDER_WIDTH);
        let inner_height = frame_height.saturating_sub(2 * BORDER_WIDTH);

        if inner_width == 0 || inner_height == 0 {
            return Err(LayoutError::SurfaceTooSmall {
                width: surface_width,
                height: surface_height,
                controls_height,
            });
        }

        let panel_rects = |left: u32| -> Result<PanelRects, LayoutError> {
            Ok(PanelRects {
                frame: PixelRect::from_origin_and_size(
                    Point {
                        x: left as i32,
                        y: 0,
                    },
                    frame_width,
                    frame_height,
                )?,
                inner: PixelRect::from_origin_and_size(
                    Point {
                        x: (left + BORDER_WIDTH) as i32,
                        y: BORDER_WIDTH as i32,
                    },
                    inner_width,
                    inner_height,
                )?,
            })
        };

        Ok(Self {
            surface_width,
            surface_height,
            mandelbrot: panel_rects(0)?,
            julia: panel_rects(frame_width)?,
        })
    }

    #[must_use]
    pub fn surface_width(&self) -> u32 {
        self.surface_width
    }

    #[must_use]
    pub fn surface_height(&self) -> u32 {
        self.surface_height
    }

    fn rects(&self, panel: Panel) -> &PanelRects {
        match panel {
            Panel::Mandelbrot => &self.mandelbrot,
            Panel::Julia => &self.julia,
        }
    }

    /// The rendered area of `panel`, in surface coordinates.
    #[must_use]
    pub fn panel_rect(&self, panel: Panel) -> PixelRect {
        self.rects(panel).inner
    }

    /// `panel_rect` plus its border.
    #[must_use]
    pub fn frame_rect(&self, panel: Panel) -> PixelRect {
        self.rects(panel).frame
    }

    #[must_use]
    pub fn panel_size(&self, panel: Panel) -> (u32, u32) {
        let rect = self.panel_rect(panel);
        (rect.width(), rect.height())
    }

    /// Finds the panel under a surface position and returns the position
    /// relative to that panel's rendered area. Borders and controls miss.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<(Panel, Point)> {
        Panel::ALL.into_iter().find_map(|panel| {
            let rect = self.panel_rect(panel);
            rect.contains_point(point)
                .then(|| (panel, rect.to_local(point)))
        })
    }
}
