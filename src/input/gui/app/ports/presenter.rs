use std::sync::Arc;

use egui::Context as EguiContext;

use crate::adapters::pixel_format::BlitError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::viewer::layout::{Panel, ViewerLayout};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::errors::GuiError;

/// What the GUI app needs from whatever puts pixels on screen.
pub trait GuiPresenterPort {
    /// Port handed to the render controller of `panel`.
    fn share_adapter(&self, panel: Panel) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn take_render_event(&self, panel: Panel) -> Option<RenderEvent>;
    /// Draws `image` into `panel` and keeps it for redrawing after a resize.
    fn show_frame(&mut self, panel: Panel, image: PixelBuffer) -> Result<(), BlitError>;
    /// Resizes the surface and redraws borders. With `keep_frames` the last
    /// shown images are drawn again, otherwise both panels get their
    /// placeholder. `None` means the window is too small for panels.
    fn resize(
        &mut self,
        width: u32,
        height: u32,
        layout: Option<ViewerLayout>,
        keep_frames: bool,
    ) -> Result<(), GuiError>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
}
