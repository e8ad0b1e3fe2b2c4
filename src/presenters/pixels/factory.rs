use winit::{event_loop::EventLoopProxy, window::Window};

use crate::input::gui::{commands::ports::presenter_factory::GuiPresenterFactoryPort, errors::GuiError, events::GuiEvent};
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, event_loop_proxy)
    }
}
