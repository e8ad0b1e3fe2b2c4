use std::sync::Arc;
use std::time::Duration;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, trace, warn};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::viewer::form::FormField;
use crate::controllers::viewer::layout::{Panel, ViewerLayout};
use crate::controllers::viewer::state::ViewerState;
use crate::controllers::viewer::viewer_config::ViewerConfig;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

/// Height of the controls strip in logical pixels.
pub const CONTROLS_HEIGHT: f32 = 120.0;

const BOUND_FIELD_ROWS: [[FormField; 2]; 2] = [
    [FormField::MinX, FormField::MaxX],
    [FormField::MinY, FormField::MaxY],
];

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    scale_factor: f64,
    surface_size: (u32, u32),
    layout: Option<ViewerLayout>,
    presenter: T,
    mandelbrot_controller: InteractiveController,
    julia_controller: InteractiveController,
    state: ViewerState,
    cursor: Option<Point>,
    last_render_duration: Option<Duration>,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        config: &ViewerConfig,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let mandelbrot_controller =
            InteractiveController::new(Panel::Mandelbrot.name(), presenter.share_adapter(Panel::Mandelbrot));
        let julia_controller =
            InteractiveController::new(Panel::Julia.name(), presenter.share_adapter(Panel::Julia));

        let mut app = Self {
            window,
            scale_factor,
            surface_size: (0, 0),
            layout: None,
            presenter,
            mandelbrot_controller,
            julia_controller,
            state: ViewerState::new(config),
            cursor: None,
            last_render_duration: None,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        };

        app.resize(size.width, size.height)?;

        Ok(app)
    }

    fn controls_height(&self) -> u32 {
        (f64::from(CONTROLS_HEIGHT) * self.scale_factor).ceil() as u32
    }

    /// Runs the event loop. Does not return until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), GuiError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if self.drain_render_events() {
                    self.redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // Forward event to egui first
                let egui_response = self.egui_state.on_window_event(window, event);

                if egui_response.repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.mandelbrot_controller.shutdown();
                        self.julia_controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        self.redraw_pending = false;

                        let egui_output = self.update_ui();

                        if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!("resize failed: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.scale_factor = *scale_factor;
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!("resize failed: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.cursor = Some(to_point(*position));
                    }
                    WindowEvent::CursorLeft { .. } => {
                        self.cursor = None;
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !egui_response.consumed => {
                        if let Some(position) = self.cursor {
                            self.handle_click(position);
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // Only request redraw if state changed
                if self.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }

    /// Resizes the surface. Displayed frames survive unless a panel changed
    /// size, since their pixel grid would no longer match it.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.layout = match ViewerLayout::new(width, height, self.controls_height()) {
            Ok(layout) => Some(layout),
            Err(err) => {
                debug!("no room for panels: {err}");
                None
            }
        };

        let panels_changed = self.state.relayout(self.layout.as_ref());

        if !panels_changed && (width, height) == self.surface_size {
            trace!("resize to the current {}x{} surface ignored", width, height);
            return Ok(());
        }

        if let Some(layout) = self.layout {
            debug!(
                "resized to {}x{}, panels {:?}",
                width,
                height,
                layout.panel_size(Panel::Mandelbrot)
            );
        }

        self.surface_size = (width, height);
        self.presenter.resize(width, height, self.layout, !panels_changed)?;
        self.redraw_pending = true;

        Ok(())
    }

    /// Parses the form and submits a Mandelbrot render.
    pub fn draw(&mut self) {
        let Some(layout) = self.layout else {
            self.state.set_status("window too small to draw");
            return;
        };

        match self.state.draw_request(layout.panel_size(Panel::Mandelbrot)) {
            Ok(request) => {
                self.state.clear_status();
                self.mandelbrot_controller.submit_request(Arc::new(request));
            }
            Err(err) => {
                debug!("draw rejected: {err}");
                self.state.set_status(err.to_string());
            }
        }
    }

    fn handle_click(&mut self, position: Point) {
        let Some(layout) = self.layout else {
            return;
        };

        let Some((Panel::Mandelbrot, local)) = layout.hit_test(position) else {
            return;
        };

        match self.state.click(local, layout.panel_size(Panel::Julia)) {
            Ok(Some(request)) => {
                debug!("clicked {:?}, julia seed {}", local, self.state.user_point());
                self.state.clear_status();
                self.julia_controller.submit_request(Arc::new(request));
            }
            Ok(None) => {
                debug!("click ignored: no mandelbrot image yet");
            }
            Err(err) => {
                debug!("click rejected: {err}");
                self.state.set_status(err.to_string());
            }
        }

        self.redraw_pending = true;
    }

    /// Shows whatever the render workers finished. Returns true if anything changed.
    fn drain_render_events(&mut self) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };

        let mut changed = false;

        for panel in Panel::ALL {
            let Some(event) = self.presenter.take_render_event(panel) else {
                continue;
            };

            trace!("{}: received generation {}", panel.name(), event.generation());

            match event {
                RenderEvent::Frame(frame) => {
                    let grid = *frame.result.grid();

                    if !self
                        .state
                        .accept_frame(panel, frame.generation, &grid, layout.panel_size(panel))
                    {
                        debug!("{}: dropped stale frame {}", panel.name(), frame.generation);
                        continue;
                    }

                    if let Err(err) = self.presenter.show_frame(panel, frame.result.into_buffer()) {
                        warn!("{}: could not show frame: {err}", panel.name());
                        continue;
                    }

                    self.last_render_duration = Some(frame.render_duration);
                    changed = true;
                }
                RenderEvent::Error(err) => {
                    self.state.set_status(format!("{} render failed: {}", panel.name(), err.message));
                    changed = true;
                }
            }
        }

        changed
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let state = &mut self.state;
        let last_render_duration = self.last_render_duration;
        let mut draw_requested = false;

        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::TopBottomPanel::bottom("controls")
                .exact_height(CONTROLS_HEIGHT)
                .show(ctx, |ui| {
                    egui::Grid::new("draw_form")
                        .num_columns(4)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            for row in BOUND_FIELD_ROWS {
                                for field in row {
                                    ui.label(field.label());
                                    ui.add(
                                        egui::TextEdit::singleline(state.form.text_mut(field))
                                            .desired_width(120.0),
                                    );
                                }
                                ui.end_row();
                            }

                            ui.label(FormField::MaxIterations.label());
                            let iterations = ui.add(
                                egui::TextEdit::singleline(state.form.text_mut(FormField::MaxIterations))
                                    .desired_width(120.0),
                            );
                            if iterations.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                draw_requested = true;
                            }
                            if ui.button("Draw").clicked() {
                                draw_requested = true;
                            }
                            if let Some(render_duration) = last_render_duration {
                                ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                            }
                            ui.end_row();

                            ui.label("User Selected Point");
                            ui.label(state.point_label());
                            ui.end_row();
                        });

                    if let Some(message) = state.status() {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        if draw_requested {
            self.draw();
            self.redraw_pending = true;
        }

        egui_output
    }
}

fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point {
        x: position.x.floor() as i32,
        y: position.y.floor() as i32,
    }
}
