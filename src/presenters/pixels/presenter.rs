use crate::adapters::pixel_format::{BlitError, blit_rgb_into_rgba, fill_rect_rgba, stroke_rect_rgba};
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::viewer::layout::{BORDER_COLOUR, BORDER_WIDTH, Panel, ViewerLayout};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

const BACKGROUND_COLOUR: Colour = Colour { r: 40, g: 40, b: 40 };

/// Draws both panels into one pixels framebuffer and egui on top of it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    mandelbrot_adapter: Arc<PixelsAdapter>,
    julia_adapter: Arc<PixelsAdapter>,
    mandelbrot_image: Option<PixelBuffer>,
    julia_image: Option<PixelBuffer>,
    width: u32,
    height: u32,
    layout: Option<ViewerLayout>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            mandelbrot_adapter: Arc::new(PixelsAdapter::new(event_loop_proxy.clone())),
            julia_adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            mandelbrot_image: None,
            julia_image: None,
            width: size.width,
            height: size.height,
            layout: None,
        })
    }

    fn adapter(&self, panel: Panel) -> &Arc<PixelsAdapter> {
        match panel {
            Panel::Mandelbrot => &self.mandelbrot_adapter,
            Panel::Julia => &self.julia_adapter,
        }
    }

    fn image_mut(&mut self, panel: Panel) -> &mut Option<PixelBuffer> {
        match panel {
            Panel::Mandelbrot => &mut self.mandelbrot_image,
            Panel::Julia => &mut self.julia_image,
        }
    }

    /// Draws the kept image of each panel back into the frame. An image
    /// that no longer fits is dropped and its placeholder stays.
    fn redraw_images(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };

        for panel in Panel::ALL {
            let width = self.width;
            let Some(image) = self.image_mut(panel).take() else {
                continue;
            };

            match blit_rgb_into_rgba(&image, self.pixels.frame_mut(), width, layout.panel_rect(panel)) {
                Ok(()) => *self.image_mut(panel) = Some(image),
                Err(err) => warn!("{}: dropped frame on resize: {err}", panel.name()),
            }
        }
    }

    /// Background, borders and both placeholders.
    fn draw_chrome(&mut self) -> Result<(), BlitError> {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[BACKGROUND_COLOUR.r, BACKGROUND_COLOUR.g, BACKGROUND_COLOUR.b, 255]);
        }

        let Some(layout) = self.layout else {
            return Ok(());
        };

        let frame = self.pixels.frame_mut();

        for panel in Panel::ALL {
            stroke_rect_rgba(
                frame,
                self.width,
                layout.frame_rect(panel),
                BORDER_WIDTH,
                BORDER_COLOUR,
            )?;
            fill_rect_rgba(
                frame,
                self.width,
                layout.panel_rect(panel),
                panel.placeholder_colour(),
            )?;
        }

        Ok(())
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self, panel: Panel) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(self.adapter(panel)) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn take_render_event(&self, panel: Panel) -> Option<RenderEvent> {
        self.adapter(panel).take_render_event()
    }

    fn show_frame(&mut self, panel: Panel, image: PixelBuffer) -> Result<(), BlitError> {
        let Some(layout) = self.layout else {
            return Ok(());
        };

        blit_rgb_into_rgba(&image, self.pixels.frame_mut(), self.width, layout.panel_rect(panel))?;
        *self.image_mut(panel) = Some(image);

        Ok(())
    }

    fn resize(
        &mut self,
        width: u32,
        height: u32,
        layout: Option<ViewerLayout>,
        keep_frames: bool,
    ) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;
        self.layout = layout;

        if !keep_frames {
            self.mandelbrot_image = None;
            self.julia_image = None;
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        if let Err(err) = self.draw_chrome() {
            warn!("could not draw panel chrome: {err}");
        }

        self.redraw_images();

        Ok(())
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of pixels framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
