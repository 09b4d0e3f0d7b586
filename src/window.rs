//! The windowing side of the app: one window and the event loop driving it.

use crate::{config::WindowConfig, renderer::extensions::surface_extensions, util::VkExtensionName};
use ash::vk;
use color_eyre::Result;
use tracing::debug;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};

/// The windowing collaborator the bootstrap sequence talks to.
pub trait Platform {
    /// Instance extensions needed to present to this platform's window.
    fn required_extensions(&self) -> Result<Vec<VkExtensionName>, vk::Result>;

    /// True once the user has asked for the window to close.
    fn close_requested(&self) -> bool;

    /// Process whatever events are pending. Returns right away if there are none.
    fn poll_events(&mut self);

    fn destroy_window(&mut self);

    /// Release process-wide windowing state. Call after [`Platform::destroy_window()`].
    fn terminate(self);
}

/// [`Platform`] backed by a [`winit`] event loop.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    window: Option<Window>,
    close_requested: bool,
}

impl WinitPlatform {
    /// Create the event loop and window.
    #[tracing::instrument(level = "DEBUG", name = "WinitPlatform::new")]
    pub fn new(config: &WindowConfig) -> Result<Self> {
        debug!("Creating window and event loop");

        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable)
            .build(&event_loop)?;

        debug!(window_id = ?window.id(), "Window creation successful");

        Ok(Self {
            event_loop,
            window: Some(window),
            close_requested: false,
        })
    }
}

impl Platform for WinitPlatform {
    fn required_extensions(&self) -> Result<Vec<VkExtensionName>, vk::Result> {
        match &self.window {
            Some(window) => surface_extensions(window),
            None => Err(vk::Result::ERROR_SURFACE_LOST_KHR),
        }
    }

    #[inline]
    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn poll_events(&mut self) {
        let Self {
            event_loop,
            window,
            close_requested,
        } = self;
        let window_id = window.as_ref().map(Window::id);

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    window_id: id,
                } if Some(id) == window_id => {
                    debug!("Window close requested");
                    *close_requested = true;
                }

                // Everything pending has been handled, hand control back
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,

                _ => {}
            }
        });
    }

    fn destroy_window(&mut self) {
        if let Some(window) = self.window.take() {
            debug!(window_id = ?window.id(), "Destroying window");
        }
    }

    fn terminate(self) {
        debug!("Shutting down event loop");
        drop(self.event_loop);
    }
}
