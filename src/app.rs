use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::display::Display;
use crate::simulation::Simulation;
use crate::window::SurfaceWindow;

pub const WINDOW_TITLE: &str = "Wind Turbine Simulation";
pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 500;

/// Run-loop handler: one window, the turbine display, and the simulation timers
///
/// winit dispatches every callback on the loop thread one at a time, so the
/// simulation needs no locking.
pub struct App {
    simulation: Simulation,
    display: Option<Display<SurfaceWindow>>,
}

impl App {
    pub fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            display: None,
        }
    }

    fn create_display(event_loop: &ActiveEventLoop) -> Result<Display<SurfaceWindow>, Box<dyn std::error::Error>> {
        let window = event_loop.create_window(
            Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        )?;
        let surface = SurfaceWindow::new(Arc::new(window))?;
        Ok(Display::new(surface))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        match Self::create_display(event_loop) {
            Ok(display) => {
                log::info!("Window created: {}", WINDOW_TITLE);
                display.request_redraw();
                self.display = Some(display);
            }
            Err(e) => {
                log::error!("Failed to initialize display: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                log::info!("Shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(display) = &mut self.display {
                    display.window_mut().resize(size.width, size.height);
                    display.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(display) = &mut self.display {
                    if let Err(e) = display.draw(&self.simulation.state()) {
                        log::error!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let outcome = self.simulation.run_due(Instant::now());

        if outcome.redraw {
            if let Some(display) = &self.display {
                display.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.simulation.next_deadline()));
    }
}
