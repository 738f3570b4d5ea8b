use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::core::{Canvas, SurfaceRenderer, WindowContext, WindowDimensions};

/// Wrapper around a winit window and the surface that presents canvases on it
pub struct SurfaceWindow {
    inner: Arc<WinitWindow>,
    renderer: SurfaceRenderer,
}

impl SurfaceWindow {
    pub fn new(window: Arc<WinitWindow>) -> Result<Self, Box<dyn std::error::Error>> {
        let renderer = SurfaceRenderer::new(window.clone())?;
        Ok(Self {
            inner: window,
            renderer,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }
}

impl WindowContext for SurfaceWindow {
    fn dimensions(&self) -> WindowDimensions {
        let (width, height) = self.renderer.dimensions();
        WindowDimensions::new(width, height)
    }

    fn present(&self, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>> {
        self.renderer.present(canvas)
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
