use super::canvas::Canvas;

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Window abstraction - owns the output surface the turbine is presented on
pub trait WindowContext {
    /// Get window dimensions in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Present a finished canvas, replacing the visible frame
    fn present(&self, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>>;

    /// Request the window to redraw
    fn request_redraw(&self);
}
