use crate::core::{Canvas, Viewport, WindowContext};
use crate::simulation::TurbineState;
use crate::turbine::render_turbine;

/// Display combines the turbine renderer and a window output
pub struct Display<W: WindowContext> {
    window: W,
    frames_presented: u64,
}

impl<W: WindowContext> Display<W> {
    pub fn new(window: W) -> Self {
        Self {
            window,
            frames_presented: 0,
        }
    }

    /// Full render cycle: rasterize the turbine at the snapshot's angle, present
    ///
    /// The speed in the snapshot plays no part in the image.
    pub fn draw(&mut self, state: &TurbineState) -> Result<Canvas, Box<dyn std::error::Error>> {
        let dims = self.window.dimensions();
        let canvas = render_turbine(state.angle, &Viewport::new(dims.width, dims.height));

        self.window.present(&canvas)?;
        self.frames_presented += 1;
        Ok(canvas)
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Access window
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Access mutable window
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WindowDimensions;
    use crate::settings::SpeedLevel;
    use crate::simulation::RotationAngle;
    use std::cell::RefCell;

    // Mock window for testing the present path without a GPU
    struct MockWindow {
        dims: WindowDimensions,
        presented: RefCell<Vec<Vec<u8>>>,
        redraw_called: RefCell<usize>,
        fail: bool,
    }

    impl MockWindow {
        fn new(width: u32, height: u32) -> Self {
            Self {
                dims: WindowDimensions::new(width, height),
                presented: RefCell::new(Vec::new()),
                redraw_called: RefCell::new(0),
                fail: false,
            }
        }
    }

    impl WindowContext for MockWindow {
        fn dimensions(&self) -> WindowDimensions {
            self.dims
        }

        fn present(&self, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>> {
            if self.fail {
                return Err("surface gone".into());
            }
            self.presented.borrow_mut().push(canvas.pixels().to_vec());
            Ok(())
        }

        fn request_redraw(&self) {
            *self.redraw_called.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_draw_presents_window_sized_frame() {
        let mut display = Display::new(MockWindow::new(64, 48));
        let canvas = display.draw(&TurbineState::default()).unwrap();

        assert_eq!(canvas.dimensions(), (64, 48));
        assert_eq!(display.window().presented.borrow().len(), 1);
        assert_eq!(display.window().presented.borrow()[0].len(), 64 * 48 * 4);
        assert_eq!(display.frames_presented(), 1);
    }

    #[test]
    fn test_speed_does_not_change_image() {
        let mut display = Display::new(MockWindow::new(100, 100));
        let angle = RotationAngle::from_degrees(42.0);

        let slow = TurbineState { angle, speed: SpeedLevel::new(1).unwrap() };
        let fast = TurbineState { angle, speed: SpeedLevel::new(10).unwrap() };
        display.draw(&slow).unwrap();
        display.draw(&fast).unwrap();

        let presented = display.window().presented.borrow();
        assert_eq!(presented[0], presented[1]);
    }

    #[test]
    fn test_angle_changes_image() {
        let mut display = Display::new(MockWindow::new(100, 100));
        let a = display.draw(&TurbineState::default()).unwrap();
        let b = display
            .draw(&TurbineState { angle: RotationAngle::from_degrees(60.0), ..Default::default() })
            .unwrap();

        assert_ne!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_present_failure_is_returned() {
        let mut window = MockWindow::new(10, 10);
        window.fail = true;
        let mut display = Display::new(window);

        assert!(display.draw(&TurbineState::default()).is_err());
        assert_eq!(display.frames_presented(), 0);
    }

    #[test]
    fn test_request_redraw_forwards() {
        let display = Display::new(MockWindow::new(10, 10));
        display.request_redraw();
        display.request_redraw();
        assert_eq!(*display.window().redraw_called.borrow(), 2);
    }
}
