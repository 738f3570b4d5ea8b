use glam::{Mat4, Vec3};

/// Half extent of the visible world square on both axes
pub const ORTHO_EXTENT: f32 = 2.0;
/// Near/far clip distance of the orthographic volume
pub const ORTHO_DEPTH: f32 = 10.0;

/// Viewport - surface size plus the orthographic projection mapped onto it
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    projection: Mat4,
}

impl Viewport {
    /// Viewport spanning [-2, 2] on both axes and [-10, 10] in depth
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            projection: Mat4::orthographic_rh_gl(
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_DEPTH,
                ORTHO_DEPTH,
            ),
        }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Project an eye-space point to pixel coordinates (x right, y down)
    pub fn to_pixel(&self, eye: Vec3) -> [f32; 2] {
        let ndc = self.projection.project_point3(eye);
        [
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_px(actual: [f32; 2], expected: [f32; 2]) {
        assert!(
            (actual[0] - expected[0]).abs() < 1e-3 && (actual[1] - expected[1]).abs() < 1e-3,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_pixel_count_calculation() {
        let vp = Viewport::new(500, 500);
        assert_eq!(vp.pixel_count(), 250_000);
        assert_eq!(vp.buffer_size(), 1_000_000);
    }

    #[test]
    fn test_origin_maps_to_center() {
        let vp = Viewport::new(500, 500);
        assert_px(vp.to_pixel(Vec3::ZERO), [250.0, 250.0]);
    }

    #[test]
    fn test_corners() {
        let vp = Viewport::new(500, 500);
        assert_px(vp.to_pixel(Vec3::new(-2.0, 2.0, 0.0)), [0.0, 0.0]);
        assert_px(vp.to_pixel(Vec3::new(2.0, -2.0, 0.0)), [500.0, 500.0]);
    }

    #[test]
    fn test_depth_does_not_move_point() {
        let vp = Viewport::new(500, 500);
        assert_px(vp.to_pixel(Vec3::new(1.0, 1.0, -5.0)), vp.to_pixel(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_non_square_stretches() {
        let vp = Viewport::new(800, 400);
        assert_px(vp.to_pixel(Vec3::new(1.0, 1.0, 0.0)), [600.0, 100.0]);
    }
}
