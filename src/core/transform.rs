use glam::{Mat4, Vec2, Vec3};

/// Model-view matrix stack in the fixed-function style
///
/// The top of the stack is the current transform. `push` saves it, `pop`
/// restores the last saved one. Transforms post-multiply, so the most recently
/// applied transform acts on vertices first.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl TransformStack {
    /// Create stack holding the identity
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Reset the current transform to identity, keeping saved entries
    pub fn load_identity(&mut self) {
        self.current = Mat4::IDENTITY;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.current *= Mat4::from_translation(Vec3::new(x, y, z));
    }

    /// Rotate around the viewing (z) axis, counter-clockwise for positive angles
    pub fn rotate_z_degrees(&mut self, degrees: f32) {
        self.current *= Mat4::from_rotation_z(degrees.to_radians());
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed transform; an unmatched pop keeps the current one
    pub fn pop(&mut self) {
        if let Some(matrix) = self.saved.pop() {
            self.current = matrix;
        } else {
            log::warn!("transform stack underflow");
        }
    }

    /// Run `f` between a push and its matching pop
    pub fn with_pushed<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Apply the current transform to a 2D vertex on the z = 0 plane
    pub fn transform_vertex(&self, vertex: Vec2) -> Vec3 {
        self.current.transform_point3(vertex.extend(0.0))
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn identity_leaves_vertex_alone() {
        let stack = TransformStack::new();
        assert_near(stack.transform_vertex(Vec2::new(1.0, 2.0)), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn translate_then_rotate_rotates_about_translated_origin() {
        let mut stack = TransformStack::new();
        stack.translate(0.0, 0.5, 0.0);
        stack.rotate_z_degrees(90.0);

        // (1, 0) rotates to (0, 1), then moves up by 0.5
        assert_near(stack.transform_vertex(Vec2::X), Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn push_pop_restores() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 0.0, 0.0);
        let before = stack.current();

        stack.push();
        stack.rotate_z_degrees(45.0);
        stack.translate(3.0, 3.0, 0.0);
        assert_eq!(stack.depth(), 1);
        stack.pop();

        assert_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn with_pushed_does_not_leak() {
        let mut stack = TransformStack::new();
        let inner = stack.with_pushed(|s| {
            s.rotate_z_degrees(120.0);
            s.transform_vertex(Vec2::X)
        });

        assert!((inner.x - (-0.5)).abs() < 1e-5);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn unmatched_pop_is_harmless() {
        let mut stack = TransformStack::new();
        stack.translate(2.0, 0.0, 0.0);
        stack.pop();
        assert_near(stack.transform_vertex(Vec2::ZERO), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn load_identity_keeps_saved_entries() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 1.0, 0.0);
        stack.push();
        stack.load_identity();
        assert_eq!(stack.current(), Mat4::IDENTITY);
        stack.pop();
        assert_near(stack.transform_vertex(Vec2::ZERO), Vec3::new(1.0, 1.0, 0.0));
    }
}
