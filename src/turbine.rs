//! Turbine silhouette: fixed geometry and the per-frame draw sequence.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::core::{Canvas, DrawOp, TransformStack, Viewport};
use crate::simulation::RotationAngle;

/// Eye offset applied before anything is drawn
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -5.0);

pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
pub const SILHOUETTE: [u8; 4] = [0, 0, 0, 255];

/// Tower trapezoid, bottom-left then counter-clockwise
pub const TOWER: [Vec2; 4] = [
    Vec2::new(-0.1, -2.0),
    Vec2::new(0.1, -2.0),
    Vec2::new(0.15, 0.5),
    Vec2::new(-0.15, 0.5),
];

/// Hub center, at the top of the tower
pub const HUB_ANCHOR: Vec2 = Vec2::new(0.0, 0.5);
pub const HUB_RADIUS: f32 = 0.12;
/// One vertex per degree
pub const HUB_SEGMENTS: usize = 360;

pub const BLADE_COUNT: usize = 3;
pub const BLADE_SPACING_DEGREES: f32 = 120.0;

/// Blade in hub space, pointing along +x: narrow root, wider tip
pub const BLADE: [Vec2; 4] = [
    Vec2::new(0.0, -0.05),
    Vec2::new(1.3, -0.08),
    Vec2::new(1.3, 0.08),
    Vec2::new(0.0, 0.05),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurbinePart {
    Tower,
    Hub,
    Blade(usize),
}

/// One filled polygon of the turbine, in eye space
#[derive(Debug, Clone)]
pub struct Shape {
    pub part: TurbinePart,
    pub vertices: Vec<Vec3>,
}

/// Regular polygon approximating the hub circle
pub fn hub_outline() -> Vec<Vec2> {
    (0..HUB_SEGMENTS)
        .map(|i| {
            let rad = i as f32 * 2.0 * PI / HUB_SEGMENTS as f32;
            Vec2::new(rad.cos(), rad.sin()) * HUB_RADIUS
        })
        .collect()
}

fn emit(stack: &TransformStack, part: TurbinePart, outline: &[Vec2]) -> Shape {
    Shape {
        part,
        vertices: outline.iter().map(|v| stack.transform_vertex(*v)).collect(),
    }
}

/// Walk the draw sequence for one frame and collect the transformed shapes
///
/// Every transient transform is pushed and popped, so the stack ends where
/// it began and no part inherits another part's rotation.
pub fn turbine_shapes(stack: &mut TransformStack, angle: RotationAngle) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(2 + BLADE_COUNT);

    stack.load_identity();
    stack.translate(CAMERA_OFFSET.x, CAMERA_OFFSET.y, CAMERA_OFFSET.z);

    shapes.push(emit(stack, TurbinePart::Tower, &TOWER));

    stack.with_pushed(|stack| {
        stack.translate(HUB_ANCHOR.x, HUB_ANCHOR.y, 0.0);
        shapes.push(emit(stack, TurbinePart::Hub, &hub_outline()));

        stack.with_pushed(|stack| {
            stack.rotate_z_degrees(angle.degrees());

            for i in 0..BLADE_COUNT {
                stack.with_pushed(|stack| {
                    stack.rotate_z_degrees(i as f32 * BLADE_SPACING_DEGREES);
                    shapes.push(emit(stack, TurbinePart::Blade(i), &BLADE));
                });
            }
        });
    });

    shapes
}

/// Clear to the background, draw the turbine at `angle`, rasterize
pub fn render_turbine(angle: RotationAngle, viewport: &Viewport) -> Canvas {
    let mut stack = TransformStack::new();
    let [r, g, b, a] = SILHOUETTE;
    let [br, bg, bb, ba] = BACKGROUND;

    turbine_shapes(&mut stack, angle)
        .into_iter()
        .fold(
            Canvas::new(viewport.width, viewport.height).draw(DrawOp::Clear(br, bg, bb, ba)),
            |canvas, shape| {
                let points = shape.vertices.iter().map(|v| viewport.to_pixel(*v)).collect();
                canvas.draw(DrawOp::Polygon { points, r, g, b, a })
            },
        )
        .execute_ops()
}
