pub mod canvas;
pub mod gpu_context;
pub mod surface_renderer;
pub mod timer;
pub mod transform;
pub mod viewport;
pub mod window;

pub use canvas::{Canvas, DrawOp};
pub use gpu_context::GpuContext;
pub use surface_renderer::SurfaceRenderer;
pub use timer::{earliest_deadline, Periodic};
pub use transform::TransformStack;
pub use viewport::Viewport;
pub use window::{WindowContext, WindowDimensions};
