/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color (r, g, b, a)
    Clear(u8, u8, u8, u8),

    /// Fill a polygon given in pixel coordinates (x right, y down)
    Polygon { points: Vec<[f32; 2]>, r: u8, g: u8, b: u8, a: u8 },
}

/// Canvas state - pixel buffer with draw operations
#[derive(Debug, Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    /// Canvas dimensions
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height * 4) as usize;

        Self {
            pixels: vec![0; size],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Pending operations, in submission order
    pub fn operations(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Execute all pending operations and return new canvas
    pub fn execute_ops(&self) -> Self {
        let mut canvas = Self {
            pixels: self.pixels.clone(),
            operations: Vec::new(),
            width: self.width,
            height: self.height,
        };

        for op in &self.operations {
            canvas.execute_op(op);
        }

        canvas
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Clear(r, g, b, a) => self.clear(*r, *g, *b, *a),
            DrawOp::Polygon { points, r, g, b, a } => {
                self.fill_polygon(points, *r, *g, *b, *a)
            }
        }
    }

    fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, a]);
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }

    /// Scanline fill, even-odd rule, sampled at pixel centers
    fn fill_polygon(&mut self, points: &[[f32; 2]], r: u8, g: u8, b: u8, a: u8) {
        if points.len() < 3 {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            });

        let first_row = min_y.floor().max(0.0) as u32;
        let last_row = max_y.ceil().min(self.height as f32) as u32;
        let mut crossings = Vec::with_capacity(points.len());

        for y in first_row..last_row {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for (i, start) in points.iter().enumerate() {
                let end = &points[(i + 1) % points.len()];
                let spans = (start[1] <= sample_y && end[1] > sample_y)
                    || (end[1] <= sample_y && start[1] > sample_y);
                if spans {
                    let t = (sample_y - start[1]) / (end[1] - start[1]);
                    crossings.push(start[0] + t * (end[0] - start[0]));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));

            for pair in crossings.chunks_exact(2) {
                // Pixel x is covered when its center x + 0.5 lies in [left, right)
                let left = (pair[0] - 0.5).ceil().max(0.0);
                let right = (pair[1] - 0.5).ceil().min(self.width as f32);
                if right <= left {
                    continue;
                }
                for x in left as u32..right as u32 {
                    self.set_pixel(x, y, r, g, b, a);
                }
            }
        }
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let px = &self.pixels[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of pixels holding exactly this RGBA value
    pub fn count_color(&self, rgba: [u8; 4]) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| *px == rgba.as_slice())
            .count()
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
