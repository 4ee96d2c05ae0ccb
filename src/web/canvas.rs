use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::simulation::{DrawCircle, Renderer};

/// Renders bodies onto a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw(&mut self, circle: &DrawCircle) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(circle.x as f64, circle.y as f64, circle.radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }

        self.ctx.set_fill_style_str(circle.fill);
        self.ctx.fill();

        self.ctx.set_stroke_style_str(circle.stroke);
        self.ctx.set_line_width(circle.stroke_width as f64);
        self.ctx.stroke();
    }
}
