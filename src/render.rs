use crate::core::constants::LINK_WIDTH;
use crate::core::{DrawSurface, SurfaceError};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `DrawSurface` backed by a canvas 2D context.
pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext('2d'): {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Run `draw` between save/restore so state never leaks into the next call.
    fn isolated(
        &self,
        draw: impl FnOnce(&web::CanvasRenderingContext2d) -> Result<(), JsValue>,
    ) -> Result<(), SurfaceError> {
        self.ctx.save();
        let result = draw(&self.ctx);
        self.ctx.restore();
        result.map_err(|e| SurfaceError(format!("{:?}", e)))
    }
}

impl DrawSurface for Canvas2dSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_link(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: &str,
        to_color: &str,
        alpha: f32,
    ) -> Result<(), SurfaceError> {
        self.isolated(|ctx| {
            ctx.set_global_alpha(alpha as f64);
            let gradient =
                ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
            gradient.add_color_stop(0.0, from_color)?;
            gradient.add_color_stop(1.0, to_color)?;
            ctx.set_stroke_style_canvas_gradient(&gradient);
            ctx.set_line_width(LINK_WIDTH);
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
            Ok(())
        })
    }

    fn fill_diamond(
        &mut self,
        center: Vec2,
        radius: f32,
        rotation: f32,
        color: &str,
        alpha: f32,
        glow: f32,
    ) -> Result<(), SurfaceError> {
        let r = radius as f64;
        self.isolated(|ctx| {
            ctx.set_global_alpha(alpha as f64);
            ctx.set_fill_style_str(color);
            ctx.translate(center.x as f64, center.y as f64)?;
            ctx.rotate(rotation as f64)?;
            ctx.set_shadow_color(color);
            ctx.set_shadow_blur(glow as f64);
            ctx.begin_path();
            ctx.move_to(0.0, -r);
            ctx.line_to(r, 0.0);
            ctx.line_to(0.0, r);
            ctx.line_to(-r, 0.0);
            ctx.close_path();
            ctx.fill();
            Ok(())
        })
    }
}
