use crate::core::{FieldParams, ParticleField};
use crate::events::{self, EventListener};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::render::Canvas2dSurface;
use crate::{constants, dom};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The running particle background. Owns its field, pointer state, listeners and frame loop.
pub struct Background {
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
}

pub fn activate(document: &web::Document) -> anyhow::Result<Background> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas: web::HtmlCanvasElement = dom::require_as(document, constants::BACKGROUND_CANVAS_ID)?;
    let surface = Canvas2dSurface::new(&canvas)?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let field = ParticleField::new(
        FieldParams::default(),
        w as f32,
        h as f32,
        StdRng::from_entropy(),
    );
    log::info!("[bg] {}x{} surface, {} points", w, h, field.particles().len());

    let (pointer, pointer_listener) = events::wire_pointer_tracking(&window);
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(field, surface, pointer)));

    let ctx_resize = frame_ctx.clone();
    let resize_listener = events::wire_resize(&window, move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let mut ctx = ctx_resize.borrow_mut();
        ctx.field.resize(w as f32, h as f32);
        log::debug!("[bg] resized to {}x{}, {} points", w, h, ctx.field.particles().len());
    });

    let frame_loop = frame::start_loop(frame_ctx);
    Ok(Background {
        frame_loop,
        listeners: vec![resize_listener, pointer_listener],
    })
}

impl Background {
    /// Stop listening and cancel the pending frame. Idempotent.
    pub fn deactivate(&mut self) {
        self.listeners.clear();
        self.frame_loop.cancel();
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.deactivate();
    }
}
