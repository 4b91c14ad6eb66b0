use crate::core::ParticleField;
use crate::events::PointerState;
use crate::render::Canvas2dSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub surface: Canvas2dSurface,
    pub pointer: PointerState,
    pub started: Instant,
    pub failed_frames: u32,
}

impl FrameContext {
    pub fn new(field: ParticleField, surface: Canvas2dSurface, pointer: PointerState) -> Self {
        Self {
            field,
            surface,
            pointer,
            started: Instant::now(),
            failed_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        // one pointer snapshot per frame
        let pointer = self.pointer.get();
        if let Err(e) = self.field.step(&mut self.surface, pointer, elapsed_ms) {
            self.failed_frames = self.failed_frames.saturating_add(1);
            if self.failed_frames.is_power_of_two() {
                log::warn!("[bg] frame draw error ({} so far): {}", self.failed_frames, e);
            }
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the loop closure. Idempotent.
    pub fn cancel(&mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    FrameLoop { tick, raf_id }
}

fn request_frame(tick: &TickSlot, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[bg] requestAnimationFrame failed: {:?}", e),
        }
    }
}
