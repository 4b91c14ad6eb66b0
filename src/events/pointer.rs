use super::EventListener;
use crate::core::interaction::{avatar_tilt, Rect, AVATAR_REST_TRANSFORM};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last pointer position in client pixels; `None` until the first move.
pub type PointerState = Rc<Cell<Option<Vec2>>>;

/// Track the pointer over the whole window into a fresh `PointerState`.
pub fn wire_pointer_tracking(window: &web::Window) -> (PointerState, EventListener) {
    let pointer: PointerState = Rc::new(Cell::new(None));
    let pointer_move = pointer.clone();
    let listener = EventListener::new(window, "mousemove", move |ev: &web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            pointer_move.set(Some(Vec2::new(me.client_x() as f32, me.client_y() as f32)));
        }
    });
    (pointer, listener)
}

/// Tilt `avatar` toward the pointer while it hovers, and level it on leave.
pub fn wire_avatar_tilt(avatar: &web::HtmlElement) -> [EventListener; 2] {
    let avatar_move = avatar.clone();
    let on_move = EventListener::new(avatar, "mousemove", move |ev: &web::Event| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let r = avatar_move.get_bounding_client_rect();
        let rect = Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        let transform = avatar_tilt(me.client_x() as f64, me.client_y() as f64, rect);
        _ = avatar_move.style().set_property("transform", &transform);
    });
    let avatar_leave = avatar.clone();
    let on_leave = EventListener::new(avatar, "mouseleave", move |_| {
        _ = avatar_leave
            .style()
            .set_property("transform", AVATAR_REST_TRANSFORM);
    });
    [on_move, on_leave]
}
