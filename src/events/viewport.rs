use super::EventListener;
use web_sys as web;

pub fn wire_resize(window: &web::Window, mut on_resize: impl FnMut() + 'static) -> EventListener {
    EventListener::new(window, "resize", move |_| on_resize())
}

/// Calls `on_scroll` with the window's vertical scroll offset.
pub fn wire_scroll(window: &web::Window, mut on_scroll: impl FnMut(f64) + 'static) -> EventListener {
    let win = window.clone();
    EventListener::new(window, "scroll", move |_| {
        on_scroll(win.scroll_y().unwrap_or(0.0));
    })
}
