use crate::core::markup::HIDDEN_CLASS;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn require_as<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    require_element(document, id)?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

fn elements(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// All elements under `root` matching `selector`. Invalid selectors yield nothing.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    elements(root.query_selector_all(selector))
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    elements(document.query_selector_all(selector))
}

pub fn parse_index_attr(el: &web::Element, attr: &str) -> Option<usize> {
    el.get_attribute(attr)?.trim().parse().ok()
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Match the canvas backing store to the viewport. Returns the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(window) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let (w, h) = viewport_size(&window);
    let (w_px, h_px) = ((w as u32).max(1), (h as u32).max(1));
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Smoothly scroll the section with id `target` into view. Missing targets are ignored.
pub fn scroll_to_section(target: &str) -> bool {
    let Some(el) = window_document().and_then(|d| d.get_element_by_id(target)) else {
        log::debug!("[nav] no section #{}", target);
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Start a client-side download of `url`, suggesting `filename`.
pub fn trigger_download(document: &web::Document, url: &str, filename: &str) -> anyhow::Result<()> {
    let link = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_href(url);
    link.set_download(filename);
    link.click();
    Ok(())
}

/// Swap the hidden class for the element's `data-reveal` animation class.
pub fn reveal_element(el: &web::Element) {
    let cl = el.class_list();
    _ = cl.remove_1(HIDDEN_CLASS);
    if let Some(anim) = el.get_attribute("data-reveal") {
        for class in anim.split_whitespace() {
            _ = cl.add_1(class);
        }
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}
