use crate::core::reveal::is_sufficiently_visible;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntryCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// An `IntersectionObserver` with a fixed threshold. Disconnects on drop.
///
/// The handler sees each observed element together with whether at least
/// `threshold` of it is inside the viewport.
pub struct VisibilityObserver {
    observer: Option<web::IntersectionObserver>,
    _callback: Closure<EntryCallback>,
}

impl VisibilityObserver {
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut handler: impl FnMut(&web::Element, &web::IntersectionObserverEntry, bool) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    let visible = is_sufficiently_visible(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    );
                    handler(&entry.target(), &entry, visible);
                }
            },
        ) as Box<EntryCallback>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        Ok(Self {
            observer: Some(observer),
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &web::Element) {
        if let Some(observer) = &self.observer {
            observer.observe(el);
        }
    }

    pub fn observe_all(&self, elements: &[web::Element]) {
        for el in elements {
            self.observe(el);
        }
    }

    /// Stop watching everything. Safe to call more than once.
    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
