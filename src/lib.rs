#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod observer;
mod page;
mod render;
mod sections;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    Ok(())
}

/// The mounted portfolio. Create one from JS with `new App()`; `unmount()`
/// removes every listener, observer, timer and the animation loop.
#[wasm_bindgen]
pub struct App {
    page: Option<page::Page>,
}

#[wasm_bindgen]
impl App {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<App, JsValue> {
        let mount = || -> anyhow::Result<page::Page> {
            let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
            let document = window
                .document()
                .ok_or_else(|| anyhow::anyhow!("no document"))?;
            page::mount(&window, &document)
        };
        match mount() {
            Ok(page) => Ok(App { page: Some(page) }),
            Err(e) => {
                log::error!("[app] mount failed: {:#}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    }

    pub fn unmount(&mut self) {
        if let Some(page) = self.page.take() {
            page.teardown();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.page.is_some()
    }
}
