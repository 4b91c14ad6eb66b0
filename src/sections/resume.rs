use crate::constants::*;
use crate::core::content::{RESUME_FILENAME, RESUME_URL};
use crate::core::RESUME_PLAN;
use crate::dom;
use crate::events::EventListener;
use web_sys as web;

use super::SectionRevealer;

pub struct Resume {
    _revealer: SectionRevealer,
    _listeners: Vec<EventListener>,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Resume> {
    let root = dom::require_element(document, RESUME_ID)?;
    let revealer = SectionRevealer::mount(&root, RESUME_PLAN, |_, _| {})?;

    let button = dom::require_element(document, RESUME_DOWNLOAD_ID)?;
    let doc = document.clone();
    let click = EventListener::new(&button, "click", move |_| {
        match dom::trigger_download(&doc, RESUME_URL, RESUME_FILENAME) {
            Ok(()) => log::info!("[resume] download started"),
            Err(e) => log::warn!("[resume] download failed: {}", e),
        }
    });
    let (enter_el, leave_el) = (button.clone(), button.clone());
    let enter = EventListener::new(&button, "mouseenter", move |_| {
        dom::set_class(&enter_el, HOVER_PULSE_CLASS, true);
    });
    let leave = EventListener::new(&button, "mouseleave", move |_| {
        dom::set_class(&leave_el, HOVER_PULSE_CLASS, false);
    });

    Ok(Resume {
        _revealer: revealer,
        _listeners: vec![click, enter, leave],
    })
}
