use crate::constants::*;
use crate::core::markup;
use crate::core::{header_is_scrolled, MenuState};
use crate::dom;
use crate::events::{self, EventListener};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub struct Header {
    _listeners: Vec<EventListener>,
}

fn apply_menu(menu: &web::Element, toggle: &web::Element, state: MenuState) {
    dom::set_class(menu, MENU_OPEN_CLASS, state.is_open());
    _ = toggle.set_attribute("aria-expanded", if state.is_open() { "true" } else { "false" });
}

/// Render the nav bar into the page header and wire scroll styling, the
/// mobile menu and every `data-nav-target` button on the page.
pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Header> {
    let header = dom::require_element(document, HEADER_ID)?;
    header.set_inner_html(&markup::header());

    let mut listeners = Vec::new();

    let header_scroll = header.clone();
    dom::set_class(&header, SCROLLED_CLASS, header_is_scrolled(window.scroll_y().unwrap_or(0.0)));
    listeners.push(events::wire_scroll(window, move |y| {
        dom::set_class(&header_scroll, SCROLLED_CLASS, header_is_scrolled(y));
    }));

    let menu_state = Rc::new(Cell::new(MenuState::default()));
    let menu = dom::require_element(document, MOBILE_MENU_ID)?;
    let toggle = dom::require_element(document, MENU_TOGGLE_ID)?;
    {
        let (menu, toggle_el, state) = (menu.clone(), toggle.clone(), menu_state.clone());
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            let mut s = state.get();
            s.toggle();
            state.set(s);
            apply_menu(&menu, &toggle_el, s);
        }));
    }

    for button in dom::document_query_all(document, NAV_TARGET_SELECTOR) {
        let Some(target) = button.get_attribute("data-nav-target") else {
            continue;
        };
        let (menu, toggle, state) = (menu.clone(), toggle.clone(), menu_state.clone());
        listeners.push(EventListener::new(&button, "click", move |_| {
            dom::scroll_to_section(&target);
            let mut s = state.get();
            if s.is_open() {
                s.close();
                state.set(s);
                apply_menu(&menu, &toggle, s);
            }
        }));
    }
    log::debug!("[nav] {} listeners", listeners.len());

    Ok(Header {
        _listeners: listeners,
    })
}
