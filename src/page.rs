use crate::background::{self, Background};
use crate::constants::{MAIN_ID, PAGE_REVEALED_CLASS};
use crate::core::constants::{PAGE_REVEAL_ROOT_MARGIN, PAGE_REVEAL_THRESHOLD};
use crate::core::markup::{self, SECTION_ANIMATE_CLASS};
use crate::dom;
use crate::observer::VisibilityObserver;
use crate::sections::{self, header::Header, hero::Hero, SectionRevealer};
use web_sys as web;

/// Everything mounted on the page. Field order is drop order.
pub struct Page {
    background: Option<Background>,
    _page_reveal: VisibilityObserver,
    _header: Header,
    _hero: Hero,
    _about: SectionRevealer,
    _projects: sections::projects::Projects,
    _resume: sections::resume::Resume,
    _contact: sections::contact::Contact,
}

/// Fades each `.section-animate` section in the first time it nears the viewport.
fn observe_page_sections(document: &web::Document) -> anyhow::Result<VisibilityObserver> {
    let observer = VisibilityObserver::new(
        PAGE_REVEAL_THRESHOLD,
        Some(PAGE_REVEAL_ROOT_MARGIN),
        |el, _entry, visible| {
            if visible {
                dom::set_class(el, PAGE_REVEALED_CLASS, true);
            }
        },
    )?;
    observer.observe_all(&dom::document_query_all(
        document,
        &format!(".{}", SECTION_ANIMATE_CLASS),
    ));
    Ok(observer)
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Page> {
    let main = dom::require_element(document, MAIN_ID)?;
    main.set_inner_html(&markup::page_sections());

    // The page is usable without the canvas.
    let background = match background::activate(document) {
        Ok(bg) => Some(bg),
        Err(e) => {
            log::error!("[bg] not started: {:#}", e);
            None
        }
    };

    let page = Page {
        background,
        _page_reveal: observe_page_sections(document)?,
        _header: sections::header::mount(window, document)?,
        _hero: sections::hero::mount(document)?,
        _about: sections::about::mount(document)?,
        _projects: sections::projects::mount(document)?,
        _resume: sections::resume::mount(document)?,
        _contact: sections::contact::mount(document)?,
    };
    log::info!("[app] mounted, background {}", if page.background.is_some() { "on" } else { "off" });
    Ok(page)
}

impl Page {
    pub fn teardown(mut self) {
        if let Some(mut bg) = self.background.take() {
            bg.deactivate();
        }
        log::info!("[app] unmounted");
    }
}
