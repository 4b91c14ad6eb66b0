use crate::constants::*;
use crate::core::content::PROJECTS;
use crate::core::markup::project_preview;
use crate::core::{ProjectSelection, PROJECTS_PLAN};
use crate::dom;
use crate::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use super::SectionRevealer;

pub struct Projects {
    _revealer: SectionRevealer,
    _listeners: Vec<EventListener>,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Projects> {
    let root = dom::require_element(document, PROJECTS_ID)?;
    let revealer = SectionRevealer::mount(&root, PROJECTS_PLAN, |_, _| {})?;

    let preview = dom::require_element(document, PROJECT_PREVIEW_BODY_ID)?;
    let cards = Rc::new(dom::query_all(&root, PROJECT_CARD_SELECTOR));
    let selection = Rc::new(Cell::new(ProjectSelection::new(PROJECTS.len())));

    let listeners = cards
        .iter()
        .filter_map(|card| {
            let index = dom::parse_index_attr(card, "data-project-index")?;
            let (cards, selection, preview) = (cards.clone(), selection.clone(), preview.clone());
            Some(EventListener::new(card, "click", move |_| {
                let mut s = selection.get();
                if !s.select(index) {
                    return;
                }
                selection.set(s);
                for (i, card) in cards.iter().enumerate() {
                    dom::set_class(card, ACTIVE_CLASS, i == index);
                }
                if let Some(project) = PROJECTS.get(index) {
                    preview.set_inner_html(&project_preview(project));
                }
            }))
        })
        .collect();

    Ok(Projects {
        _revealer: revealer,
        _listeners: listeners,
    })
}
