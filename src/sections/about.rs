use crate::constants::ABOUT_ID;
use crate::core::markup::SKILLS_BLOCK;
use crate::core::ABOUT_PLAN;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::SectionRevealer;

/// Fill each skill bar up to its `data-level` percentage.
fn fill_skill_bars(root: &web::Element) {
    for bar in dom::query_all(root, ".skill-bar[data-level]") {
        let Some(level) = bar.get_attribute("data-level") else {
            continue;
        };
        if let Some(bar) = bar.dyn_ref::<web::HtmlElement>() {
            _ = bar.style().set_property("width", &format!("{}%", level));
        }
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<SectionRevealer> {
    let root = dom::require_element(document, ABOUT_ID)?;
    let bars_root = root.clone();
    SectionRevealer::mount(&root, ABOUT_PLAN, move |group, index| {
        if group == ABOUT_PLAN.tracked_group && index == SKILLS_BLOCK {
            fill_skill_bars(&bars_root);
        }
    })
}
