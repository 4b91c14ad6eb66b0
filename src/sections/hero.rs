use crate::constants::{AVATAR_ID, TYPEWRITER_ID};
use crate::core::constants::TYPEWRITER_INTERVAL_MS;
use crate::core::content::HERO_TAGLINE;
use crate::core::Typewriter;
use crate::dom;
use crate::events::{pointer, EventListener};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type TypingSlot = Rc<RefCell<Option<Interval>>>;

pub struct Hero {
    typing: TypingSlot,
    _tilt: [EventListener; 2],
}

/// Type the tagline into `target`, one character per tick. The interval is
/// taken out of `slot` and dropped once the text is complete.
fn start_typing(target: web::Element) -> TypingSlot {
    let slot: TypingSlot = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    let mut typewriter = Typewriter::new(HERO_TAGLINE);
    let interval = Interval::new(TYPEWRITER_INTERVAL_MS, move || {
        if let Some(shown) = typewriter.tick() {
            target.set_text_content(Some(shown));
        }
        if typewriter.is_done() {
            let finished = slot_tick.borrow_mut().take();
            drop(finished);
        }
    });
    *slot.borrow_mut() = Some(interval);
    slot
}

pub fn mount(document: &web::Document) -> anyhow::Result<Hero> {
    let target = dom::require_element(document, TYPEWRITER_ID)?;
    let avatar: web::HtmlElement = dom::require_as(document, AVATAR_ID)?;
    Ok(Hero {
        typing: start_typing(target),
        _tilt: pointer::wire_avatar_tilt(&avatar),
    })
}

impl Drop for Hero {
    fn drop(&mut self) {
        // the interval's closure holds the slot; taking it breaks the cycle
        let pending = self.typing.borrow_mut().take();
        drop(pending);
    }
}
