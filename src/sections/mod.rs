pub mod about;
pub mod contact;
pub mod header;
pub mod hero;
pub mod projects;
pub mod resume;

use crate::core::markup::{reveal_selector, TRACK_ATTR};
use crate::core::{RevealController, RevealPlan, ScheduledReveal};
use crate::dom;
use crate::observer::VisibilityObserver;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type RevealHook = Rc<dyn Fn(&'static str, usize)>;

/// Watches one section's tracked elements and reveals its items as they
/// scroll into view. Dropping it disconnects the observer and clears any
/// stagger timers still pending.
pub struct SectionRevealer {
    observer: VisibilityObserver,
    pending: Rc<RefCell<Vec<Timeout>>>,
}

impl SectionRevealer {
    /// `on_reveal` runs after each item is revealed for the first time.
    pub fn mount(
        root: &web::Element,
        plan: RevealPlan,
        on_reveal: impl Fn(&'static str, usize) + 'static,
    ) -> anyhow::Result<Self> {
        let controller = Rc::new(RefCell::new(RevealController::new(plan)));
        let pending: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
        let on_reveal: RevealHook = Rc::new(on_reveal);

        let apply = {
            let controller = controller.clone();
            let root = root.clone();
            move |group: &'static str, index: usize| {
                if !controller.borrow_mut().mark(group, index) {
                    return;
                }
                for el in dom::query_all(&root, &reveal_selector(group, index)) {
                    dom::reveal_element(&el);
                }
                on_reveal(group, index);
            }
        };
        let apply = Rc::new(apply);

        let section_id = root.id();
        let pending_obs = pending.clone();
        let observer = VisibilityObserver::new(plan.threshold, None, move |el, entry, _visible| {
            let Some(index) = dom::parse_index_attr(el, TRACK_ATTR) else {
                return;
            };
            let scheduled: Vec<ScheduledReveal> = controller.borrow_mut().observe(
                index,
                entry.is_intersecting(),
                entry.intersection_ratio(),
            );
            if !scheduled.is_empty() {
                log::debug!("[reveal] #{} item {} visible, {} reveals", section_id, index, scheduled.len());
            }
            for s in scheduled {
                if s.delay_ms == 0 {
                    apply(s.group, s.index);
                    continue;
                }
                let apply_later = apply.clone();
                pending_obs
                    .borrow_mut()
                    .push(Timeout::new(s.delay_ms, move || apply_later(s.group, s.index)));
            }
        })?;

        let mut targets = Vec::new();
        if root.has_attribute(TRACK_ATTR) {
            targets.push(root.clone());
        }
        targets.extend(dom::query_all(root, &format!("[{}]", TRACK_ATTR)));
        observer.observe_all(&targets);

        Ok(Self { observer, pending })
    }

    /// Disconnect and drop pending stagger timers. Idempotent.
    pub fn teardown(&mut self) {
        self.observer.disconnect();
        self.pending.borrow_mut().clear();
    }
}

impl Drop for SectionRevealer {
    fn drop(&mut self) {
        self.teardown();
    }
}
