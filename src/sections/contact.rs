use crate::constants::*;
use crate::core::constants::SUBMIT_DELAY_MS;
use crate::core::{ContactForm, Field, SubmitError, SubmitOutcome, CONTACT_PLAN};
use crate::dom;
use crate::events::EventListener;
use gloo_events::EventListenerOptions;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use super::SectionRevealer;

pub struct Contact {
    _revealer: SectionRevealer,
    _submit: EventListener,
}

/// Stand-in delivery: resolves after a fixed delay. Nothing leaves the page.
async fn deliver() -> Result<(), SubmitError> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let Some(window) = web::window() else {
            _ = reject.call1(&wasm_bindgen::JsValue::NULL, &"no window".into());
            return;
        };
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, SUBMIT_DELAY_MS)
        {
            _ = reject.call1(&wasm_bindgen::JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| SubmitError(format!("{:?}", e)))
}

fn read_control(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn clear_control(el: &web::Element) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value("");
    }
}

/// Submit button, its label, and the four field controls.
#[derive(Clone)]
struct FormView {
    button: web::HtmlButtonElement,
    label: web::Element,
    controls: Vec<(Field, web::Element)>,
}

impl FormView {
    fn show_phase(&self, form: &ContactForm) {
        let busy = form.is_submitting();
        self.button.set_disabled(busy);
        dom::set_class(&self.button, SUBMITTING_CLASS, busy);
        self.label.set_text_content(Some(form.submit_label()));
    }

    fn read(&self, field: Field) -> String {
        self.controls
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, el)| read_control(el))
            .unwrap_or_default()
    }

    fn clear(&self) {
        for (_, el) in &self.controls {
            clear_control(el);
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web::window() {
        _ = window.alert_with_message(message);
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<Contact> {
    let root = dom::require_element(document, CONTACT_ID)?;
    let revealer = SectionRevealer::mount(&root, CONTACT_PLAN, |_, _| {})?;

    let form_el = dom::require_element(document, CONTACT_FORM_ID)?;
    let view = FormView {
        button: dom::require_as(document, CONTACT_SUBMIT_ID)?,
        label: dom::require_element(document, CONTACT_SUBMIT_LABEL_ID)?,
        controls: Field::ALL
            .iter()
            .map(|&f| dom::require_element(document, f.id()).map(|el| (f, el)))
            .collect::<anyhow::Result<_>>()?,
    };
    let form = Rc::new(RefCell::new(ContactForm::new()));

    let form_submit = form.clone();
    let submit = EventListener::new_with_options(
        &form_el,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |ev: &web::Event| {
            ev.prevent_default();
            let begun = {
                let mut form = form_submit.borrow_mut();
                form.sync_fields(|field| view.read(field));
                form.begin_submit()
            };
            if let Err(e) = begun {
                log::info!("[contact] not sent: {}", e);
                alert(&e.to_string());
                return;
            }
            view.show_phase(&form_submit.borrow());
            log::info!("[contact] sending");

            let (form, view) = (form_submit.clone(), view.clone());
            spawn_local(async move {
                let result = deliver().await;
                let outcome = form.borrow_mut().finish_submit(result);
                view.show_phase(&form.borrow());
                match outcome {
                    SubmitOutcome::Acknowledged(message) => {
                        log::info!("[contact] delivered");
                        view.clear();
                        alert(message);
                    }
                    SubmitOutcome::Failed(message) => {
                        log::warn!("[contact] {}", message);
                        alert(&message);
                    }
                }
            });
        },
    );

    Ok(Contact {
        _revealer: revealer,
        _submit: submit,
    })
}
