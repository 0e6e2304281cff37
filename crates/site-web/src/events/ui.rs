//! Clicks, tabs and form input on the page chrome and modals.

use crate::app::App;
use crate::constants::*;
use crate::dom;
use site_core::{ContactField, ContactTab, PageAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_ui(app: &App) {
    wire_nav(app);
    wire_buttons(app);
    wire_explore(app);
    wire_tabs(app);
    wire_form(app);
}

fn on_click(app: &App, id: &str, action: impl Fn() -> PageAction + 'static) {
    let handle = app.clone();
    dom::add_click_listener(&app.document, id, move || handle.dispatch(action()));
}

fn wire_buttons(app: &App) {
    on_click(app, NAV_MENU_TOGGLE_ID, || PageAction::ToggleMenu);
    on_click(app, IGNITE_BUTTON_ID, || PageAction::IgniteClicked);
    on_click(app, OPEN_CONTACT_ID, || PageAction::OpenContact);
    on_click(app, CONTACT_CLOSE_ID, || PageAction::CloseContact);
    on_click(app, CONTACT_BACKDROP_ID, || PageAction::CloseContact);
    on_click(app, BOOK_CALL_ID, || PageAction::BookCall);
    on_click(app, DOWNLOAD_CONCEPT_ID, || PageAction::DownloadConcept);
    on_click(app, EXPERIENCE_CLOSE_ID, || PageAction::CloseExperience);
    on_click(app, EXPERIENCE_BACKDROP_ID, || PageAction::CloseExperience);
    on_click(app, EXPERIENCE_DOWNLOAD_ID, || PageAction::DownloadExperience);
}

// Items are re-rendered on every layout change, so listen on the list.
fn wire_nav(app: &App) {
    let Some(list) = app.document.get_element_by_id(NAV_ITEMS_ID) else {
        log::warn!("[dom] missing #{NAV_ITEMS_ID}; nav not wired");
        return;
    };
    let handle = app.clone();
    let selector = format!("[{DATA_SECTION}]");
    dom::add_listener(list.as_ref(), "click", move |ev: web::MouseEvent| {
        let item = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten());
        if let Some(id) = item.and_then(|el| el.get_attribute(DATA_SECTION)) {
            handle.dispatch(PageAction::NavSelected(id));
        }
    });
}

fn wire_explore(app: &App) {
    for (el, id) in dom::elements_with_attr(&app.document, DATA_EXPERIENCE) {
        let handle = app.clone();
        dom::add_listener(el.as_ref(), "click", move |_: web::MouseEvent| {
            handle.dispatch(PageAction::OpenExperience(id.clone()));
        });
    }
}

fn wire_tabs(app: &App) {
    for (el, value) in dom::elements_with_attr(&app.document, DATA_TAB) {
        let tab = match value.parse::<ContactTab>() {
            Ok(tab) => tab,
            Err(e) => {
                log::warn!("[modal] {e}");
                continue;
            }
        };
        let handle = app.clone();
        dom::add_listener(el.as_ref(), "click", move |_: web::MouseEvent| {
            handle.dispatch(PageAction::ContactTab(tab));
        });
    }
}

fn wire_form(app: &App) {
    let Some(form) = app.document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[dom] missing #{CONTACT_FORM_ID}; form not wired");
        return;
    };
    {
        let handle = app.clone();
        dom::add_listener(form.as_ref(), "submit", move |ev: web::Event| {
            ev.prevent_default();
            handle.dispatch(PageAction::ContactSubmit);
        });
    }
    let handle = app.clone();
    dom::add_listener(form.as_ref(), "input", move |ev: web::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        if let Some((name, value)) = field_value(&target) {
            match name.parse::<ContactField>() {
                Ok(field) => handle.dispatch(PageAction::ContactInput(field, value)),
                Err(e) => log::debug!("[modal] {e}"),
            }
        }
    });
}

fn field_value(target: &web::EventTarget) -> Option<(String, String)> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<web::HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}
