use super::markup;
use crate::constants::*;
use crate::dom;
use site_core::{ContactModal, ExperienceModal};
use web_sys as web;

pub fn render_contact(document: &web::Document, contact: &ContactModal) {
    dom::set_hidden_by_id(document, CONTACT_MODAL_ID, !contact.is_open());
    let selected = contact.tab().as_str();
    for (el, tab) in dom::elements_with_attr(document, DATA_TAB) {
        let on = tab == selected;
        dom::set_class(&el, ACTIVE_CLASS, on);
        _ = el.set_attribute("aria-selected", if on { "true" } else { "false" });
    }
    for (el, panel) in dom::elements_with_attr(document, DATA_PANEL) {
        dom::set_hidden(&el, panel != selected);
    }
}

pub fn render_experience(document: &web::Document, experience: &ExperienceModal) {
    let view = experience.view();
    dom::set_hidden_by_id(document, EXPERIENCE_MODAL_ID, view.is_none());
    if let Some(body) = document.get_element_by_id(EXPERIENCE_BODY_ID) {
        match view {
            Some(exp) => body.set_inner_html(&markup::experience_body_html(exp)),
            None => body.set_inner_html(""),
        }
    }
}
