use crate::constants::*;
use crate::dom;
use site_core::HeroIntro;
use web_sys as web;

pub fn render_text(document: &web::Document, hero: &HeroIntro) {
    dom::set_text_by_id(document, HERO_TEXT_ID, &hero.typing.display_text());
    if let Some(cursor) = document.get_element_by_id(HERO_CURSOR_ID) {
        dom::set_style(
            &cursor,
            "visibility",
            if hero.typing.cursor_visible() { "visible" } else { "hidden" },
        );
    }
}

pub fn reveal_extras(document: &web::Document) {
    dom::set_hidden_by_id(document, HERO_EXTRAS_ID, false);
}

pub fn render_burst(document: &web::Document, active: bool) {
    dom::set_hidden_by_id(document, BURST_OVERLAY_ID, !active);
}
