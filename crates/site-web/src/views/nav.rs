use super::{markup, style};
use crate::constants::*;
use crate::dom;
use site_core::{live_region_text, NavLayout, NavView};
use web_sys as web;

/// Redraw the navigation bar from scratch.
pub fn render(document: &web::Document, view: &NavView) {
    if let Some(list) = document.get_element_by_id(NAV_ITEMS_ID) {
        list.set_inner_html(&markup::nav_items_html(view));
        let mobile = view.layout == NavLayout::Mobile;
        dom::set_class(&list, MENU_OPEN_CLASS, view.menu_open);
        // the mobile list only shows while its menu is open
        dom::set_hidden(&list, mobile && !view.menu_open);
    }
    if let Some(nav) = document.get_element_by_id(NAV_ID) {
        dom::set_class(&nav, MOBILE_CLASS, view.layout == NavLayout::Mobile);
    }
    if let Some(toggle) = document.get_element_by_id(NAV_MENU_TOGGLE_ID) {
        dom::set_hidden(&toggle, view.layout == NavLayout::Desktop);
        _ = toggle.set_attribute("aria-expanded", if view.menu_open { "true" } else { "false" });
    }
    render_progress(document, view.progress_fill);
    if let Some(item) = view.active_item() {
        dom::set_text_by_id(document, LIVE_REGION_ID, &live_region_text(item.section.id));
    }
}

/// Only the progress bar; runs on every scroll event.
pub fn render_progress(document: &web::Document, fill: f32) {
    if let Some(bar) = document.get_element_by_id(NAV_PROGRESS_ID) {
        dom::set_style(&bar, "width", &style::progress_width(fill));
    }
}
