// Host-side tests for generated page markup.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod markup {
    include!("../src/views/markup.rs");
}

use constants::*;
use markup::*;
use site_core::{sections, NavModel, ScrollState, EXPERIENCES};

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("plain text"), "plain text");
}

#[test]
fn page_contains_every_wired_element() {
    let html = page_html();
    for id in [
        NAV_ID,
        NAV_ITEMS_ID,
        NAV_PROGRESS_ID,
        NAV_MENU_TOGGLE_ID,
        LIVE_REGION_ID,
        HERO_TEXT_ID,
        HERO_CURSOR_ID,
        HERO_EXTRAS_ID,
        IGNITE_BUTTON_ID,
        BURST_OVERLAY_ID,
        MUTE_BUTTON_ID,
        OPEN_CONTACT_ID,
        CONTACT_MODAL_ID,
        CONTACT_BACKDROP_ID,
        CONTACT_CLOSE_ID,
        CONTACT_FORM_ID,
        CONTACT_SUBMIT_ID,
        BOOK_CALL_ID,
        DOWNLOAD_CONCEPT_ID,
        EXPERIENCE_MODAL_ID,
        EXPERIENCE_BACKDROP_ID,
        EXPERIENCE_CLOSE_ID,
        EXPERIENCE_BODY_ID,
        EXPERIENCE_DOWNLOAD_ID,
    ] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
}

#[test]
fn page_has_a_section_for_every_nav_entry() {
    let html = page_html();
    for s in sections() {
        assert!(
            html.contains(&format!(r#"<section id="{}""#, s.id)),
            "missing section {}",
            s.id
        );
    }
}

#[test]
fn each_experience_has_a_cell_and_explore_button() {
    let html = page_html();
    for (i, exp) in EXPERIENCES.iter().enumerate() {
        assert!(html.contains(&format!(r#"{DATA_CELL}="{i}""#)));
        assert!(html.contains(&format!(r#"{DATA_EXPERIENCE}="{}""#, exp.id)));
    }
    assert_eq!(html.matches(&format!("{DATA_CELL}=")).count(), EXPERIENCES.len());
}

#[test]
fn modals_start_hidden() {
    let html = page_html();
    assert!(html.contains(&format!(
        r#"id="{CONTACT_MODAL_ID}" class="modal {HIDDEN_CLASS}""#
    )));
    assert!(html.contains(&format!(
        r#"id="{EXPERIENCE_MODAL_ID}" class="modal {HIDDEN_CLASS}""#
    )));
}

#[test]
fn contact_form_marks_required_fields() {
    let html = page_html();
    assert!(html.contains(r#"name="email" placeholder="Email Address" required"#));
    assert!(html.contains(r#"<textarea name="message""#));
    assert!(html.contains(r#"name="phone" placeholder="Phone (optional)">"#));
}

#[test]
fn experience_body_lists_three_phases() {
    let exp = &EXPERIENCES[0];
    let body = experience_body_html(exp);
    assert_eq!(body.matches("<li>").count(), 3);
    assert!(body.contains(&escape(exp.phases[0].title)));
    assert!(body.ends_with("</ol>"));
}

#[test]
fn nav_items_mark_the_active_section() {
    let model = NavModel::new(sections(), 1200.0);
    let view = model.view(ScrollState {
        active: EXPERIENCES[1].id,
        progress: 0.2,
    });
    let html = nav_items_html(&view);
    assert_eq!(html.matches("<li>").count(), sections().len());
    assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
    let active = format!(r#"class="nav-item {ACTIVE_CLASS}" {DATA_SECTION}="{}""#, EXPERIENCES[1].id);
    assert!(html.contains(&active));
}

#[test]
fn nav_labels_only_on_mobile() {
    let scroll = ScrollState {
        active: "hero",
        progress: 0.0,
    };
    let desktop = nav_items_html(&NavModel::new(sections(), 1200.0).view(scroll));
    assert!(!desktop.contains(r#"<span class="label">Home</span>"#));
    let mobile = nav_items_html(&NavModel::new(sections(), 400.0).view(scroll));
    assert!(mobile.contains(r#"<span class="label">Home</span>"#));
}

#[test]
fn cell_selector_targets_the_fx_layer() {
    assert_eq!(cell_selector(3), format!(r#"[{DATA_CELL}="3"] .{CELL_FX_CLASS}"#));
}

#[test]
fn host_page_leaves_cursor_blink_to_the_typing_clock() {
    let host = include_str!("../index.html");
    assert!(!host.contains("@keyframes"));
    assert!(!host.contains("animation:"));
    assert!(host.contains(&format!(r#"id="{CANVAS_ID}""#)));
    assert!(host.contains(&format!(r#"id="{APP_ROOT_ID}""#)));
}
