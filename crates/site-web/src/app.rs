//! The page handle shared by every event listener and timer.

use crate::audio::Sound;
use crate::constants::*;
use crate::dom;
use crate::views::{self, style};
use site_core::{Effect, PageAction, PageState, EXPERIENCES};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

#[derive(Clone)]
pub struct App {
    pub document: web::Document,
    pub page: Rc<RefCell<PageState>>,
    pub sound: Sound,
    // cells with feedback still animating
    live_cells: Rc<RefCell<Vec<bool>>>,
}

impl App {
    pub fn new(document: web::Document, inner_width: f64, seed: u64, sound: Sound) -> Self {
        Self {
            document,
            page: Rc::new(RefCell::new(PageState::new(inner_width, seed))),
            sound,
            live_cells: Rc::new(RefCell::new(vec![false; EXPERIENCES.len()])),
        }
    }

    /// Initial paint of everything driven by page state.
    pub fn render_all(&self) {
        self.apply(vec![
            Effect::HeroText,
            Effect::Nav,
            Effect::ContactChanged,
            Effect::ExperienceChanged,
        ]);
    }

    pub fn dispatch(&self, action: PageAction) {
        let effects = self.page.borrow_mut().dispatch(action);
        self.apply(effects);
    }

    pub fn tick(&self, dt: Duration) {
        let effects = self.page.borrow_mut().tick(dt);
        self.apply(effects);
        self.redraw_live_cells();
    }

    fn redraw_live_cells(&self) {
        let page = self.page.borrow();
        let mut live = self.live_cells.borrow_mut();
        for (i, animating) in live.iter_mut().enumerate() {
            if !*animating {
                continue;
            }
            if let Some(history) = page.history(i) {
                *animating = views::cells::render(&self.document, i, history);
            }
        }
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(&self, effect: Effect) {
        let doc = &self.document;
        match effect {
            Effect::ScrollTo(id) => dom::scroll_to_section(doc, id),
            Effect::Play(clip, volume) => {
                let mut sound = self.sound.borrow_mut();
                if sound.should_play(dom::prefers_reduced_motion(REDUCED_MOTION_QUERY)) {
                    sound.play(clip, volume);
                }
            }
            // the nav redraw that follows carries the highlight
            Effect::ActiveSection(id) => log::debug!("[nav] active section {id}"),
            Effect::Progress(fill) => views::nav::render_progress(doc, fill),
            Effect::RevealSection(id) => {
                if let Some(el) = doc.get_element_by_id(id) {
                    dom::set_class(&el, REVEALED_CLASS, true);
                }
            }
            Effect::SectionOpacity(id, opacity) => {
                if let Some(el) = doc.get_element_by_id(id) {
                    dom::set_style(&el, "opacity", &style::opacity_value(opacity));
                }
            }
            Effect::HeroText => views::hero::render_text(doc, &self.page.borrow().hero),
            Effect::HeroRevealed => views::hero::reveal_extras(doc),
            Effect::IgniteBurst(active) => views::hero::render_burst(doc, active),
            Effect::Nav => views::nav::render(doc, &self.page.borrow().nav_view()),
            Effect::ContactChanged => {
                views::modal::render_contact(doc, &self.page.borrow().contact)
            }
            Effect::ExperienceChanged => {
                views::modal::render_experience(doc, &self.page.borrow().experience)
            }
            Effect::Interaction(index, _) => {
                if let Some(flag) = self.live_cells.borrow_mut().get_mut(index) {
                    *flag = true;
                }
                if let Some(history) = self.page.borrow().history(index) {
                    views::cells::render(doc, index, history);
                }
            }
            Effect::Submitted(draft) => {
                log::debug!("[contact] submitted by {}", draft.name);
            }
        }
    }
}
