//! Whole-page state and its single writer.
//!
//! Views turn DOM events into [`PageAction`]s and apply the returned
//! [`Effect`]s; timers call [`PageState::tick`]. Nothing else mutates the
//! page, so every render reads one consistent snapshot.

use crate::constants::IGNITE_VOLUME;
use crate::content::{
    self, sections, ExperienceDescriptor, EXPERIENCES, HERO_FLICKER_REPLACEMENT,
    HERO_FLICKER_WORD, HERO_QUESTION, HERO_SECTION_ID, TECH_SECTION_ID,
};
use crate::error::SiteError;
use crate::ignite::{IgniteEvent, IgniteSequence};
use crate::interaction::{maybe_quip, InteractionHistory, InteractionPoint};
use crate::modal::{ContactDraft, ContactField, ContactModal, ContactTab, ExperienceModal};
use crate::nav::{NavAction, NavModel, NavView};
use crate::sound::Clip;
use crate::tracker::{live_opacity, scroll_progress, RevealLatch, ScrollState, SectionBounds, SectionTracker};
use crate::typing::{Flicker, HeroIntro, TypingAnimator, TypingConfig, TypingEvent};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// Bounds are parallel to [`PageState::section_ids`].
    Scrolled {
        bounds: Vec<Option<SectionBounds>>,
        viewport_height: f64,
        scroll_y: f64,
        scroll_height: f64,
    },
    Resized {
        inner_width: f64,
    },
    NavSelected(String),
    ToggleMenu,
    IgniteClicked,
    OpenExperience(String),
    CloseExperience,
    DownloadExperience,
    OpenContact,
    CloseContact,
    ContactTab(ContactTab),
    ContactInput(ContactField, String),
    ContactSubmit,
    BookCall,
    DownloadConcept,
    /// Point in cell percentages.
    Interacted {
        experience: usize,
        x: f32,
        y: f32,
    },
    Escape,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ScrollTo(&'static str),
    Play(Clip, Option<f32>),
    ActiveSection(&'static str),
    Progress(f32),
    RevealSection(&'static str),
    SectionOpacity(&'static str, f32),
    HeroText,
    HeroRevealed,
    IgniteBurst(bool),
    Nav,
    ContactChanged,
    ExperienceChanged,
    Interaction(usize, InteractionPoint),
    Submitted(ContactDraft),
}

pub struct PageState {
    tracker: SectionTracker,
    nav: NavModel,
    reveals: Vec<RevealLatch>,
    pub hero: HeroIntro,
    ignite: IgniteSequence,
    pub contact: ContactModal,
    pub experience: ExperienceModal,
    histories: Vec<InteractionHistory>,
    rng: StdRng,
    typing_events: Vec<TypingEvent>,
    ignite_events: Vec<IgniteEvent>,
}

impl PageState {
    pub fn new(inner_width: f64, seed: u64) -> Self {
        let descriptors = sections();
        let ids: Vec<&'static str> = descriptors.iter().map(|s| s.id).collect();
        let typing = TypingAnimator::new(
            HERO_QUESTION,
            TypingConfig {
                flicker: Some(Flicker {
                    word: HERO_FLICKER_WORD.to_string(),
                    replacement: HERO_FLICKER_REPLACEMENT.to_string(),
                }),
                ..TypingConfig::default()
            },
        );
        Self {
            reveals: vec![RevealLatch::default(); ids.len()],
            tracker: SectionTracker::new(ids),
            nav: NavModel::new(descriptors, inner_width),
            hero: HeroIntro::new(typing),
            ignite: IgniteSequence::new(EXPERIENCES[0].id),
            contact: ContactModal::default(),
            experience: ExperienceModal::default(),
            histories: EXPERIENCES
                .iter()
                .map(|e| InteractionHistory::new(e.kind))
                .collect(),
            rng: StdRng::seed_from_u64(seed),
            typing_events: Vec::new(),
            ignite_events: Vec::new(),
        }
    }

    pub fn section_ids(&self) -> &[&'static str] {
        self.tracker.ids()
    }

    pub fn scroll(&self) -> ScrollState {
        self.tracker.state()
    }

    pub fn nav_view(&self) -> NavView {
        self.nav.view(self.tracker.state())
    }

    pub fn history(&self, experience: usize) -> Option<&InteractionHistory> {
        self.histories.get(experience)
    }

    pub fn is_bursting(&self) -> bool {
        self.ignite.is_bursting()
    }

    pub fn dispatch(&mut self, action: PageAction) -> Vec<Effect> {
        let mut fx = Vec::new();
        match action {
            PageAction::Scrolled {
                bounds,
                viewport_height,
                scroll_y,
                scroll_height,
            } => self.on_scroll(&bounds, viewport_height, scroll_y, scroll_height, &mut fx),
            PageAction::Resized { inner_width } => {
                if self.nav.resize(inner_width) {
                    fx.push(Effect::Nav);
                }
            }
            PageAction::NavSelected(id) => match self.nav.select(&id) {
                Some(NavAction::ScrollTo(target)) => {
                    fx.push(Effect::ScrollTo(target));
                    fx.push(Effect::Nav);
                }
                None => log::warn!("[nav] {}", SiteError::UnknownSection(id)),
            },
            PageAction::ToggleMenu => {
                self.nav.toggle_menu();
                fx.push(Effect::Nav);
            }
            PageAction::IgniteClicked => {
                if self.ignite.trigger(&mut self.ignite_events) {
                    self.drain_ignite(&mut fx);
                }
            }
            PageAction::OpenExperience(id) => match content::experience(&id) {
                Some(exp) => {
                    self.experience.open(exp);
                    fx.push(Effect::ExperienceChanged);
                }
                None => log::warn!("[experience] {}", SiteError::UnknownExperience(id)),
            },
            PageAction::CloseExperience => {
                self.experience.close();
                fx.push(Effect::ExperienceChanged);
            }
            PageAction::DownloadExperience => self.experience.download(),
            PageAction::OpenContact => {
                self.contact.open();
                fx.push(Effect::ContactChanged);
            }
            PageAction::CloseContact => {
                self.contact.close();
                fx.push(Effect::ContactChanged);
            }
            PageAction::ContactTab(tab) => {
                self.contact.select_tab(tab);
                fx.push(Effect::ContactChanged);
            }
            PageAction::ContactInput(field, value) => self.contact.set_field(field, value),
            PageAction::ContactSubmit => {
                let draft = self.contact.submit();
                fx.push(Effect::Submitted(draft));
                fx.push(Effect::ContactChanged);
            }
            PageAction::BookCall => self.contact.book_call(),
            PageAction::DownloadConcept => self.contact.download_concept(),
            PageAction::Interacted { experience, x, y } => {
                if let Some(history) = self.histories.get_mut(experience) {
                    let point = history.push(x, y);
                    if let Some(quip) = maybe_quip(&mut self.rng) {
                        log::info!("Gemini says: {}", quip);
                    }
                    fx.push(Effect::Interaction(experience, point));
                }
            }
            PageAction::Escape => {
                if self.contact.is_open() {
                    self.contact.close();
                    fx.push(Effect::ContactChanged);
                }
                if self.experience.is_open() {
                    self.experience.close();
                    fx.push(Effect::ExperienceChanged);
                }
            }
        }
        fx
    }

    fn on_scroll(
        &mut self,
        bounds: &[Option<SectionBounds>],
        viewport_height: f64,
        scroll_y: f64,
        scroll_height: f64,
        fx: &mut Vec<Effect>,
    ) {
        let progress = scroll_progress(scroll_y, scroll_height, viewport_height);
        self.tracker.set_progress(progress);
        fx.push(Effect::Progress(progress));
        if self.tracker.observe(bounds, viewport_height) {
            fx.push(Effect::ActiveSection(self.tracker.active()));
            fx.push(Effect::Nav);
        }

        for (i, b) in bounds.iter().enumerate().take(self.reveals.len()) {
            let Some(b) = b else { continue };
            let id = self.tracker.ids()[i];
            // the hero is on screen from the start; tech tracks visibility live
            if id == TECH_SECTION_ID {
                fx.push(Effect::SectionOpacity(id, live_opacity(*b, viewport_height)));
            } else if id != HERO_SECTION_ID && self.reveals[i].observe(*b, viewport_height) {
                fx.push(Effect::RevealSection(id));
            }
        }
    }

    /// Advance every time-driven part of the page.
    pub fn tick(&mut self, dt: Duration) -> Vec<Effect> {
        let mut fx = Vec::new();

        let was_cursor = self.hero.typing.cursor_visible();
        let revealed = self.hero.tick(dt, &mut self.typing_events);
        if !self.typing_events.is_empty() || was_cursor != self.hero.typing.cursor_visible() {
            fx.push(Effect::HeroText);
        }
        self.typing_events.clear();
        if revealed {
            fx.push(Effect::HeroRevealed);
        }

        self.ignite.tick(dt, &mut self.ignite_events);
        self.drain_ignite(&mut fx);

        for h in self.histories.iter_mut() {
            h.tick(dt);
        }
        fx
    }

    fn drain_ignite(&mut self, fx: &mut Vec<Effect>) {
        for ev in self.ignite_events.drain(..) {
            match ev {
                IgniteEvent::BurstStarted => fx.push(Effect::IgniteBurst(true)),
                IgniteEvent::BurstEnded => fx.push(Effect::IgniteBurst(false)),
                IgniteEvent::PlayIgnite => fx.push(Effect::Play(Clip::Ignite, Some(IGNITE_VOLUME))),
                IgniteEvent::ScrollTo(id) => fx.push(Effect::ScrollTo(id)),
            }
        }
    }

    pub fn selected_experience(&self) -> Option<&'static ExperienceDescriptor> {
        self.experience.view()
    }
}
