//! `HTMLAudioElement` backend for the sound manager.

use crate::constants::MUTE_BUTTON_ID;
use crate::dom;
use site_core::{Clip, ClipPlayer, SoundManager};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type Sound = Rc<RefCell<SoundManager<HtmlClip>>>;

const UNLOCK_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];

pub struct HtmlClip {
    el: web::HtmlAudioElement,
}

impl ClipPlayer for HtmlClip {
    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume as f64);
    }

    fn rewind(&mut self) {
        self.el.set_current_time(0.0);
    }

    fn play(&mut self) {
        match self.el.play() {
            Ok(promise) => spawn_local(async move {
                // blocked autoplay and interrupted loads land here
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[sound] play rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("[sound] play failed: {:?}", e),
        }
    }

    fn pause(&mut self) {
        _ = self.el.pause();
    }

    fn set_looping(&mut self, looping: bool) {
        self.el.set_loop(looping);
    }
}

/// Create one preloaded audio element per clip and hook up load failures.
pub fn create_sound_manager() -> Sound {
    let mut elements = Vec::new();
    let manager = SoundManager::new(|clip| {
        match web::HtmlAudioElement::new_with_src(clip.path()) {
            Ok(el) => {
                el.set_preload("auto");
                elements.push((clip, el.clone()));
                Some(HtmlClip { el })
            }
            Err(e) => {
                log::warn!("[sound] audio element error for {}: {:?}", clip.name(), e);
                None
            }
        }
    });
    let sound = Rc::new(RefCell::new(manager));
    for (clip, el) in elements {
        wire_load_error(&sound, clip, &el);
    }
    sound
}

fn wire_load_error(sound: &Sound, clip: Clip, el: &web::HtmlAudioElement) {
    let sound = sound.clone();
    // media errors arrive on their own task, never inside another borrow
    let closure = Closure::wrap(Box::new(move || {
        sound.borrow_mut().mark_failed(clip);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The first click, touch or key press starts the ambient loop; all three
/// listeners are removed afterwards.
pub fn wire_gesture_unlock(document: &web::Document, sound: Sound) {
    let registered: Rc<RefCell<Option<js_sys::Function>>> = Rc::default();
    let registered_cb = registered.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if sound.borrow_mut().unlock_from_gesture() {
            log::info!("[sound] unlocked by user gesture");
        }
        if let Some(f) = registered_cb.borrow_mut().take() {
            for ev in UNLOCK_EVENTS {
                _ = doc.remove_event_listener_with_callback(ev, &f);
            }
        }
    }) as Box<dyn FnMut()>);
    let func: &js_sys::Function = closure.as_ref().unchecked_ref();
    for ev in UNLOCK_EVENTS {
        _ = document.add_event_listener_with_callback(ev, func);
    }
    *registered.borrow_mut() = Some(func.clone());
    closure.forget();
}

pub fn wire_mute_button(document: &web::Document, sound: Sound) {
    render_mute_button(document, sound.borrow().is_muted());
    let doc = document.clone();
    dom::add_click_listener(document, MUTE_BUTTON_ID, move || {
        let muted = sound.borrow_mut().toggle_mute();
        log::info!("[sound] muted={muted}");
        render_mute_button(&doc, muted);
    });
}

fn render_mute_button(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id(MUTE_BUTTON_ID) {
        el.set_text_content(Some(if muted { "🔇" } else { "🔊" }));
        _ = el.set_attribute("aria-pressed", if muted { "true" } else { "false" });
        let title = if muted { "Enable Sound" } else { "Mute Sound" };
        _ = el.set_attribute("title", title);
        _ = el.set_attribute("aria-label", title);
    }
}
