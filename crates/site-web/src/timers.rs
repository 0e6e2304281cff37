//! Cancellable scheduling: `setInterval` and the `requestAnimationFrame` chain.
//!
//! Both handles stop their callback when dropped, so whoever owns the handle
//! owns the lifetime of the work.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// A `requestAnimationFrame` chain that reschedules itself until cancelled.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            frame();
            request_frame(&state);
        }) as Box<dyn FnMut()>));
        request_frame(&state);
        Self { state }
    }

    pub fn cancel(&self) {
        self.state.running.set(false);
        if let (Some(id), Some(w)) = (self.state.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(state: &LoopState) {
    let tick = state.tick.borrow();
    if let (Some(cb), Some(w)) = (tick.as_ref(), web::window()) {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => state.pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }
}
