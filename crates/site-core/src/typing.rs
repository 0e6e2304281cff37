//! Time-driven reveal of a single line of text.
//!
//! The animator owns no timers. The host advances it with [`TypingAnimator::tick`]
//! from whatever clock it has and reacts to the emitted [`TypingEvent`]s, so
//! dropping the animator is all the cancellation a torn-down view needs.

use crate::constants::{
    CURSOR_BLINK_INTERVAL, FLICKER_DELAY, FLICKER_DURATION, HERO_REVEAL_DELAY, TYPING_CHAR_DELAY,
};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flicker {
    pub word: String,
    pub replacement: String,
}

#[derive(Clone, Debug)]
pub struct TypingConfig {
    pub char_delay: Duration,
    pub flicker: Option<Flicker>,
    pub auto_start: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            char_delay: TYPING_CHAR_DELAY,
            flicker: None,
            auto_start: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingEvent {
    /// Number of characters now shown.
    CharRevealed(usize),
    Completed,
    FlickerStarted,
    FlickerEnded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FlickerPhase {
    Idle,
    Waiting(Duration),
    Active(Duration),
    Done,
}

pub struct TypingAnimator {
    chars: Vec<char>,
    config: TypingConfig,
    revealed: usize,
    step_accum: Duration,
    blink_accum: Duration,
    cursor_on: bool,
    complete: bool,
    completion_reported: bool,
    flicker: FlickerPhase,
}

impl TypingAnimator {
    pub fn new(text: &str, config: TypingConfig) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let auto_start = config.auto_start;
        Self {
            revealed: if auto_start { 0 } else { chars.len() },
            complete: !auto_start,
            chars,
            config,
            step_accum: Duration::ZERO,
            blink_accum: Duration::ZERO,
            cursor_on: true,
            completion_reported: false,
            flicker: FlickerPhase::Idle,
        }
    }

    pub fn tick(&mut self, dt: Duration, out: &mut Vec<TypingEvent>) {
        self.blink_accum += dt;
        while self.blink_accum >= CURSOR_BLINK_INTERVAL {
            self.blink_accum -= CURSOR_BLINK_INTERVAL;
            self.cursor_on = !self.cursor_on;
        }

        if !self.complete {
            self.step_accum += dt;
            // a zero delay reveals everything at once rather than spinning
            while self.revealed < self.chars.len()
                && (self.config.char_delay.is_zero() || self.step_accum >= self.config.char_delay)
            {
                self.step_accum = self.step_accum.saturating_sub(self.config.char_delay);
                self.revealed += 1;
                out.push(TypingEvent::CharRevealed(self.revealed));
            }
            if self.revealed == self.chars.len() {
                self.complete = true;
                if self.config.flicker.is_some() {
                    self.flicker = FlickerPhase::Waiting(Duration::ZERO);
                }
            }
        } else {
            self.advance_flicker(dt, out);
        }

        if self.complete && !self.completion_reported {
            self.completion_reported = true;
            out.push(TypingEvent::Completed);
        }
    }

    fn advance_flicker(&mut self, dt: Duration, out: &mut Vec<TypingEvent>) {
        match self.flicker {
            FlickerPhase::Waiting(elapsed) => {
                let elapsed = elapsed + dt;
                if elapsed >= FLICKER_DELAY {
                    out.push(TypingEvent::FlickerStarted);
                    self.flicker = FlickerPhase::Active(elapsed - FLICKER_DELAY);
                    self.advance_flicker(Duration::ZERO, out);
                } else {
                    self.flicker = FlickerPhase::Waiting(elapsed);
                }
            }
            FlickerPhase::Active(elapsed) => {
                let elapsed = elapsed + dt;
                if elapsed >= FLICKER_DURATION {
                    out.push(TypingEvent::FlickerEnded);
                    self.flicker = FlickerPhase::Done;
                } else {
                    self.flicker = FlickerPhase::Active(elapsed);
                }
            }
            FlickerPhase::Idle | FlickerPhase::Done => {}
        }
    }

    /// Text as it should be rendered right now, including any flicker swap.
    pub fn display_text(&self) -> String {
        let shown: String = self.chars[..self.revealed].iter().collect();
        match (&self.config.flicker, self.flicker) {
            (Some(f), FlickerPhase::Active(_)) => shown.replacen(&f.word, &f.replacement, 1),
            _ => shown,
        }
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn text_len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_flickering(&self) -> bool {
        matches!(self.flicker, FlickerPhase::Active(_))
    }

    /// The cursor blinks only while characters are still being typed.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_on && !self.complete
    }
}

/// Hero block: the typed question plus the delayed reveal of everything else.
pub struct HeroIntro {
    pub typing: TypingAnimator,
    since_complete: Option<Duration>,
    elements_shown: bool,
}

impl HeroIntro {
    pub fn new(typing: TypingAnimator) -> Self {
        Self {
            typing,
            since_complete: None,
            elements_shown: false,
        }
    }

    /// Returns true on the tick the secondary elements become visible.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<TypingEvent>) -> bool {
        let before = out.len();
        self.typing.tick(dt, out);
        if let Some(elapsed) = self.since_complete.as_mut() {
            *elapsed += dt;
        } else if out[before..].contains(&TypingEvent::Completed) {
            self.since_complete = Some(Duration::ZERO);
        }
        if !self.elements_shown && self.since_complete.is_some_and(|e| e >= HERO_REVEAL_DELAY) {
            self.elements_shown = true;
            return true;
        }
        false
    }

    pub fn elements_shown(&self) -> bool {
        self.elements_shown
    }
}
