//! Scroll-driven section tracking.
//!
//! On each scroll the host measures every registered section and hands the
//! bounds over; the tracker decides which one sits under the viewport's
//! vertical midpoint.

use crate::constants::{DIMMED_SECTION_OPACITY, REVEAL_MARGIN_FRACTION};
use crate::error::SiteError;

/// Viewport-relative vertical bounds of a section (as from `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[inline]
    pub fn contains_y(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub active: &'static str,
    pub progress: f32,
}

pub struct SectionTracker {
    ids: Vec<&'static str>,
    active: usize,
    progress: f32,
}

impl SectionTracker {
    /// Starts on the first id. `ids` must not be empty.
    pub fn new(ids: Vec<&'static str>) -> Self {
        assert!(!ids.is_empty(), "section tracker needs at least one section");
        Self {
            ids,
            active: 0,
            progress: 0.0,
        }
    }

    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    pub fn active(&self) -> &'static str {
        self.ids[self.active]
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            active: self.active(),
            progress: self.progress,
        }
    }

    /// Apply the midpoint rule. `bounds` is parallel to `ids`; `None` marks a
    /// section that is not mounted. When nothing straddles the midpoint the
    /// previous section stays active. Returns true if the active section changed.
    pub fn observe(&mut self, bounds: &[Option<SectionBounds>], viewport_height: f64) -> bool {
        let mid = viewport_height / 2.0;
        let hit = bounds
            .iter()
            .take(self.ids.len())
            .position(|b| b.is_some_and(|b| b.contains_y(mid)));
        match hit {
            Some(i) if i != self.active => {
                self.active = i;
                true
            }
            _ => false,
        }
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub fn index_of(&self, id: &str) -> Result<usize, SiteError> {
        self.ids
            .iter()
            .position(|s| *s == id)
            .ok_or_else(|| SiteError::UnknownSection(id.to_string()))
    }
}

/// Fraction of the scrollable height already scrolled, in `[0, 1]`.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

/// Whether a section overlaps the viewport shrunk by `margin_fraction` on
/// the top and bottom.
#[inline]
pub fn in_view(bounds: SectionBounds, viewport_height: f64, margin_fraction: f64) -> bool {
    let inset = viewport_height * margin_fraction;
    bounds.bottom > inset && bounds.top < viewport_height - inset
}

/// Fades a section in the first time it enters view, then stays shown.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true exactly once: on the observation that reveals the section.
    pub fn observe(&mut self, bounds: SectionBounds, viewport_height: f64) -> bool {
        if !self.revealed && in_view(bounds, viewport_height, REVEAL_MARGIN_FRACTION) {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Opacity for sections that dim whenever they leave view.
#[inline]
pub fn live_opacity(bounds: SectionBounds, viewport_height: f64) -> f32 {
    if in_view(bounds, viewport_height, REVEAL_MARGIN_FRACTION) {
        1.0
    } else {
        DIMMED_SECTION_OPACITY
    }
}
