//! Pointer/touch history for the per-experience interactive visuals.

use crate::constants::{CONSTELLATION_SPAN, INTERACTION_RETENTION, QUIP_PROBABILITY};
use crate::content::{InteractionKind, GEMINI_QUIPS};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// Position inside a cell as percentages of its width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionPoint {
    pub x: f32,
    pub y: f32,
    pub id: u64,
}

/// Screen-space bounds of an interactive cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackShape {
    /// Radial flame that grows, rises and fades.
    RisingBurst,
    /// Portal ring expanding from the tap.
    ExpandingRing,
    /// Trophy spinning a full turn as it floats up.
    SpinningTrophy,
    /// Bubble that pops in and out.
    PopBubble,
    /// Star turning half a revolution, joined to its neighbours.
    RotatingStar,
}

impl InteractionKind {
    pub fn feedback_shape(self) -> FeedbackShape {
        match self {
            InteractionKind::Flames => FeedbackShape::RisingBurst,
            InteractionKind::Maze => FeedbackShape::ExpandingRing,
            InteractionKind::Leaderboard => FeedbackShape::SpinningTrophy,
            InteractionKind::Bubbles => FeedbackShape::PopBubble,
            InteractionKind::Stars => FeedbackShape::RotatingStar,
        }
    }

    pub fn feedback_lifetime(self) -> Duration {
        match self {
            InteractionKind::Flames => Duration::from_millis(1500),
            InteractionKind::Maze => Duration::from_millis(1000),
            InteractionKind::Leaderboard => Duration::from_millis(1000),
            InteractionKind::Bubbles => Duration::from_millis(600),
            InteractionKind::Stars => Duration::from_millis(1500),
        }
    }
}

/// A live point and how far through its animation it is, in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feedback {
    pub point: InteractionPoint,
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: InteractionPoint,
    pub to: InteractionPoint,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    point: InteractionPoint,
    age: Duration,
}

/// Bounded, oldest-first history of interactions within one cell.
pub struct InteractionHistory {
    kind: InteractionKind,
    entries: SmallVec<[Entry; INTERACTION_RETENTION]>,
    next_id: u64,
}

impl InteractionHistory {
    pub fn new(kind: InteractionKind) -> Self {
        Self {
            kind,
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Record a pointer position given in client coordinates.
    pub fn record(&mut self, client_x: f64, client_y: f64, rect: CellRect) -> InteractionPoint {
        let (x, y) = to_percent(client_x, client_y, rect);
        self.push(x, y)
    }

    /// Record a point already expressed as cell percentages.
    pub fn push(&mut self, x: f32, y: f32) -> InteractionPoint {
        let point = InteractionPoint {
            x,
            y,
            id: self.next_id,
        };
        self.next_id += 1;
        if self.entries.len() == INTERACTION_RETENTION {
            self.entries.remove(0);
        }
        self.entries.push(Entry {
            point,
            age: Duration::ZERO,
        });
        point
    }

    pub fn tick(&mut self, dt: Duration) {
        for e in self.entries.iter_mut() {
            e.age += dt;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = InteractionPoint> + '_ {
        self.entries.iter().map(|e| e.point)
    }

    /// Points whose animation has not finished yet.
    pub fn feedbacks(&self) -> Vec<Feedback> {
        let life = self.kind.feedback_lifetime().as_secs_f32();
        self.entries
            .iter()
            .filter(|e| e.age.as_secs_f32() < life)
            .map(|e| Feedback {
                point: e.point,
                progress: (e.age.as_secs_f32() / life).clamp(0.0, 1.0),
            })
            .collect()
    }

    /// Lines joining consecutive points among the most recent few. Only the
    /// constellation theme draws these.
    pub fn constellation_links(&self) -> Vec<Link> {
        if self.kind != InteractionKind::Stars || self.entries.len() < 2 {
            return Vec::new();
        }
        let start = self.entries.len().saturating_sub(CONSTELLATION_SPAN);
        self.entries[start..]
            .windows(2)
            .map(|w| Link {
                from: w[0].point,
                to: w[1].point,
            })
            .collect()
    }
}

#[inline]
pub fn to_percent(client_x: f64, client_y: f64, rect: CellRect) -> (f32, f32) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (50.0, 50.0);
    }
    let x = (client_x - rect.left) / rect.width * 100.0;
    let y = (client_y - rect.top) / rect.height * 100.0;
    (x as f32, y as f32)
}

/// Occasionally pick a quip to narrate an interaction.
pub fn maybe_quip<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    if rng.gen_bool(QUIP_PROBABILITY) {
        GEMINI_QUIPS.choose(rng).copied()
    } else {
        None
    }
}
