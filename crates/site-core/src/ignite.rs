use crate::constants::{IGNITE_BURST_DURATION, IGNITE_SCROLL_DELAY};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgniteEvent {
    BurstStarted,
    BurstEnded,
    PlayIgnite,
    ScrollTo(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    Burst(Duration),
    Scrolling(Duration),
}

/// Flame burst, then the ignite clip, then a scroll to the first experience.
pub struct IgniteSequence {
    target: &'static str,
    stage: Stage,
}

impl IgniteSequence {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            stage: Stage::Idle,
        }
    }

    /// Starts the sequence; ignored while one is already running.
    pub fn trigger(&mut self, out: &mut Vec<IgniteEvent>) -> bool {
        if self.stage != Stage::Idle {
            return false;
        }
        self.stage = Stage::Burst(Duration::ZERO);
        out.push(IgniteEvent::BurstStarted);
        true
    }

    pub fn tick(&mut self, dt: Duration, out: &mut Vec<IgniteEvent>) {
        match self.stage {
            Stage::Idle => {}
            Stage::Burst(elapsed) => {
                let elapsed = elapsed + dt;
                if elapsed >= IGNITE_BURST_DURATION {
                    out.push(IgniteEvent::BurstEnded);
                    out.push(IgniteEvent::PlayIgnite);
                    self.stage = Stage::Scrolling(Duration::ZERO);
                    self.tick(elapsed - IGNITE_BURST_DURATION, out);
                } else {
                    self.stage = Stage::Burst(elapsed);
                }
            }
            Stage::Scrolling(elapsed) => {
                let elapsed = elapsed + dt;
                if elapsed >= IGNITE_SCROLL_DELAY {
                    out.push(IgniteEvent::ScrollTo(self.target));
                    self.stage = Stage::Idle;
                } else {
                    self.stage = Stage::Scrolling(elapsed);
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn is_bursting(&self) -> bool {
        matches!(self.stage, Stage::Burst(_))
    }
}
