//! Sound effects: a fixed set of named clips behind a mute switch.
//!
//! The manager is generic over [`ClipPlayer`] so the browser's audio elements
//! and the host-side tests share the same logic. Every failure degrades to
//! silence; nothing here returns an error to the page.

use crate::constants::{AMBIENT_VOLUME_SCALE, DEFAULT_VOLUME, IGNITE_VOLUME};
use crate::error::SiteError;
use fnv::FnvHashMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    Click,
    Spark,
    Ember,
    Ignite,
    Ambient,
}

impl Clip {
    pub const ALL: [Clip; 5] = [Clip::Click, Clip::Spark, Clip::Ember, Clip::Ignite, Clip::Ambient];

    pub fn name(self) -> &'static str {
        match self {
            Clip::Click => "click",
            Clip::Spark => "spark",
            Clip::Ember => "ember",
            Clip::Ignite => "ignite",
            Clip::Ambient => "ambient",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Clip::Click => "/sounds/click.mp3",
            Clip::Spark => "/sounds/spark.mp3",
            Clip::Ember => "/sounds/ember.mp3",
            Clip::Ignite => "/sounds/ignite.mp3",
            Clip::Ambient => "/sounds/ambient.mp3",
        }
    }
}

impl FromStr for Clip {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Clip::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| SiteError::UnknownClip(s.to_string()))
    }
}

/// One loaded audio handle.
///
/// Implementations swallow playback rejections (blocked autoplay and the like).
pub trait ClipPlayer {
    fn set_volume(&mut self, volume: f32);
    fn rewind(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_looping(&mut self, looping: bool);
}

struct Slot<P> {
    player: P,
    failed: bool,
}

pub struct SoundManager<P: ClipPlayer> {
    clips: FnvHashMap<Clip, Slot<P>>,
    muted: bool,
    volume: f32,
    unlocked: bool,
}

impl<P: ClipPlayer> SoundManager<P> {
    /// Eagerly create one player per clip. A clip whose player cannot be
    /// created is left out and stays silent.
    pub fn new(mut load: impl FnMut(Clip) -> Option<P>) -> Self {
        let mut clips = FnvHashMap::default();
        for clip in Clip::ALL {
            match load(clip) {
                Some(mut player) => {
                    player.set_volume(DEFAULT_VOLUME);
                    clips.insert(
                        clip,
                        Slot {
                            player,
                            failed: false,
                        },
                    );
                }
                None => log::warn!("[sound] could not create player for {}", clip.path()),
            }
        }
        Self {
            clips,
            muted: true,
            volume: DEFAULT_VOLUME,
            unlocked: false,
        }
    }

    /// Called from the clip's load-error listener. The clip stays silent.
    pub fn mark_failed(&mut self, clip: Clip) {
        if let Some(slot) = self.clips.get_mut(&clip) {
            if !slot.failed {
                log::warn!("[sound] could not load sound: {}", clip.path());
            }
            slot.failed = true;
        }
    }

    pub fn is_available(&self, clip: Clip) -> bool {
        self.clips.get(&clip).is_some_and(|s| !s.failed)
    }

    fn slot_mut(&mut self, clip: Clip) -> Option<&mut Slot<P>> {
        self.clips.get_mut(&clip).filter(|s| !s.failed)
    }

    /// Rewind and play a clip. No-op while muted or if the clip is unavailable.
    pub fn play(&mut self, clip: Clip, volume: Option<f32>) {
        if self.muted {
            return;
        }
        let volume = volume.unwrap_or(self.volume);
        if let Some(slot) = self.slot_mut(clip) {
            slot.player.set_volume(volume);
            slot.player.rewind();
            slot.player.play();
        }
    }

    pub fn play_ambient(&mut self) {
        if self.muted {
            return;
        }
        let volume = self.volume * AMBIENT_VOLUME_SCALE;
        if let Some(slot) = self.slot_mut(Clip::Ambient) {
            slot.player.set_looping(true);
            slot.player.set_volume(volume);
            slot.player.play();
        }
    }

    pub fn stop_ambient(&mut self) {
        if let Some(slot) = self.slot_mut(Clip::Ambient) {
            slot.player.pause();
            slot.player.rewind();
        }
    }

    /// Muting stops the ambient loop; unmuting after the first gesture resumes it.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.stop_ambient();
        } else if self.unlocked {
            self.play_ambient();
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        let v = self.volume;
        for slot in self.clips.values_mut() {
            slot.player.set_volume(v);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// First user gesture: start ambient playback. Only the first call counts.
    pub fn unlock_from_gesture(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.play_ambient();
        true
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Sounds are wanted only when unmuted and the user has not asked for
    /// reduced motion.
    pub fn should_play(&self, prefers_reduced_motion: bool) -> bool {
        !prefers_reduced_motion && !self.muted
    }

    pub fn play_click(&mut self) {
        self.play(Clip::Click, None);
    }

    pub fn play_spark(&mut self) {
        self.play(Clip::Spark, None);
    }

    pub fn play_ember(&mut self) {
        self.play(Clip::Ember, None);
    }

    pub fn play_ignite(&mut self) {
        self.play(Clip::Ignite, Some(IGNITE_VOLUME));
    }

    /// Page teardown.
    pub fn shutdown(&mut self) {
        self.stop_ambient();
    }
}
