use std::time::Duration;

// Shared tuning constants for the page state machines and the particle layer.

// Typing animation
pub const TYPING_CHAR_DELAY: Duration = Duration::from_millis(50);
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);
pub const FLICKER_DELAY: Duration = Duration::from_millis(1000); // pause after completion
pub const FLICKER_DURATION: Duration = Duration::from_millis(200);
pub const HERO_REVEAL_DELAY: Duration = Duration::from_millis(500); // secondary hero elements

// Ignite call-to-action
pub const IGNITE_BURST_DURATION: Duration = Duration::from_millis(1200);
pub const IGNITE_SCROLL_DELAY: Duration = Duration::from_millis(500);
pub const IGNITE_VOLUME: f32 = 0.5;

// Particle field
pub const PARTICLE_COUNT: usize = 150;
pub const PAGE_PARTICLE_INTENSITY: f32 = 0.8;
pub const HERO_PARTICLE_INTENSITY: f32 = 1.0;
pub const EMBER_PROBABILITY: f64 = 0.3;
pub const PARTICLE_DRIFT_PER_FRAME: f32 = 0.005; // world units, scaled by intensity
pub const POINTER_INFLUENCE: f32 = 0.02; // scaled by intensity
pub const POINTER_PULL_SCALE: f32 = 0.001;
pub const PARTICLE_DEPTH_SPREAD: f32 = 10.0; // z in [-5, 5]
pub const EMBER_FLICKER_RATE: f32 = 10.0; // radians per second
pub const EMBER_FLICKER_BASE: f32 = 0.8;
pub const EMBER_FLICKER_SPAN: f32 = 0.2;
pub const EMBER_COLOR: [f32; 3] = [1.0, 0.4, 0.0];
pub const SPARK_COLOR: [f32; 3] = [1.0, 1.0, 0.8];
pub const PARTICLE_SIZE_PX: f32 = 2.0;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const HAZE_OPACITY: f32 = 0.1;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 10.0;

// Interaction cells
pub const INTERACTION_RETENTION: usize = 10;
pub const CONSTELLATION_SPAN: usize = 3; // last N points joined by lines
pub const QUIP_PROBABILITY: f64 = 0.3;

// Scroll tracking and navigation
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const REVEAL_MARGIN_FRACTION: f64 = 0.2;
pub const DIMMED_SECTION_OPACITY: f32 = 0.3;

// Sound
pub const DEFAULT_VOLUME: f32 = 0.3;
pub const AMBIENT_VOLUME_SCALE: f32 = 0.5;
